//! Geometry and data assembly behind the Home screen.
//!
//! Everything here is pure: widgets in `flame-widgets` feed the results to
//! iced's svg and canvas renderers.

pub mod arc;
pub mod chart;
pub mod svg;

pub use arc::{arc_length, describe_arc, polar_to_cartesian, GaugeGeometry, Point, MAX_SWEEP};
pub use chart::{ChartLayout, ChartSeries, PlotArea, Segment};
pub use svg::gauge_svg;
