//! Standalone SVG documents for the vector renderer.

use crate::arc::GaugeGeometry;
use flame_theme::{Color, GaugeStyle};
use std::fmt::Write as _;

/// SVG document for the gauge: grey track with the filled arc on top.
///
/// The track keeps butt caps; the filled arc gets round caps.
pub fn gauge_svg(geometry: &GaugeGeometry, style: &GaugeStyle, color: Color) -> String {
    let vb = style.view_box;
    let w = style.stroke_width;

    let mut svg = String::with_capacity(512);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb} {vb}" width="{vb}" height="{vb}">"#
    );
    let _ = write!(
        svg,
        r#"<path d="{}" stroke="{}" stroke-width="{w}" fill="none"/>"#,
        geometry.background,
        style.track.to_hex(),
    );
    let _ = write!(
        svg,
        r#"<path d="{}" stroke="{}" stroke-width="{w}" fill="none" stroke-linecap="round"/>"#,
        geometry.foreground,
        color.to_hex(),
    );
    svg.push_str("</svg>");
    svg
}
