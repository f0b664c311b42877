//! Chart data assembly and plot layout.
//!
//! [`ChartSeries`] is the raw labelled series handed to the chart widget;
//! [`ChartLayout`] maps it into plot coordinates.

use crate::arc::Point;
use flame_core::History;

/// Labelled series for the line chart.  Values pass through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// 1-based sample positions as strings (`"1"`, `"2"`, …).
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_history(history: &History) -> Self {
        let values: Vec<f64> = history.iter().map(f64::from).collect();
        let labels = (1..=values.len()).map(|i| i.to_string()).collect();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// An empty series gets a placeholder instead of a chart.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(min, max)` of the values, `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// One step of the polyline, starting from the previous point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point),
    Cubic { c1: Point, c2: Point, to: Point },
}

/// Plot rectangle, y-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left:   f64,
    pub top:    f64,
    pub width:  f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A series placed inside a [`PlotArea`].
///
/// The y axis spans the data's own min..max, so the line always fills the
/// plot height.  A flat series is drawn across the vertical centre.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub area:   PlotArea,
    pub points: Vec<Point>,
    min: f64,
    max: f64,
}

impl ChartLayout {
    pub fn new(series: &ChartSeries, area: PlotArea) -> Self {
        let (min, max) = series.range().unwrap_or((0.0, 0.0));
        let n = series.len();

        let points = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = if n > 1 {
                    area.left + area.width * i as f64 / (n - 1) as f64
                } else {
                    area.left + area.width / 2.0
                };
                Point::new(x, y_for(v, min, max, &area))
            })
            .collect();

        Self { area, points, min, max }
    }

    /// Path steps after the first point.  `smooth` bends each step into a
    /// cubic whose control points sit at the horizontal midpoint, which keeps
    /// the curve monotone between samples.
    pub fn segments(&self, smooth: bool) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                if smooth {
                    let mid = (a.x + b.x) / 2.0;
                    Segment::Cubic {
                        c1: Point::new(mid, a.y),
                        c2: Point::new(mid, b.y),
                        to: b,
                    }
                } else {
                    Segment::Line(b)
                }
            })
            .collect()
    }

    /// `count` evenly spaced y-axis ticks from max (top) to min (bottom),
    /// as `(value, y)` pairs.  A flat series yields a single tick.
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        if self.points.is_empty() || count == 0 {
            return Vec::new();
        }
        if self.max == self.min || count == 1 {
            return vec![(self.max, y_for(self.max, self.min, self.max, &self.area))];
        }

        (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                let value = self.max - (self.max - self.min) * t;
                (value, self.area.top + self.area.height * t)
            })
            .collect()
    }
}

fn y_for(v: f64, min: f64, max: f64, area: &PlotArea) -> f64 {
    if max > min {
        area.bottom() - (v - min) / (max - min) * area.height
    } else {
        area.top + area.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea { left: 10.0, top: 0.0, width: 100.0, height: 50.0 };

    fn series(values: &[u8]) -> ChartSeries {
        let mut history = History::default();
        for &v in values {
            history.push(v);
        }
        ChartSeries::from_history(&history)
    }

    #[test]
    fn labels_are_one_based_positions() {
        let s = series(&[40, 10, 90]);
        assert_eq!(s.labels, vec!["1", "2", "3"]);
        assert_eq!(s.values, vec![40.0, 10.0, 90.0]);
    }

    #[test]
    fn empty_history_gives_empty_series() {
        let s = series(&[]);
        assert!(s.is_empty());
        assert_eq!(s.range(), None);
        assert!(ChartLayout::new(&s, AREA).points.is_empty());
    }

    #[test]
    fn full_history_has_ten_labels() {
        let values: Vec<u8> = (0..25).collect();
        let s = series(&values);
        assert_eq!(s.len(), 10);
        assert_eq!(s.labels.last().map(String::as_str), Some("10"));
        assert_eq!(s.values.first(), Some(&15.0));
    }

    #[test]
    fn points_span_the_plot() {
        let layout = ChartLayout::new(&series(&[0, 50, 100]), AREA);
        assert_eq!(
            layout.points,
            vec![Point::new(10.0, 50.0), Point::new(60.0, 25.0), Point::new(110.0, 0.0)]
        );
    }

    #[test]
    fn flat_series_sits_mid_height() {
        let layout = ChartLayout::new(&series(&[42, 42]), AREA);
        assert!(layout.points.iter().all(|p| p.y == 25.0));
        assert_eq!(layout.y_ticks(4), vec![(42.0, 25.0)]);
    }

    #[test]
    fn single_sample_is_centred() {
        let layout = ChartLayout::new(&series(&[7]), AREA);
        assert_eq!(layout.points, vec![Point::new(60.0, 25.0)]);
        assert!(layout.segments(true).is_empty());
    }

    #[test]
    fn smooth_segments_use_midpoint_controls() {
        let layout = ChartLayout::new(&series(&[0, 100]), AREA);
        assert_eq!(
            layout.segments(true),
            vec![Segment::Cubic {
                c1: Point::new(60.0, 50.0),
                c2: Point::new(60.0, 0.0),
                to: Point::new(110.0, 0.0),
            }]
        );
        assert_eq!(layout.segments(false), vec![Segment::Line(Point::new(110.0, 0.0))]);
    }

    #[test]
    fn y_ticks_run_top_to_bottom() {
        let layout = ChartLayout::new(&series(&[10, 70]), AREA);
        let ticks = layout.y_ticks(4);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], (70.0, 0.0));
        assert_eq!(ticks[3], (10.0, 50.0));
    }
}
