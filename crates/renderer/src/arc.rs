//! Circular arc geometry for the gauge.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, in a y-down
//! coordinate system (SVG / screen space).

use flame_core::MAX_VALUE;
use std::fmt::Write as _;

/// Angle where both gauge arcs begin.
pub const GAUGE_START: f64 = -126.0;
/// Angle where the background arc ends.
pub const GAUGE_END: f64 = 126.0;
/// Sweep of a full-scale reading (70% of a circle).
pub const MAX_SWEEP: f64 = GAUGE_END - GAUGE_START;

/// A point in view-box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point on the circle at `angle` degrees clockwise from the top.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    let rad = (angle - 90.0) * std::f64::consts::PI / 180.0;
    Point::new(cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// SVG path data (`M … A …`) for the arc between two angles.
///
/// The path starts at the `end` angle and travels back to `start` with the
/// sweep flag at 0, which traces the same visual arc as a clockwise sweep
/// from `start` to `end`.  The large-arc flag is set once the span exceeds
/// 180°.
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let from = polar_to_cartesian(cx, cy, radius, end);
    let to = polar_to_cartesian(cx, cy, radius, start);
    let large_arc = if end - start <= 180.0 { '0' } else { '1' };

    let mut d = String::with_capacity(64);
    let _ = write!(
        d,
        "M {} {} A {radius} {radius} 0 {large_arc} 0 {} {}",
        from.x, from.y, to.x, to.y
    );
    d
}

/// Sweep in degrees for a reading: `value / 100 × 252`.
pub fn arc_length(value: u8) -> f64 {
    f64::from(value.min(MAX_VALUE)) / f64::from(MAX_VALUE) * MAX_SWEEP
}

/// Both gauge paths for one reading, in a 100×100 view box.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeGeometry {
    /// Full-scale grey track.
    pub background: String,
    /// Filled portion; zero length at 0.
    pub foreground: String,
    /// Sweep of the filled portion in degrees.
    pub sweep: f64,
}

impl GaugeGeometry {
    pub const CENTER: f64 = 50.0;
    pub const RADIUS: f64 = 40.0;

    pub fn for_value(value: u8) -> Self {
        let (c, r) = (Self::CENTER, Self::RADIUS);
        let sweep = arc_length(value);
        Self {
            background: describe_arc(c, c, r, GAUGE_START, GAUGE_END),
            foreground: describe_arc(c, c, r, GAUGE_START, GAUGE_START + sweep),
            sweep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    /// Pull the numeric fields back out of an `M x y A rx ry rot large sweep x y` path.
    fn fields(d: &str) -> Vec<String> {
        d.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn zero_degrees_is_top_of_circle() {
        assert!(close(polar_to_cartesian(50.0, 50.0, 40.0, 0.0), Point::new(50.0, 10.0)));
        assert!(close(polar_to_cartesian(-3.0, 7.5, 2.0, 0.0), Point::new(-3.0, 5.5)));
    }

    #[test]
    fn quarter_turns_go_clockwise() {
        assert!(close(polar_to_cartesian(0.0, 0.0, 1.0, 90.0), Point::new(1.0, 0.0)));
        assert!(close(polar_to_cartesian(0.0, 0.0, 1.0, 180.0), Point::new(0.0, 1.0)));
        assert!(close(polar_to_cartesian(0.0, 0.0, 1.0, 270.0), Point::new(-1.0, 0.0)));
    }

    #[test]
    fn path_starts_at_end_angle() {
        let d = describe_arc(50.0, 50.0, 40.0, 0.0, 90.0);
        let f = fields(&d);

        assert!(d.starts_with("M "));
        assert_eq!(d.matches("A ").count(), 1);
        assert_eq!(f.len(), 11);

        let first = Point::new(f[1].parse().unwrap(), f[2].parse().unwrap());
        let last = Point::new(f[9].parse().unwrap(), f[10].parse().unwrap());
        assert!(close(first, polar_to_cartesian(50.0, 50.0, 40.0, 90.0)));
        assert!(close(last, polar_to_cartesian(50.0, 50.0, 40.0, 0.0)));
        assert_eq!(&f[3..9], ["A", "40", "40", "0", "0", "0"]);
    }

    #[test]
    fn large_arc_flag_switches_after_180() {
        assert_eq!(fields(&describe_arc(0.0, 0.0, 1.0, 0.0, 180.0))[7], "0");
        assert_eq!(fields(&describe_arc(0.0, 0.0, 1.0, 0.0, 180.5))[7], "1");
        assert_eq!(fields(&describe_arc(0.0, 0.0, 1.0, -126.0, 126.0))[7], "1");
    }

    #[test]
    fn sweep_flag_is_always_zero() {
        for (s, e) in [(0.0, 10.0), (-126.0, 126.0), (30.0, 300.0)] {
            assert_eq!(fields(&describe_arc(0.0, 0.0, 1.0, s, e))[8], "0");
        }
    }

    #[test]
    fn arc_length_scale() {
        assert_eq!(arc_length(0), 0.0);
        assert_eq!(arc_length(50), 126.0);
        assert_eq!(arc_length(100), MAX_SWEEP);
        assert_eq!(arc_length(100), 252.0);
    }

    #[test]
    fn zero_reading_is_degenerate() {
        let g = GaugeGeometry::for_value(0);
        let f = fields(&g.foreground);
        assert_eq!((&f[1], &f[2]), (&f[9], &f[10]));
        assert_eq!(f[7], "0");
    }

    #[test]
    fn full_reading_matches_background() {
        let g = GaugeGeometry::for_value(100);
        assert_eq!(g.foreground, g.background);
        assert_eq!(g.sweep, 252.0);
    }

    #[test]
    fn background_is_independent_of_value() {
        assert_eq!(GaugeGeometry::for_value(3).background, GaugeGeometry::for_value(97).background);
    }
}
