use crate::colors::Color;

/// Visual settings for the circular gauge.
///
/// Geometry is expressed in view-box units; the view box is scaled to
/// `size` logical pixels when drawn.
#[derive(Debug, Clone)]
pub struct GaugeStyle {
    /// Side length of the square view box.
    pub view_box: f64,
    /// Arc radius inside the view box.
    pub radius: f64,
    /// Arc stroke width inside the view box.
    pub stroke_width: f64,
    /// Colour of the unfilled track.
    pub track: Color,
    /// On-screen side length in logical pixels.
    pub size: f32,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            view_box:     100.0,
            radius:       40.0,
            stroke_width: 10.0,
            track:        Color::SILVER,
            size:         300.0,
        }
    }
}

/// Visual settings for the history line chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub line:         Color,
    pub line_width:   f32,
    /// Opacity of the area fill under the line.
    pub fill_opacity: f32,
    pub dot_radius:   f32,
    pub dot_outline:  Color,
    pub dot_outline_width: f32,
    pub label:        Color,
    pub label_size:   f32,
    pub background:   Color,
    pub bezier:       bool,
    pub show_dots:    bool,
    /// Chart height in logical pixels.
    pub height:       f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line:         crate::Palette::DANGER,
            line_width:   5.0,
            fill_opacity: 0.2,
            dot_radius:   3.0,
            dot_outline:  Color::WHITE,
            dot_outline_width: 2.0,
            label:        Color::BLACK,
            label_size:   12.0,
            background:   Color::MIST,
            bezier:       true,
            show_dots:    true,
            height:       220.0,
        }
    }
}
