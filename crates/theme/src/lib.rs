pub mod colors;
pub mod style;

pub use colors::{Color, Palette};
pub use style::{ChartStyle, GaugeStyle};

use flame_config::{ChartConfig, FlameConfig, ThemeConfig};

/// Compiled theme derived from the config file.
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Building a theme is infallible — invalid color strings fall back to safe
/// defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Start button fill.
    pub accent:     Color,
    /// Onboarding title.
    pub title:      Color,
    /// Overview card background.
    pub card:       Color,
    pub font_size:  f32,
    pub gauge:      GaugeStyle,
    pub chart:      ChartStyle,
}

impl Theme {
    /// Build a [`Theme`] from the `[theme]` and `[chart]` sections.
    pub fn from_config(cfg: &FlameConfig) -> Self {
        let ThemeConfig { background, foreground, accent, title, card, track, line, font_size } =
            &cfg.theme;
        let ChartConfig { bezier, show_dots } = cfg.chart;

        let card = parse_or(card, Color::MIST);

        Self {
            background: parse_or(background, Color::LAVENDER),
            foreground: parse_or(foreground, Color::BLACK),
            accent:     parse_or(accent, Color::VIOLET),
            title:      parse_or(title, Color::PLUM),
            card,
            font_size:  *font_size,
            gauge: GaugeStyle {
                track: parse_or(track, Color::SILVER),
                ..GaugeStyle::default()
            },
            chart: ChartStyle {
                line: parse_or(line, Palette::DANGER),
                background: card,
                bezier,
                show_dots,
                ..ChartStyle::default()
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&FlameConfig::default())
    }
}

fn parse_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("Invalid color '{hex}' in theme; using {}", fallback.to_hex());
        fallback
    })
}
