use flame_core::Route;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `flame.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Simulated sensor feed.
    pub sampling: SamplingConfig,
    /// History chart rendering.
    pub chart: ChartConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Window settings.  Defaults match a portrait phone-sized window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Screen shown at launch.
    pub start: Route,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:  "Flame Sensor".to_string(),
            width:  390,
            height: 844,
            start:  Route::Onboarding,
        }
    }
}

/// Sample feed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Fixed RNG seed for a reproducible feed.  `None` = seeded from the OS.
    pub seed: Option<u64>,
}

/// History chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Draw the series as a smooth curve instead of straight segments.
    pub bezier: bool,
    /// Draw a dot on every sample.
    pub show_dots: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bezier:    true,
            show_dots: true,
        }
    }
}

/// Theme / styling configuration.  All colors are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Screen background (`#RRGGBBAA` allowed).
    pub background: String,
    /// Primary text color.
    pub foreground: String,
    /// Start button fill.
    pub accent: String,
    /// Onboarding title color.
    pub title: String,
    /// Overview card background.
    pub card: String,
    /// Gauge track (the unfilled arc).
    pub track: String,
    /// Chart line and fill color.
    pub line: String,
    /// Base font size in points.
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#b188ef33".to_string(), // lavender at 20%
            foreground: "#000000".to_string(),
            accent:     "#8400e2".to_string(),
            title:      "#5a189a".to_string(),
            card:       "#f0f4f8".to_string(),
            track:      "#d6d6d6".to_string(),
            line:       "#9a52ff".to_string(),
            font_size:  18.0,
        }
    }
}
