pub mod schema;
pub mod watcher;

pub use schema::{ChartConfig, FlameConfig, SamplingConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use flame_core::{FlameError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `FlameConfig::default()` if
/// the file doesn't exist so the app always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<FlameConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(FlameConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| FlameError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<FlameConfig> {
    toml::from_str(raw).map_err(|e| FlameError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("flame").join("flame.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flame_core::Route;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.window.width, 390);
        assert_eq!(cfg.window.start, Route::Onboarding);
        assert_eq!(cfg.sampling.seed, None);
        assert!(cfg.chart.bezier);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse(
            r##"
            [window]
            start = "Home"

            [sampling]
            seed = 7

            [theme]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.window.start, Route::Home);
        assert_eq!(cfg.window.title, "Flame Sensor");
        assert_eq!(cfg.sampling.seed, Some(7));
        assert_eq!(cfg.theme.accent, "#ff0000");
        assert_eq!(cfg.theme.track, "#d6d6d6");
    }

    #[test]
    fn unknown_route_is_a_config_error() {
        let err = parse("[window]\nstart = \"Settings\"\n").unwrap_err();
        assert!(matches!(err, FlameError::Config(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/flame/flame.toml").unwrap();
        assert_eq!(cfg.window.title, "Flame Sensor");
    }

    #[test]
    fn default_path_ends_in_flame_toml() {
        assert!(default_path().ends_with("flame/flame.toml"));
    }
}
