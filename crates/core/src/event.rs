use crate::error::FlameError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Named navigation targets.  The two screens only ever refer to each other
/// by these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    #[default]
    Onboarding,
    Home,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Onboarding => "Onboarding",
            Route::Home       => "Home",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = FlameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Onboarding" => Ok(Route::Onboarding),
            "Home"       => Ok(Route::Home),
            other        => Err(FlameError::UnknownRoute(other.to_string())),
        }
    }
}

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - User actions          → `Navigate`
/// - Sample feed task      → `Sample`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ── User actions ──────────────────────────────────────────────────────────
    /// Switch to another screen (Start button, back chevron).
    Navigate(Route),

    // ── Sample feed ───────────────────────────────────────────────────────────
    /// A fresh simulated reading, one per tick while Home is mounted.
    Sample(u8),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}
