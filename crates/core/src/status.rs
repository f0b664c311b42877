/// Readings below this are `Normal`.
pub const WARNING_THRESHOLD: u8 = 30;
/// Readings above this are `Danger`.
pub const DANGER_THRESHOLD: u8 = 70;

/// Severity of the current reading.
///
/// A pure function of the latest value with no hysteresis, so it can flicker
/// when consecutive readings straddle a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Normal,
    Warning,
    Danger,
}

impl Status {
    #[must_use]
    pub fn classify(value: u8) -> Self {
        match value {
            v if v < WARNING_THRESHOLD  => Status::Normal,
            v if v <= DANGER_THRESHOLD  => Status::Warning,
            _                           => Status::Danger,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Normal  => "Normal",
            Status::Warning => "Warning",
            Status::Danger  => "Danger",
        }
    }
}
