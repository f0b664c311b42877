use flame_core::Status;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK:       Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE:       Self = Self::rgb(0xff, 0xff, 0xff);
    pub const LAVENDER:    Self = Self { r: 0.694, g: 0.533, b: 0.937, a: 0.2 }; // #b188ef33
    pub const VIOLET:      Self = Self::rgb(0x84, 0x00, 0xe2); // #8400e2
    pub const PLUM:        Self = Self::rgb(0x5a, 0x18, 0x9a); // #5a189a
    pub const MIST:        Self = Self::rgb(0xf0, 0xf4, 0xf8); // #f0f4f8
    pub const SILVER:      Self = Self::rgb(0xd6, 0xd6, 0xd6); // #d6d6d6
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Build an opaque colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Some(
                Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)
                    .with_alpha(byte(&hex[6..8])? as f32 / 255.0),
            ),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", ch(self.r), ch(self.g), ch(self.b))
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", ch(self.r), ch(self.g), ch(self.b), ch(self.a))
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Composite `self` over an opaque `base`.  The result is opaque.
    #[must_use]
    pub fn over(self, base: Self) -> Self {
        let mix = |top: f32, bottom: f32| top * self.a + bottom * (1.0 - self.a);
        Self {
            r: mix(self.r, base.r),
            g: mix(self.g, base.g),
            b: mix(self.b, base.b),
            a: 1.0,
        }
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

/// Fixed status palette.  Three close shades of purple, lightest for the
/// calmest reading.
pub struct Palette;

impl Palette {
    pub const NORMAL:  Color = Color::rgb(0xba, 0x63, 0xff); // #ba63ff
    pub const WARNING: Color = Color::rgb(0xaf, 0x5d, 0xff); // #af5dff
    pub const DANGER:  Color = Color::rgb(0x9a, 0x52, 0xff); // #9a52ff

    pub fn status_color(status: Status) -> Color {
        match status {
            Status::Normal  => Self::NORMAL,
            Status::Warning => Self::WARNING,
            Status::Danger  => Self::DANGER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#8400e2"), Some(Color::VIOLET));
        let lavender = Color::from_hex("#b188ef33").unwrap();
        assert!((lavender.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Palette::DANGER.to_hex(), "#9a52ff");
        assert_eq!(Color::WHITE.with_alpha(0.0).to_hex(), "#ffffff00");
    }

    #[test]
    fn compositing_over_white() {
        assert_eq!(Color::BLACK.with_alpha(0.5).over(Color::WHITE).to_hex(), "#808080");
        assert_eq!(Color::VIOLET.over(Color::WHITE), Color::VIOLET);
        assert_eq!(Color::TRANSPARENT.over(Color::MIST), Color::MIST);
    }

    #[test]
    fn status_palette() {
        assert_eq!(Palette::status_color(Status::Normal).to_hex(), "#ba63ff");
        assert_eq!(Palette::status_color(Status::Warning).to_hex(), "#af5dff");
        assert_eq!(Palette::status_color(Status::Danger).to_hex(), "#9a52ff");
    }
}
