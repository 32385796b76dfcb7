//! Colour parsing and the base-colour shading used for the bevel and track.

use core::fmt;
use core::str::FromStr;

use crate::KnobError;

/// Default base colour (`#777777`).
pub const DEFAULT_BASE: Rgb = Rgb::new(0x77, 0x77, 0x77);

/// Lightened highlight offset (inset bevel).
pub const LIGHT_OFFSET: i16 = 16;
/// Darkened offset for the drop shadow.
pub const SHADOW_OFFSET: i16 = -32;
/// Darkened offset for the unfilled outline track.
pub const DARK_OFFSET: i16 = -48;

/// Opaque 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a colour from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `amount` to every channel, saturating at 0 and 255.
    pub fn adjust(self, amount: i16) -> Self {
        let ch = |c: u8| (i16::from(c) + amount).clamp(0, 255) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = KnobError;

    /// Parse `#rrggbb` (hex digits in either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(KnobError::invalid_color(s, "missing leading '#'"));
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(KnobError::invalid_color(s, "expected exactly 6 hex digits"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| KnobError::invalid_color(s, "expected exactly 6 hex digits"))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Colours derived once from a knob's base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shading {
    /// Inset highlight on the base disc.
    pub light: Rgb,
    /// Outer shadow of the base disc.
    pub shadow: Rgb,
    /// Unfilled portion of the outline ring.
    pub dark: Rgb,
}

impl Shading {
    /// Derive light/shadow/dark from `base`.
    pub fn from_base(base: Rgb) -> Self {
        Self {
            light: base.adjust(LIGHT_OFFSET),
            shadow: base.adjust(SHADOW_OFFSET),
            dark: base.adjust(DARK_OFFSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> Rgb {
        s.parse().unwrap()
    }

    #[test]
    fn adjust_never_underflows() {
        assert_eq!(rgb("#000000").adjust(-48).to_string(), "#000000");
    }

    #[test]
    fn adjust_saturates_each_channel() {
        assert_eq!(rgb("#f0f0f0").adjust(16).to_string(), "#ffffff");
        assert_eq!(rgb("#f00010").adjust(16).to_string(), "#ff1020");
    }

    #[test]
    fn display_is_zero_padded_lowercase() {
        assert_eq!(Rgb::new(1, 0xAB, 0).to_string(), "#01ab00");
    }

    #[test]
    fn parse_accepts_both_cases() {
        assert_eq!(rgb("#FFaa00"), Rgb::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["777777", "#777", "#7777777", "#gg0000", "", "#"] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_multibyte_without_panicking() {
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn default_shading() {
        let s = Shading::from_base(DEFAULT_BASE);
        assert_eq!(s.light.to_string(), "#878787");
        assert_eq!(s.shadow.to_string(), "#575757");
        assert_eq!(s.dark.to_string(), "#474747");
    }
}
