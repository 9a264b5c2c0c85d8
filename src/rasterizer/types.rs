//! Core value types for the rasterizer

use serde::{Deserialize, Serialize};

use super::error::RasterError;

/// 24-bit RGB color (0-255 per channel)
///
/// Laid out as three consecutive bytes so a row-major `[Color]` is exactly the
/// pixel payload of a binary PPM.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0 };
    pub const ORANGE: Color = Color { r: 255, g: 125, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, rejecting anything outside 0-255
    pub fn try_new(r: i32, g: i32, b: i32) -> Result<Self, RasterError> {
        Ok(Self {
            r: checked_channel('r', r)?,
            g: checked_channel('g', g)?,
            b: checked_channel('b', b)?,
        })
    }

    /// Overwrite all three channels. Leaves `self` untouched if any channel is invalid.
    pub fn set(&mut self, r: i32, g: i32, b: i32) -> Result<(), RasterError> {
        *self = Self::try_new(r, g, b)?;
        Ok(())
    }

    /// Channel by position: 0 = red, 1 = green, 2 = blue
    pub fn channel(self, index: usize) -> Option<u8> {
        match index {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            _ => None,
        }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn checked_channel(channel: char, value: i32) -> Result<u8, RasterError> {
    u8::try_from(value).map_err(|_| RasterError::InvalidColorComponent { channel, value })
}

/// Named colors used by the demo scene and for clearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorPreset {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
    Orange,
}

impl ColorPreset {
    pub const ALL: [ColorPreset; 7] = [
        ColorPreset::Red,
        ColorPreset::Blue,
        ColorPreset::Green,
        ColorPreset::Yellow,
        ColorPreset::White,
        ColorPreset::Black,
        ColorPreset::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorPreset::Red => "RED",
            ColorPreset::Blue => "BLUE",
            ColorPreset::Green => "GREEN",
            ColorPreset::Yellow => "YELLOW",
            ColorPreset::White => "WHITE",
            ColorPreset::Black => "BLACK",
            ColorPreset::Orange => "ORANGE",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColorPreset::Red => Color::RED,
            ColorPreset::Blue => Color::BLUE,
            ColorPreset::Green => Color::GREEN,
            ColorPreset::Yellow => Color::YELLOW,
            ColorPreset::White => Color::WHITE,
            ColorPreset::Black => Color::BLACK,
            ColorPreset::Orange => Color::ORANGE,
        }
    }
}

impl std::fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ColorPreset> for Color {
    fn from(preset: ColorPreset) -> Self {
        preset.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rejects_out_of_range_channels() {
        for bad in [256, 300, 1000, i32::MAX, -1, i32::MIN] {
            assert!(matches!(
                Color::try_new(bad, 0, 0),
                Err(RasterError::InvalidColorComponent { channel: 'r', .. })
            ));
            assert!(matches!(
                Color::try_new(0, bad, 0),
                Err(RasterError::InvalidColorComponent { channel: 'g', .. })
            ));
            assert!(matches!(
                Color::try_new(0, 0, bad),
                Err(RasterError::InvalidColorComponent { channel: 'b', .. })
            ));
        }
    }

    #[test]
    fn test_color_accepts_full_range() {
        for v in 0..=255 {
            let c = Color::try_new(v, 255 - v, v / 2).unwrap();
            assert_eq!(c.r as i32, v);
            assert_eq!(c.g as i32, 255 - v);
            assert_eq!(c.b as i32, v / 2);
        }
    }

    #[test]
    fn test_color_set_is_atomic() {
        let mut c = Color::new(1, 2, 3);
        let err = c.set(10, 20, 256).unwrap_err();
        assert_eq!(err, RasterError::InvalidColorComponent { channel: 'b', value: 256 });
        assert_eq!(c, Color::new(1, 2, 3));

        c.set(10, 20, 30).unwrap();
        assert_eq!(c, Color::new(10, 20, 30));
    }

    #[test]
    fn test_color_channel_access() {
        let c = Color::new(7, 8, 9);
        assert_eq!(c.channel(0), Some(7));
        assert_eq!(c.channel(1), Some(8));
        assert_eq!(c.channel(2), Some(9));
        assert_eq!(c.channel(3), None);
        assert_eq!(c.to_bytes(), [7, 8, 9]);
    }

    #[test]
    fn test_color_layout_is_three_bytes() {
        assert_eq!(std::mem::size_of::<Color>(), 3);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Color::from(ColorPreset::Orange), Color::new(255, 125, 0));
        assert_eq!(ColorPreset::Yellow.color(), Color::new(255, 255, 0));
        assert_eq!(ColorPreset::Black.to_string(), "BLACK");
        let names: Vec<_> = ColorPreset::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["RED", "BLUE", "GREEN", "YELLOW", "WHITE", "BLACK", "ORANGE"]);
    }
}
