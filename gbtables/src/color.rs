//! CGB 15-bit colors and their RGB565 conversion.
//!
//! CGB palette entries are little endian words laid out as:
//!
//! ```text
//!  15 | 14 13 12 11 10 | 9 8 7 6 5 | 4 3 2 1 0
//!   x |      blue      |   green   |    red
//! ```
//!
//! RGB565 puts red on top instead and gives green one extra bit.

use thiserror::Error;

/// Number of distinct CGB colors.
pub const CGB_PALETTE_TABLE_LEN: usize = 1 << 15;

const CHANNEL_MASK: u16 = 0x1F;

#[derive(Clone, Copy, Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("cgb color 0x{0:04x} has bit 15 set")]
    Bit15Set(u16),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CgbColor(u16);

impl CgbColor {
    pub const MAX: u16 = 0x7FFF;

    pub fn new(value: u16) -> Result<Self, ColorError> {
        if value > Self::MAX {
            return Err(ColorError::Bit15Set(value));
        }
        Ok(Self(value))
    }

    pub fn red(&self) -> u8 {
        (self.0 & CHANNEL_MASK) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 5) & CHANNEL_MASK) as u8
    }

    pub fn blue(&self) -> u8 {
        ((self.0 >> 10) & CHANNEL_MASK) as u8
    }
}

impl TryFrom<u16> for CgbColor {
    type Error = ColorError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CgbColor> for u16 {
    fn from(color: CgbColor) -> Self {
        color.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub fn red(&self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<CgbColor> for Rgb565 {
    fn from(color: CgbColor) -> Self {
        let (r5, g5, b5) = (color.red(), color.green(), color.blue());
        assert!(r5 < 32, "red channel out of range: {r5}");
        assert!(g5 < 32, "green channel out of range: {g5}");
        assert!(b5 < 32, "blue channel out of range: {b5}");

        let g6 = green_5_to_6(g5);
        Self((r5 as u16) << 11 | (g6 as u16) << 5 | b5 as u16)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

/// Rescale a 5-bit green channel to 6 bits, `round(g5 * 63 / 31)`.
///
/// `g5 * 63 / 31` never lands exactly on a half, so rounding up from the
/// integer midpoint gives the same result as any round-to-nearest mode.
pub fn green_5_to_6(g5: u8) -> u8 {
    assert!(g5 < 32, "green channel out of range: {g5}");
    ((g5 as u16 * 126 + 31) / 62) as u8
}

/// RGB565 value of a raw CGB color. Bit 15 of `pixel` is ignored.
pub fn cgb_pixel_to_rgb565(pixel: u16) -> u16 {
    let color = CgbColor(pixel & CgbColor::MAX);
    Rgb565::from(color).into()
}

/// RGB565 values for every CGB color, indexed by the raw 15-bit value.
pub fn generate_cgb_palette() -> Vec<u16> {
    let palette: Vec<u16> = (0..=CgbColor::MAX).map(cgb_pixel_to_rgb565).collect();
    assert_eq!(palette.len(), CGB_PALETTE_TABLE_LEN);
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bit_15() {
        assert_eq!(CgbColor::new(0x8000), Err(ColorError::Bit15Set(0x8000)));
        assert_eq!(CgbColor::try_from(0xFFFF), Err(ColorError::Bit15Set(0xFFFF)));
        assert!(CgbColor::new(0x7FFF).is_ok());
    }

    #[test]
    fn splits_channels() {
        let color = CgbColor::new(0b0_10101_00110_11100).unwrap();
        assert_eq!(color.red(), 0b11100);
        assert_eq!(color.green(), 0b00110);
        assert_eq!(color.blue(), 0b10101);
    }

    #[test]
    fn green_rescale_matches_rounding() {
        for g5 in 0..32u8 {
            let expected = (g5 as f64 * 63.0 / 31.0).round() as u8;
            assert_eq!(green_5_to_6(g5), expected, "g5={g5}");
        }
    }

    #[test]
    fn green_rescale_is_monotonic() {
        assert_eq!(green_5_to_6(0), 0);
        assert_eq!(green_5_to_6(16), 33);
        assert_eq!(green_5_to_6(31), 63);
        for g5 in 1..32u8 {
            assert!(green_5_to_6(g5) >= green_5_to_6(g5 - 1));
        }
    }

    #[test]
    fn known_conversions() {
        assert_eq!(cgb_pixel_to_rgb565(0), 0);
        assert_eq!(cgb_pixel_to_rgb565(0x7FFF), 0xFFFF);
        assert_eq!(cgb_pixel_to_rgb565(0x001F), 0xF800);
        assert_eq!(cgb_pixel_to_rgb565(0x7C00), 0x001F);
        assert_eq!(cgb_pixel_to_rgb565(16 << 5), 33 << 5);
    }

    #[test]
    fn palette_passes_red_and_blue_through() {
        let palette = generate_cgb_palette();
        assert_eq!(palette.len(), CGB_PALETTE_TABLE_LEN);

        for (pixel, &rgb565) in palette.iter().enumerate() {
            let color = CgbColor::new(pixel as u16).unwrap();
            let out = Rgb565(rgb565);
            assert_eq!(out.red(), color.red(), "pixel=0x{pixel:04x}");
            assert_eq!(out.blue(), color.blue(), "pixel=0x{pixel:04x}");
            assert_eq!(out.green(), green_5_to_6(color.green()), "pixel=0x{pixel:04x}");
        }
    }
}
