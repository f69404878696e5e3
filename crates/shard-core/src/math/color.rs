// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `LinearRgba` color type used by palettes and materials.

use std::fmt;
use std::ops::Mul;

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// Palettes are authored as sRGB hex strings; they are converted to linear
/// space once, when the palette is built, so material construction never
/// touches gamma curves.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColorError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid hex color '{}': expected #RRGGBB or #RRGGBBAA",
            self.input
        )
    }
}

impl std::error::Error for HexColorError {}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds an opaque color from 8-bit sRGB channels, converting to linear space.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
        )
    }

    /// Parses an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`, leading `#` optional).
    ///
    /// The RGB channels are converted to linear space; alpha is normalized
    /// but not gamma corrected.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let digits = hex.trim().trim_start_matches('#');
        let err = || HexColorError {
            input: hex.to_string(),
        };
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(err());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| err())
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 1.0 };

        Ok(Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a,
        })
    }

    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }
}

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Scales the RGB channels, leaving alpha untouched.
impl Mul<f32> for LinearRgba {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a,
        }
    }
}

impl Default for LinearRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_white_and_black() {
        assert_eq!(LinearRgba::try_from_hex("#FFFFFF").unwrap(), LinearRgba::WHITE);
        assert_eq!(LinearRgba::try_from_hex("000000").unwrap(), LinearRgba::BLACK);
    }

    #[test]
    fn test_hex_is_converted_to_linear() {
        let sky = LinearRgba::try_from_hex("#87CEEB").unwrap();
        assert_relative_eq!(sky.r, srgb_to_linear(0x87 as f32 / 255.0));
        assert_relative_eq!(sky.a, 1.0);
    }

    #[test]
    fn test_srgb8_matches_hex() {
        let a = LinearRgba::from_srgb8(0x93, 0x70, 0xDB);
        let b = LinearRgba::try_from_hex("#9370DB").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hex_with_alpha() {
        let c = LinearRgba::try_from_hex("#FF000080").unwrap();
        assert_relative_eq!(c.a, 128.0 / 255.0);
    }

    #[test]
    fn test_hex_rejects_malformed_input() {
        assert!(LinearRgba::try_from_hex("#FFF").is_err());
        assert!(LinearRgba::try_from_hex("#GGGGGG").is_err());
        assert!(LinearRgba::try_from_hex("").is_err());
    }

    #[test]
    fn test_scaling_keeps_alpha() {
        let c = LinearRgba::new(0.5, 0.25, 1.0, 0.8) * 2.0;
        assert_relative_eq!(c.r, 1.0);
        assert_relative_eq!(c.b, 2.0);
        assert_relative_eq!(c.a, 0.8);
    }
}
