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

//! Defines the cel-shaded material used by the toon palette.

use crate::{
    asset::{Asset, Material},
    math::LinearRgba,
};

use super::AlphaMode;

/// A material with banded (cel) lighting and a self-illuminated tint.
///
/// The emissive term reuses the base color by default so that dark palette
/// entries stay readable against a dark background.
///
/// # Examples
///
/// ```
/// use shard_core::asset::{Material, ToonMaterial};
/// use shard_core::math::LinearRgba;
///
/// let amber = ToonMaterial::tinted(LinearRgba::rgb(0.9, 0.4, 0.0), 0.18);
/// assert_eq!(amber.emissive_color().a, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ToonMaterial {
    /// The lit color of the surface.
    pub base_color: LinearRgba,

    /// The emissive color, before `emissive_intensity`.
    pub emissive: LinearRgba,

    /// Multiplier applied to `emissive`.
    ///
    /// Values greater than 1.0 are allowed and produce HDR output.
    pub emissive_intensity: f32,

    /// Number of lighting bands in the ramp.
    pub bands: u32,

    /// The alpha blending mode for this material.
    pub alpha_mode: AlphaMode,
}

impl ToonMaterial {
    /// Creates a toon material whose emissive tint is its own base color.
    pub fn tinted(color: LinearRgba, emissive_intensity: f32) -> Self {
        Self {
            base_color: color,
            emissive: color,
            emissive_intensity,
            ..Default::default()
        }
    }
}

impl Default for ToonMaterial {
    fn default() -> Self {
        Self {
            base_color: LinearRgba::WHITE,
            emissive: LinearRgba::BLACK,
            emissive_intensity: 1.0,
            bands: 3,
            alpha_mode: AlphaMode::Opaque,
        }
    }
}

impl Asset for ToonMaterial {}

impl Material for ToonMaterial {
    fn base_color(&self) -> LinearRgba {
        self.base_color
    }

    fn emissive_color(&self) -> LinearRgba {
        self.emissive * self.emissive_intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toon_material_default() {
        let material = ToonMaterial::default();
        assert_eq!(material.base_color, LinearRgba::WHITE);
        assert_eq!(material.emissive_color(), LinearRgba::BLACK);
        assert_eq!(material.bands, 3);
    }

    #[test]
    fn test_tinted_reuses_base_color() {
        let color = LinearRgba::rgb(0.5, 0.25, 1.0);
        let material = ToonMaterial::tinted(color, 0.18);

        assert_eq!(material.emissive, color);
        let emissive = material.emissive_color();
        assert!((emissive.r - 0.09).abs() < 0.001);
        assert!((emissive.b - 0.18).abs() < 0.001);
    }

    #[test]
    fn test_hdr_intensity_is_kept() {
        let material = ToonMaterial::tinted(LinearRgba::WHITE, 3.0);
        assert!((material.emissive_color().g - 3.0).abs() < 0.001);
    }
}
