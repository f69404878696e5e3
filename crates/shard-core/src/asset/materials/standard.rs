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

//! Defines the standard PBR material with metallic-roughness workflow.

use crate::{
    asset::{Asset, Material},
    math::LinearRgba,
};

use super::{AlphaMode, FaceSide};

/// A physically-based material using the metallic-roughness workflow.
///
/// The crystal palette builds translucent, glossy instances of this material.
/// Opacity lives in the alpha channel of `base_color` and is only honoured
/// when `alpha_mode` is [`AlphaMode::Blend`].
///
/// # Examples
///
/// ```
/// use shard_core::asset::{AlphaMode, StandardMaterial};
/// use shard_core::math::LinearRgba;
///
/// let glass = StandardMaterial {
///     base_color: LinearRgba::new(0.2, 0.6, 0.9, 0.8),
///     metallic: 0.1,
///     roughness: 0.1,
///     alpha_mode: AlphaMode::Blend,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMaterial {
    /// The base color (albedo) of the material.
    pub base_color: LinearRgba,

    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,

    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,

    /// The emissive color of the material, before `emissive_intensity`.
    pub emissive: LinearRgba,

    /// Multiplier applied to `emissive`.
    pub emissive_intensity: f32,

    /// The alpha blending mode for this material.
    pub alpha_mode: AlphaMode,

    /// Whether both faces are drawn.
    pub double_sided: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            base_color: LinearRgba::new(0.8, 0.8, 0.8, 1.0),
            metallic: 0.0,
            roughness: 0.5,
            emissive: LinearRgba::BLACK,
            emissive_intensity: 1.0,
            alpha_mode: AlphaMode::Opaque,
            double_sided: false,
        }
    }
}

impl Asset for StandardMaterial {}

impl Material for StandardMaterial {
    fn base_color(&self) -> LinearRgba {
        self.base_color
    }

    fn emissive_color(&self) -> LinearRgba {
        self.emissive * self.emissive_intensity
    }

    fn opacity(&self) -> f32 {
        if self.alpha_mode.is_translucent() {
            self.base_color.a
        } else {
            1.0
        }
    }

    fn side(&self) -> FaceSide {
        if self.double_sided {
            FaceSide::Double
        } else {
            FaceSide::Front
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_material_default() {
        let material = StandardMaterial::default();

        assert_eq!(material.base_color, LinearRgba::new(0.8, 0.8, 0.8, 1.0));
        assert_eq!(material.metallic, 0.0);
        assert_eq!(material.roughness, 0.5);
        assert_eq!(material.emissive, LinearRgba::BLACK);
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert!(!material.double_sided);
    }

    #[test]
    fn test_opacity_only_applies_when_blending() {
        let mut material = StandardMaterial {
            base_color: LinearRgba::new(1.0, 1.0, 1.0, 0.8),
            ..Default::default()
        };
        assert_eq!(material.opacity(), 1.0);

        material.alpha_mode = AlphaMode::Blend;
        assert!((material.opacity() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_emissive_color_is_scaled() {
        let material = StandardMaterial {
            emissive: LinearRgba::rgb(0.5, 0.5, 0.5),
            emissive_intensity: 0.4,
            ..Default::default()
        };
        let emissive = material.emissive_color();
        assert!((emissive.r - 0.2).abs() < 0.001);
        assert_eq!(emissive.a, 1.0);
    }

    #[test]
    fn test_double_sided_side() {
        let material = StandardMaterial {
            double_sided: true,
            ..Default::default()
        };
        assert_eq!(material.side(), FaceSide::Double);
    }
}
