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

//! Color palettes and the material recipes built from them.

use serde::{Deserialize, Serialize};
use shard_core::{
    asset::{AlphaMode, Material, StandardMaterial, ToonMaterial},
    math::LinearRgba,
};

/// Built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PalettePreset {
    /// Three translucent blues and purples on a glossy standard material.
    #[default]
    Crystal,
    /// Seven flat colors on a cel-shaded material.
    Toon,
}

/// How palette colors are turned into surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceStyle {
    /// Translucent PBR surface.
    Glass {
        /// Opacity written into the base color alpha.
        opacity: f32,
        /// PBR roughness.
        roughness: f32,
        /// PBR metallic factor.
        metallic: f32,
        /// Emissive intensity reached at the top progress bucket.
        emissive: f32,
    },
    /// Cel-shaded surface tinted with its own color.
    Toon {
        /// Emissive intensity reached at the top progress bucket.
        emissive: f32,
    },
}

const CRYSTAL_COLORS: [(u8, u8, u8); 3] = [
    (0x87, 0xCE, 0xEB), // sky blue
    (0x93, 0x70, 0xDB), // medium purple
    (0x41, 0x69, 0xE1), // royal blue
];

const TOON_COLORS: [(u8, u8, u8); 7] = [
    (0xF5, 0xA6, 0x23),
    (0xD2, 0x8B, 0x6C),
    (0x4B, 0x2C, 0x3B),
    (0x18, 0x1A, 0x22),
    (0x00, 0x4C, 0x5A),
    (0x00, 0x70, 0x7B),
    (0x5B, 0xA7, 0xB7),
];

/// An ordered, non-empty list of colors plus the surface recipe applied to them.
///
/// A palette category is an index into the color list.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    preset: PalettePreset,
    colors: Vec<LinearRgba>,
    style: SurfaceStyle,
}

impl Palette {
    /// Builds the palette for `preset`.
    pub fn from_preset(preset: PalettePreset) -> Self {
        match preset {
            PalettePreset::Crystal => Self::crystal(),
            PalettePreset::Toon => Self::toon(),
        }
    }

    /// The translucent crystal palette.
    pub fn crystal() -> Self {
        Self {
            preset: PalettePreset::Crystal,
            colors: srgb_list(&CRYSTAL_COLORS),
            style: SurfaceStyle::Glass {
                opacity: 0.8,
                roughness: 0.1,
                metallic: 0.1,
                emissive: 0.3,
            },
        }
    }

    /// The cel-shaded toon palette.
    pub fn toon() -> Self {
        Self {
            preset: PalettePreset::Toon,
            colors: srgb_list(&TOON_COLORS),
            style: SurfaceStyle::Toon { emissive: 0.18 },
        }
    }

    /// Preset this palette was built from.
    pub fn preset(&self) -> PalettePreset {
        self.preset
    }

    /// Surface recipe.
    pub fn style(&self) -> SurfaceStyle {
        self.style
    }

    /// Number of categories. Never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of `category`, wrapping around the palette.
    pub fn color(&self, category: usize) -> LinearRgba {
        self.colors[category % self.colors.len()]
    }

    /// Builds a fresh material for `category` at quantized progress `bucket`.
    ///
    /// The emissive intensity grows linearly with the bucket, reaching the
    /// style's full intensity in the last bucket.
    pub fn build_material(&self, category: usize, bucket: u32, steps: u32) -> Box<dyn Material> {
        let color = self.color(category);
        let scale = emissive_scale(bucket, steps);

        match self.style {
            SurfaceStyle::Glass {
                opacity,
                roughness,
                metallic,
                emissive,
            } => Box::new(StandardMaterial {
                base_color: color.with_alpha(opacity),
                metallic,
                roughness,
                emissive: color,
                emissive_intensity: emissive * scale,
                alpha_mode: AlphaMode::Blend,
                double_sided: false,
            }),
            SurfaceStyle::Toon { emissive } => {
                Box::new(ToonMaterial::tinted(color, emissive * scale))
            }
        }
    }
}

/// Fraction of the full emissive intensity used for `bucket` out of `steps`.
pub fn emissive_scale(bucket: u32, steps: u32) -> f32 {
    let steps = steps.max(1);
    (bucket.min(steps - 1) + 1) as f32 / steps as f32
}

fn srgb_list(colors: &[(u8, u8, u8)]) -> Vec<LinearRgba> {
    colors
        .iter()
        .map(|&(r, g, b)| LinearRgba::from_srgb8(r, g, b))
        .collect()
}
