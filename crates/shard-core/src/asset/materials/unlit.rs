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

//! Defines the unlit material, used for outline shells.

use crate::{
    asset::{Asset, Material},
    math::LinearRgba,
};

use super::{AlphaMode, FaceSide};

/// A material that ignores scene lighting and renders a flat color.
#[derive(Clone, Debug, PartialEq)]
pub struct UnlitMaterial {
    /// The flat output color.
    pub base_color: LinearRgba,
    /// Faces the material is drawn on.
    pub side: FaceSide,
    /// The alpha blending mode for this material.
    pub alpha_mode: AlphaMode,
}

impl UnlitMaterial {
    /// Black, back-face only material for inverted-hull outlines.
    pub fn outline() -> Self {
        Self {
            base_color: LinearRgba::BLACK,
            side: FaceSide::Back,
            alpha_mode: AlphaMode::Opaque,
        }
    }
}

impl Default for UnlitMaterial {
    fn default() -> Self {
        Self {
            base_color: LinearRgba::WHITE,
            side: FaceSide::Front,
            alpha_mode: AlphaMode::Opaque,
        }
    }
}

impl Asset for UnlitMaterial {}

impl Material for UnlitMaterial {
    fn base_color(&self) -> LinearRgba {
        self.base_color
    }

    fn side(&self) -> FaceSide {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlit_material_default() {
        let material = UnlitMaterial::default();
        assert_eq!(material.base_color, LinearRgba::WHITE);
        assert_eq!(material.side(), FaceSide::Front);
    }

    #[test]
    fn test_outline_is_black_back_face() {
        let material = UnlitMaterial::outline();
        assert_eq!(material.base_color(), LinearRgba::BLACK);
        assert_eq!(material.side(), FaceSide::Back);
        assert_eq!(material.emissive_color(), LinearRgba::BLACK);
    }
}
