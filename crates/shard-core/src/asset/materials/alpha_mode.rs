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

//! Defines transparency and blending modes for materials.

/// Specifies how a material handles transparency and alpha blending.
///
/// - `Opaque`: no transparency calculations
/// - `Mask`: alpha testing, no sorting required
/// - `Blend`: full blending, requires depth sorting
///
/// # Examples
///
/// ```
/// use shard_core::asset::AlphaMode;
///
/// let glass = AlphaMode::Blend;
/// assert!(glass.is_translucent());
/// assert!(!AlphaMode::Mask(0.5).is_translucent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlphaMode {
    /// The material is fully opaque with no transparency.
    #[default]
    Opaque,

    /// Fragments with an alpha value below the threshold are discarded.
    Mask(f32),

    /// The material uses full alpha blending.
    Blend,
}

impl AlphaMode {
    /// Returns `true` when the material must be sorted back to front.
    pub fn is_translucent(&self) -> bool {
        matches!(self, AlphaMode::Blend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_mode_default() {
        assert_eq!(AlphaMode::default(), AlphaMode::Opaque);
    }

    #[test]
    fn test_only_blend_is_translucent() {
        assert!(!AlphaMode::Opaque.is_translucent());
        assert!(!AlphaMode::Mask(0.3).is_translucent());
        assert!(AlphaMode::Blend.is_translucent());
    }
}
