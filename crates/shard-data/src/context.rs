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

//! The explicitly owned state shared by the frame lanes.

use shard_core::control::PerformanceMode;

use crate::{
    assets::{AssetCatalog, MaterialCache, Palette},
    quality::QualityState,
};

/// Everything a frame needs besides the loaded scene itself.
///
/// Owned by the render loop coordinator and lent to each lane in turn, so
/// there is exactly one writer at any time.
#[derive(Debug)]
pub struct RenderContext {
    /// Palette materials, built on demand.
    pub materials: MaterialCache,
    /// Active asset, performance mode and latest frame rate.
    pub quality: QualityState,
    /// Selectable asset variants.
    pub catalog: AssetCatalog,
}

impl RenderContext {
    /// Creates a context starting on the catalog's highest-fidelity variant.
    pub fn new(
        catalog: AssetCatalog,
        palette: Palette,
        steps: u32,
        performance_mode: PerformanceMode,
    ) -> Self {
        let quality = QualityState::new(catalog.highest().path.clone(), performance_mode);
        Self {
            materials: MaterialCache::new(palette, steps),
            quality,
            catalog,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(
            AssetCatalog::default(),
            Palette::crystal(),
            crate::assets::DEFAULT_QUANTIZATION_STEPS,
            PerformanceMode::High,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_core::control::QualityLevel;

    #[test]
    fn test_default_context_starts_on_highest_variant() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.quality.current_asset_path(), "/crystal_animation.glb");
        assert_eq!(ctx.quality.quality(), QualityLevel::Nominal);
        assert_eq!(ctx.materials.steps(), 10);
        assert!(ctx.materials.is_empty());
    }
}
