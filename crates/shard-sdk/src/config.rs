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

//! Viewer configuration, loaded from RON.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use shard_control::QualityPolicy;
use shard_core::control::{ControlMode, PerformanceMode};
use shard_data::assets::{AssetCatalog, AssetVariant, PalettePreset, DEFAULT_QUANTIZATION_STEPS};
use shard_lanes::{ClassificationConfig, SignalConfig};

use crate::error::ViewerError;

/// All tunables of the viewer.
///
/// Every field has a default, so a configuration file only needs the
/// values it changes:
///
/// ```ron
/// (
///     palette: Toon,
///     classification: (outlines: true),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Distance band and idle oscillation of the signal resolver.
    pub signal: SignalConfig,
    /// Number of emissive buckets per palette category.
    pub quantization_steps: u32,
    /// Automatic downgrade threshold.
    pub quality: QualityPolicy,
    /// Length of one frame-rate window, in milliseconds.
    pub fps_window_ms: u64,
    /// Palette used for tintable nodes.
    pub palette: PalettePreset,
    /// Outline settings.
    pub classification: ClassificationConfig,
    /// Asset variants, highest fidelity first.
    pub catalog: Vec<AssetVariant>,
    /// Input that drives progress at startup.
    pub control_mode: ControlMode,
    /// Performance preference at startup.
    pub performance_mode: PerformanceMode,
    /// Interval between telemetry summaries, in milliseconds.
    pub telemetry_interval_ms: u64,
    /// Pixel ratio reported by the display.
    pub device_pixel_ratio: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            signal: SignalConfig::default(),
            quantization_steps: DEFAULT_QUANTIZATION_STEPS,
            quality: QualityPolicy::default(),
            fps_window_ms: 1000,
            palette: PalettePreset::default(),
            classification: ClassificationConfig::default(),
            catalog: AssetCatalog::default().iter().cloned().collect(),
            control_mode: ControlMode::default(),
            performance_mode: PerformanceMode::default(),
            telemetry_interval_ms: 1000,
            device_pixel_ratio: 1.0,
        }
    }
}

impl ViewerConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ViewerError> {
        ron::de::from_str(text).map_err(|e| ViewerError::Config(e.to_string()))
    }

    /// Reads and parses a RON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading viewer configuration from {}", path.display());
        Self::from_ron_str(&text)
    }

    /// Serializes the configuration as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ViewerError> {
        ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default().indentor("  ".to_string()),
        )
        .map_err(|e| ViewerError::Config(e.to_string()))
    }

    /// Validated asset catalog.
    pub fn asset_catalog(&self) -> Result<AssetCatalog, ViewerError> {
        Ok(AssetCatalog::new(self.catalog.clone())?)
    }

    /// Frame-rate window as a [`Duration`].
    pub fn fps_window(&self) -> Duration {
        Duration::from_millis(self.fps_window_ms.max(1))
    }

    /// Telemetry summary interval as a [`Duration`].
    pub fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_data::assets::{CatalogError, Fidelity};

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.signal.min_distance, 10.0);
        assert_eq!(config.signal.max_distance, 150.0);
        assert_eq!(config.quantization_steps, 10);
        assert_eq!(config.quality.fps_threshold, 20);
        assert_eq!(config.fps_window(), Duration::from_secs(1));
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.catalog[0].fidelity, Fidelity::High);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = ViewerConfig::from_ron_str(
            "(palette: Toon, quantization_steps: 4, classification: (outlines: true))",
        )
        .unwrap();
        assert_eq!(config.palette, PalettePreset::Toon);
        assert_eq!(config.quantization_steps, 4);
        assert!(config.classification.outlines);
        assert_eq!(config.classification.outline_render_order, -1);
        assert_eq!(config.quality.fps_threshold, 20);
    }

    #[test]
    fn test_empty_ron_is_default() {
        assert_eq!(ViewerConfig::from_ron_str("()").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_malformed_ron_is_config_error() {
        let err = ViewerConfig::from_ron_str("(quantization_steps: \"ten\")").unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let mut config = ViewerConfig::default();
        config.performance_mode = PerformanceMode::Low;
        let text = config.to_ron_string().unwrap();
        assert_eq!(ViewerConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ViewerConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
    }

    #[test]
    fn test_catalog_listed_low_first_is_rejected() {
        let config = ViewerConfig::from_ron_str(
            r#"(catalog: [
                (path: "/crystal_simple.glb", label: "Simple Model", fidelity: Low),
                (path: "/crystal_animation.glb", label: "Full Animation", fidelity: High),
            ])"#,
        )
        .unwrap();
        assert!(matches!(
            config.asset_catalog(),
            Err(ViewerError::Catalog(CatalogError::OutOfOrder { .. }))
        ));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let config = ViewerConfig {
            catalog: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.asset_catalog(), Err(ViewerError::Catalog(_))));
    }
}
