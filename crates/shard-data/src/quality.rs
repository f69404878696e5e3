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

//! The quality state reported to the outer layer.

use shard_core::control::{FpsBand, PerformanceMode, QualityLevel};

/// Which asset is active, how it is rendered, and how fast.
///
/// Only the quality controller writes to this state; everything else reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityState {
    current_asset_path: String,
    performance_mode: PerformanceMode,
    fps: u32,
    quality: QualityLevel,
}

impl QualityState {
    /// Creates a nominal state on `asset_path` with no frame-rate sample yet.
    pub fn new(asset_path: impl Into<String>, performance_mode: PerformanceMode) -> Self {
        Self {
            current_asset_path: asset_path.into(),
            performance_mode,
            fps: 0,
            quality: QualityLevel::Nominal,
        }
    }

    /// Path of the active asset variant.
    pub fn current_asset_path(&self) -> &str {
        &self.current_asset_path
    }

    /// Current performance preference.
    pub fn performance_mode(&self) -> PerformanceMode {
        self.performance_mode
    }

    /// Latest frame-rate sample. `0` until the first window closes.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Reporting band of the latest sample.
    pub fn fps_band(&self) -> FpsBand {
        FpsBand::from_fps(self.fps)
    }

    /// Whether the automatic downgrade has fired.
    pub fn quality(&self) -> QualityLevel {
        self.quality
    }

    /// Records a new frame-rate sample.
    pub fn record_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Switches the active asset.
    pub fn set_asset(&mut self, path: impl Into<String>) {
        self.current_asset_path = path.into();
    }

    /// Switches the performance preference.
    pub fn set_performance_mode(&mut self, mode: PerformanceMode) {
        self.performance_mode = mode;
    }

    /// Marks the session as degraded. There is no way back to nominal.
    pub fn mark_degraded(&mut self) {
        self.quality = QualityLevel::Degraded;
    }
}
