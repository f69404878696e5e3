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

//! The quality controller: sole writer of [`QualityState`](shard_data::QualityState).

use std::fmt;

use serde::{Deserialize, Serialize};
use shard_core::control::{PerformanceMode, QualityLevel};
use shard_data::RenderContext;

use crate::sampler::FpsSample;

/// Thresholds for the automatic downgrade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPolicy {
    /// A sample strictly below this rate triggers the downgrade.
    pub fps_threshold: u32,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self { fps_threshold: 20 }
    }
}

/// A change to the active asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityTransition {
    /// The automatic downgrade fired.
    Downgraded {
        /// Variant that was active.
        from: String,
        /// Variant that replaced it.
        to: String,
        /// The sample that triggered the switch.
        fps: u32,
    },
    /// The user picked a variant.
    Selected {
        /// Variant that was active.
        from: String,
        /// Variant that replaced it.
        to: String,
    },
}

impl QualityTransition {
    /// Path of the asset that is now active.
    pub fn target(&self) -> &str {
        match self {
            QualityTransition::Downgraded { to, .. } | QualityTransition::Selected { to, .. } => to,
        }
    }
}

/// An error raised by a quality request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The requested asset is not in the catalog.
    UnknownAsset(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::UnknownAsset(path) => write!(f, "Asset '{path}' is not in the catalog"),
        }
    }
}

impl std::error::Error for ControlError {}

/// Records frame-rate samples and decides asset switches.
///
/// `Nominal -> Degraded` happens at most once per session: when a sample is
/// below the threshold while the highest-fidelity variant is active, the
/// controller proposes the next lower variant and, once committed, never
/// reverts. Manual selection goes through here too, but does not re-arm the
/// downgrade.
///
/// Proposals leave the active asset untouched. The caller loads the target
/// and only then calls [`commit`](Self::commit), so a failed load never
/// changes [`QualityState`](shard_data::QualityState).
#[derive(Debug, Clone, Default)]
pub struct QualityController {
    policy: QualityPolicy,
}

impl QualityController {
    /// Creates a controller with the given policy.
    pub fn new(policy: QualityPolicy) -> Self {
        Self { policy }
    }

    /// Active policy.
    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// Records `sample` and applies the downgrade rule.
    ///
    /// Returns the proposed downgrade, if any.
    pub fn evaluate(
        &mut self,
        sample: FpsSample,
        ctx: &mut RenderContext,
    ) -> Option<QualityTransition> {
        ctx.quality.record_fps(sample.fps);

        if ctx.quality.quality() == QualityLevel::Degraded
            || sample.fps >= self.policy.fps_threshold
        {
            return None;
        }

        let current = ctx.quality.current_asset_path();
        if !ctx.catalog.is_highest(current) {
            log::debug!(
                "Low frame rate ({} fps) on '{current}', already below top variant",
                sample.fps
            );
            return None;
        }

        let Some(lower) = ctx.catalog.next_lower(current) else {
            log::debug!(
                "Low frame rate ({} fps) but '{current}' has no lower variant",
                sample.fps
            );
            return None;
        };

        log::debug!(
            "Frame rate {} fps below {} fps, proposing '{current}' -> '{}'",
            sample.fps,
            self.policy.fps_threshold,
            lower.path
        );
        Some(QualityTransition::Downgraded {
            from: current.to_string(),
            to: lower.path.clone(),
            fps: sample.fps,
        })
    }

    /// Proposes a switch to a user-chosen variant.
    ///
    /// Returns `Ok(None)` when `path` is already active.
    pub fn select_asset(
        &mut self,
        path: &str,
        ctx: &RenderContext,
    ) -> Result<Option<QualityTransition>, ControlError> {
        if !ctx.catalog.contains(path) {
            return Err(ControlError::UnknownAsset(path.to_string()));
        }
        let from = ctx.quality.current_asset_path();
        if from == path {
            return Ok(None);
        }

        Ok(Some(QualityTransition::Selected {
            from: from.to_string(),
            to: path.to_string(),
        }))
    }

    /// Makes `transition` the active state once its asset has loaded.
    pub fn commit(&mut self, transition: &QualityTransition, ctx: &mut RenderContext) {
        match transition {
            QualityTransition::Downgraded { from, to, fps } => {
                log::warn!(
                    "Frame rate {fps} fps below {} fps, switched '{from}' -> '{to}'",
                    self.policy.fps_threshold
                );
                ctx.quality.set_asset(to.as_str());
                ctx.quality.mark_degraded();
            }
            QualityTransition::Selected { from, to } => {
                log::info!("Asset selected: '{from}' -> '{to}'");
                ctx.quality.set_asset(to.as_str());
            }
        }
    }

    /// Records the user's performance preference. Returns `true` if it changed.
    pub fn set_performance_mode(
        &mut self,
        mode: PerformanceMode,
        ctx: &mut RenderContext,
    ) -> bool {
        if ctx.quality.performance_mode() == mode {
            return false;
        }
        log::info!("Performance mode set to {mode:?}");
        ctx.quality.set_performance_mode(mode);
        true
    }
}
