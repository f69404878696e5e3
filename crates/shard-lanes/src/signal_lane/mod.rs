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

//! Resolves heterogeneous inputs into the single normalized progress value.
//!
//! Two input modes exist. In scroll mode the external scroll fraction is used
//! directly. In pose mode the camera's distance from the origin is mapped onto
//! a distance band, nearer meaning further along, and a small bias is added
//! for cameras that sit high above or below the subject. When neither input
//! is usable the lane falls back to a slow, low-amplitude oscillation so the
//! scene never freezes.

use serde::{Deserialize, Serialize};
use shard_core::{
    control::{ControlMode, Progress},
    lane::{Lane, LaneError, LaneKind},
    math::{saturate, Vec3},
};

/// Parameters of the idle oscillation used when no valid input exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackOscillation {
    /// Center of the oscillation.
    pub base: f32,
    /// Half the peak-to-peak swing.
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
}

impl Default for FallbackOscillation {
    fn default() -> Self {
        Self {
            base: 0.1,
            amplitude: 0.05,
            frequency: 0.5,
        }
    }
}

/// Tunables for [`ControlSignalLane`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Camera distance at which pose progress reaches 1.
    pub min_distance: f32,
    /// Camera distance at which pose progress reaches 0.
    pub max_distance: f32,
    /// Height (|z|) at which the angle bias saturates.
    pub angle_range: f32,
    /// Maximum contribution of the angle bias.
    pub angle_weight: f32,
    /// Idle oscillation.
    pub fallback: FallbackOscillation,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            max_distance: 150.0,
            angle_range: 100.0,
            angle_weight: 0.3,
            fallback: FallbackOscillation::default(),
        }
    }
}

/// The raw inputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalInput {
    /// Which input drives progress.
    pub mode: ControlMode,
    /// Latest scroll fraction, if any has been received.
    pub scroll: Option<f32>,
    /// Latest camera position, if any has been received.
    pub pose: Option<Vec3>,
}

/// Where a resolved progress value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSource {
    /// The scroll fraction.
    Scroll,
    /// The camera pose.
    Pose,
    /// The idle oscillation.
    Fallback,
}

/// Resolves a [`SignalInput`] into a [`Progress`].
#[derive(Debug, Clone)]
pub struct ControlSignalLane {
    config: SignalConfig,
}

impl ControlSignalLane {
    /// Creates a lane, rejecting an empty or inverted distance band.
    pub fn new(config: SignalConfig) -> Result<Self, LaneError> {
        let invalid = |reason: String| LaneError::InvalidConfig {
            lane: "ControlSignal",
            reason,
        };

        if !(config.min_distance.is_finite() && config.max_distance.is_finite()) {
            return Err(invalid("distance band must be finite".to_string()));
        }
        if config.max_distance <= config.min_distance {
            return Err(invalid(format!(
                "max_distance ({}) must exceed min_distance ({})",
                config.max_distance, config.min_distance
            )));
        }
        if config.angle_range.is_nan() || config.angle_range <= 0.0 {
            return Err(invalid(format!(
                "angle_range must be positive, got {}",
                config.angle_range
            )));
        }

        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Resolves this frame's progress.
    ///
    /// `elapsed` is the session time in seconds and only matters when the
    /// active input is missing or unusable.
    pub fn resolve(&self, input: &SignalInput, elapsed: f32) -> (Progress, SignalSource) {
        let resolved = match input.mode {
            ControlMode::Scroll => input
                .scroll
                .and_then(Progress::from_signal)
                .map(|p| (p, SignalSource::Scroll)),
            ControlMode::Pose => input
                .pose
                .filter(Vec3::is_finite)
                .map(|pos| (self.pose_progress(pos), SignalSource::Pose)),
        };

        resolved.unwrap_or_else(|| {
            log::trace!("No usable {:?} input, using fallback oscillation", input.mode);
            (self.fallback_progress(elapsed), SignalSource::Fallback)
        })
    }

    /// Distance-band progress before the angle bias is added.
    pub fn band_progress(&self, position: Vec3) -> f32 {
        let SignalConfig {
            min_distance,
            max_distance,
            ..
        } = self.config;
        saturate((max_distance - position.length()) / (max_distance - min_distance))
    }

    /// Progress derived from a camera position.
    pub fn pose_progress(&self, position: Vec3) -> Progress {
        let angle = saturate(position.z.abs() / self.config.angle_range) * self.config.angle_weight;
        Progress::new(self.band_progress(position) + angle)
    }

    /// Idle oscillation at `elapsed` seconds.
    pub fn fallback_progress(&self, elapsed: f32) -> Progress {
        let FallbackOscillation {
            base,
            amplitude,
            frequency,
        } = self.config.fallback;
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        Progress::new(base + amplitude * (frequency * elapsed).sin())
    }
}

impl Default for ControlSignalLane {
    fn default() -> Self {
        Self {
            config: SignalConfig::default(),
        }
    }
}

impl Lane for ControlSignalLane {
    fn strategy_name(&self) -> &'static str {
        "ControlSignal"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scroll(value: f32) -> SignalInput {
        SignalInput {
            mode: ControlMode::Scroll,
            scroll: Some(value),
            pose: None,
        }
    }

    fn pose(position: Vec3) -> SignalInput {
        SignalInput {
            mode: ControlMode::Pose,
            scroll: None,
            pose: Some(position),
        }
    }

    #[test]
    fn test_scroll_passes_through() {
        let lane = ControlSignalLane::default();
        let (p, source) = lane.resolve(&scroll(0.42), 0.0);
        assert_relative_eq!(p.get(), 0.42);
        assert_eq!(source, SignalSource::Scroll);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let lane = ControlSignalLane::default();
        assert_eq!(lane.resolve(&scroll(1.7), 0.0).0, Progress::ONE);
        assert_eq!(lane.resolve(&scroll(-0.2), 0.0).0, Progress::ZERO);
    }

    #[test]
    fn test_nan_scroll_falls_back() {
        let lane = ControlSignalLane::default();
        let (p, source) = lane.resolve(&scroll(f32::NAN), 0.0);
        assert_eq!(source, SignalSource::Fallback);
        assert_relative_eq!(p.get(), 0.1);
    }

    #[test]
    fn test_missing_scroll_falls_back() {
        let lane = ControlSignalLane::default();
        let input = SignalInput {
            mode: ControlMode::Scroll,
            scroll: None,
            pose: Some(Vec3::new(0.0, 0.0, 10.0)),
        };
        assert_eq!(lane.resolve(&input, 1.0).1, SignalSource::Fallback);
    }

    #[test]
    fn test_pose_on_band_edges() {
        let lane = ControlSignalLane::default();
        // On the x axis there is no angle bias.
        assert_relative_eq!(lane.pose_progress(Vec3::new(10.0, 0.0, 0.0)).get(), 1.0);
        assert_relative_eq!(lane.pose_progress(Vec3::new(150.0, 0.0, 0.0)).get(), 0.0);
        assert_relative_eq!(lane.pose_progress(Vec3::new(80.0, 0.0, 0.0)).get(), 0.5);
    }

    #[test]
    fn test_pose_default_camera() {
        let lane = ControlSignalLane::default();
        // d = 95: base = 55 / 140, angle = 0.95 * 0.3
        let expected = 55.0 / 140.0 + 0.285;
        let (p, source) = lane.resolve(&pose(Vec3::new(0.0, 0.0, 95.0)), 0.0);
        assert_eq!(source, SignalSource::Pose);
        assert_relative_eq!(p.get(), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_pose_beyond_band_is_clamped() {
        let lane = ControlSignalLane::default();
        let p = lane.pose_progress(Vec3::new(200.0, 0.0, 0.0));
        assert_eq!(p, Progress::ZERO);

        let p = lane.pose_progress(Vec3::new(0.0, 0.0, 200.0));
        assert_relative_eq!(p.get(), 0.3);

        let p = lane.pose_progress(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(p, Progress::ONE);
    }

    #[test]
    fn test_band_progress_is_non_increasing() {
        let lane = ControlSignalLane::default();
        let mut previous = f32::INFINITY;
        let mut d = 10.0;
        while d <= 150.0 {
            let value = lane.band_progress(Vec3::new(d, 0.0, 0.0));
            assert!(value <= previous);
            previous = value;
            d += 0.5;
        }
    }

    #[test]
    fn test_garbage_pose_falls_back() {
        let lane = ControlSignalLane::default();
        let (p, source) = lane.resolve(&pose(Vec3::new(f32::NAN, 1.0, 1.0)), 3.0);
        assert_eq!(source, SignalSource::Fallback);
        assert!((0.05..=0.15).contains(&p.get()));
    }

    #[test]
    fn test_fallback_stays_in_range() {
        let lane = ControlSignalLane::default();
        for i in 0..2000 {
            let p = lane.fallback_progress(i as f32 * 0.037).get();
            assert!((0.05 - 1e-6..=0.15 + 1e-6).contains(&p), "out of range: {p}");
        }
        assert_relative_eq!(lane.fallback_progress(f32::NAN).get(), 0.1);
    }

    #[test]
    fn test_rejects_inverted_band() {
        let config = SignalConfig {
            min_distance: 150.0,
            max_distance: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            ControlSignalLane::new(config),
            Err(LaneError::InvalidConfig { lane: "ControlSignal", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_angle_range() {
        let config = SignalConfig {
            angle_range: 0.0,
            ..Default::default()
        };
        assert!(ControlSignalLane::new(config).is_err());
    }
}
