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

//! Shared control-plane types: the normalized progress signal, the input and
//! performance modes, and the quality level reported to the outer layer.

mod camera;

pub use camera::*;

use serde::{Deserialize, Serialize};

use crate::math::saturate;

/// A normalized control signal, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Progress(f32);

impl Progress {
    /// Start of the timeline.
    pub const ZERO: Self = Self(0.0);
    /// End of the timeline.
    pub const ONE: Self = Self(1.0);

    /// Clamps `value` into `[0.0, 1.0]`. `NaN` becomes `0.0`.
    pub fn new(value: f32) -> Self {
        Self(saturate(value))
    }

    /// Returns `None` for `NaN`, otherwise the clamped progress.
    pub fn from_signal(value: f32) -> Option<Self> {
        if value.is_nan() {
            None
        } else {
            Some(Self::new(value))
        }
    }

    /// Raw value.
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Quantizes into one of `steps` buckets.
    ///
    /// `bucket = min(floor(progress * steps), steps - 1)`, so `1.0` lands in
    /// the last bucket rather than one past it. `steps == 0` is treated as 1.
    pub fn bucket(&self, steps: u32) -> u32 {
        let steps = steps.max(1);
        let raw = (self.0 * steps as f32).floor() as u32;
        raw.min(steps - 1)
    }
}

impl From<f32> for Progress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f32 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// Which input drives the progress signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Page scroll fraction.
    #[default]
    Scroll,
    /// Live camera position.
    Pose,
}

/// User preference trading fidelity for frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PerformanceMode {
    /// Antialiasing and high pixel ratio.
    #[default]
    High,
    /// Cheapest render settings.
    Low,
}

/// Whether the automatic downgrade has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QualityLevel {
    /// Running the initially selected variant.
    #[default]
    Nominal,
    /// The automatic downgrade fired. Terminal for the session.
    Degraded,
}

/// Coarse frame-rate band used for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FpsBand {
    /// Below 30 fps.
    Poor,
    /// 30 to 49 fps.
    Fair,
    /// 50 fps and above.
    Good,
}

impl FpsBand {
    /// Maps a frame rate to its band.
    pub fn from_fps(fps: u32) -> Self {
        match fps {
            0..=29 => FpsBand::Poor,
            30..=49 => FpsBand::Fair,
            _ => FpsBand::Good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Progress::new(-3.0).get(), 0.0);
        assert_eq!(Progress::new(0.4).get(), 0.4);
        assert_eq!(Progress::new(12.0).get(), 1.0);
        assert_eq!(Progress::new(f32::INFINITY).get(), 1.0);
    }

    #[test]
    fn test_nan_is_no_signal() {
        assert!(Progress::from_signal(f32::NAN).is_none());
        assert_eq!(Progress::from_signal(2.0), Some(Progress::ONE));
    }

    #[test]
    fn test_bucket_with_ten_steps() {
        assert_eq!(Progress::new(0.0).bucket(10), 0);
        assert_eq!(Progress::new(0.35).bucket(10), 3);
        assert_eq!(Progress::new(0.999).bucket(10), 9);
        assert_eq!(Progress::new(1.0).bucket(10), 9);
    }

    #[test]
    fn test_bucket_with_zero_steps() {
        assert_eq!(Progress::new(0.7).bucket(0), 0);
    }

    #[test]
    fn test_fps_band_thresholds() {
        assert_eq!(FpsBand::from_fps(0), FpsBand::Poor);
        assert_eq!(FpsBand::from_fps(29), FpsBand::Poor);
        assert_eq!(FpsBand::from_fps(30), FpsBand::Fair);
        assert_eq!(FpsBand::from_fps(49), FpsBand::Fair);
        assert_eq!(FpsBand::from_fps(50), FpsBand::Good);
        assert_eq!(FpsBand::from_fps(144), FpsBand::Good);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ControlMode::default(), ControlMode::Scroll);
        assert_eq!(PerformanceMode::default(), PerformanceMode::High);
        assert_eq!(QualityLevel::default(), QualityLevel::Nominal);
    }
}
