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

//! Renderer settings derived from the performance preference.

use serde::Serialize;
use shard_core::control::PerformanceMode;

/// Upper bound on the pixel ratio in high performance mode.
const MAX_HIGH_PIXEL_RATIO: f32 = 1.5;

/// What the renderer should be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSettings {
    /// Multisample antialiasing.
    pub antialias: bool,
    /// Drawing-buffer pixel ratio.
    pub pixel_ratio: f32,
    /// Orbit control damping factor.
    pub damping: f32,
}

impl RenderSettings {
    /// Settings for `mode` on a display with `device_pixel_ratio`.
    pub fn for_mode(mode: PerformanceMode, device_pixel_ratio: f32) -> Self {
        match mode {
            PerformanceMode::High => {
                let device = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
                    device_pixel_ratio
                } else {
                    1.0
                };
                Self {
                    antialias: true,
                    pixel_ratio: device.min(MAX_HIGH_PIXEL_RATIO),
                    damping: 0.05,
                }
            }
            PerformanceMode::Low => Self {
                antialias: false,
                pixel_ratio: 1.0,
                damping: 0.1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_high_mode_caps_pixel_ratio() {
        let s = RenderSettings::for_mode(PerformanceMode::High, 3.0);
        assert!(s.antialias);
        assert_relative_eq!(s.pixel_ratio, 1.5);
        assert_relative_eq!(s.damping, 0.05);

        let s = RenderSettings::for_mode(PerformanceMode::High, 1.25);
        assert_relative_eq!(s.pixel_ratio, 1.25);
    }

    #[test]
    fn test_low_mode_is_flat() {
        let s = RenderSettings::for_mode(PerformanceMode::Low, 3.0);
        assert!(!s.antialias);
        assert_relative_eq!(s.pixel_ratio, 1.0);
        assert_relative_eq!(s.damping, 0.1);
    }

    #[test]
    fn test_bad_device_ratio_falls_back_to_one() {
        let s = RenderSettings::for_mode(PerformanceMode::High, f32::NAN);
        assert_relative_eq!(s.pixel_ratio, 1.0);
    }
}
