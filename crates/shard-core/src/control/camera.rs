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

//! Camera pose inputs used by the pose-driven control mode.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Camera orientation in degrees.
///
/// Values are clamped on construction, deserialization included: yaw and
/// roll to `±180`, pitch to `±90`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RotationDegrees")]
pub struct CameraRotation {
    yaw: f32,
    pitch: f32,
    roll: f32,
}

/// Unchecked wire form of [`CameraRotation`].
#[derive(Deserialize)]
struct RotationDegrees {
    yaw: f32,
    pitch: f32,
    roll: f32,
}

impl From<RotationDegrees> for CameraRotation {
    fn from(raw: RotationDegrees) -> Self {
        Self::new(raw.yaw, raw.pitch, raw.roll)
    }
}

impl CameraRotation {
    /// Builds a rotation, clamping each angle into its range.
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        let clamp = |v: f32, limit: f32| {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(-limit, limit)
            }
        };
        Self {
            yaw: clamp(yaw, 180.0),
            pitch: clamp(pitch, 90.0),
            roll: clamp(roll, 180.0),
        }
    }

    /// Rotation around the vertical axis.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotation around the lateral axis.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotation around the view axis.
    pub fn roll(&self) -> f32 {
        self.roll
    }
}

/// Named camera placements offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraPreset {
    /// Looking from the front.
    Front,
    /// Looking from the side.
    Side,
    /// Looking straight down.
    Top,
    /// Isometric three-quarter view.
    Iso,
}

impl CameraPreset {
    /// All presets, in display order.
    pub const ALL: [CameraPreset; 4] = [
        CameraPreset::Front,
        CameraPreset::Side,
        CameraPreset::Top,
        CameraPreset::Iso,
    ];

    /// World-space camera position for this preset.
    pub fn position(&self) -> Vec3 {
        match self {
            CameraPreset::Front => Vec3::new(0.0, -20.0, 10.0),
            CameraPreset::Side => Vec3::new(20.0, 0.0, 10.0),
            CameraPreset::Top => Vec3::new(0.0, 0.0, 25.0),
            CameraPreset::Iso => Vec3::new(15.0, -15.0, 15.0),
        }
    }
}

/// Camera position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// World-space position.
    pub position: Vec3,
    /// Orientation in degrees.
    pub rotation: CameraRotation,
}

impl CameraPose {
    /// Where the camera starts before any input arrives.
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 95.0);

    /// Creates a pose at `position` with no rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: CameraRotation::default(),
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::at(Self::DEFAULT_POSITION)
    }
}

impl From<CameraPreset> for CameraPose {
    fn from(preset: CameraPreset) -> Self {
        Self::at(preset.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_clamped() {
        let r = CameraRotation::new(270.0, -120.0, -400.0);
        assert_eq!(r.yaw(), 180.0);
        assert_eq!(r.pitch(), -90.0);
        assert_eq!(r.roll(), -180.0);
    }

    #[test]
    fn test_rotation_nan_is_zero() {
        let r = CameraRotation::new(f32::NAN, 45.0, 0.0);
        assert_eq!(r.yaw(), 0.0);
        assert_eq!(r.pitch(), 45.0);
    }

    #[test]
    fn test_deserialized_rotation_is_clamped() {
        let pose: CameraPose = ron::from_str(
            "(position: (x: 0.0, y: 0.0, z: 95.0), \
              rotation: (yaw: 720.0, pitch: 120.0, roll: -400.0))",
        )
        .unwrap();
        assert_eq!(pose.rotation, CameraRotation::new(180.0, 90.0, -180.0));
    }

    #[test]
    fn test_default_pose() {
        let pose = CameraPose::default();
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, 95.0));
        assert_eq!(pose.rotation, CameraRotation::default());
    }

    #[test]
    fn test_presets() {
        assert_eq!(CameraPose::from(CameraPreset::Top).position, Vec3::new(0.0, 0.0, 25.0));
        assert_eq!(CameraPreset::Iso.position(), Vec3::new(15.0, -15.0, 15.0));
        assert_eq!(CameraPreset::ALL.len(), 4);
    }
}
