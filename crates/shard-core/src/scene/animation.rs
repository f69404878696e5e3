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

/// Playback state of an animation track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not playing. Time stays at its last value.
    #[default]
    Stopped,
    /// Advanced by a clock.
    Playing,
    /// Active but clock-less; time is set externally.
    Paused,
}

/// A named animation clip owned by a loaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTrack {
    /// Clip name.
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
    /// Current playhead in seconds.
    pub current_time: f32,
    /// Current playback state.
    pub state: PlaybackState,
}

impl AnimationTrack {
    /// Creates a stopped track at time zero.
    ///
    /// Negative or non-finite durations are stored as `0.0`.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        Self {
            name: name.into(),
            duration,
            current_time: 0.0,
            state: PlaybackState::Stopped,
        }
    }
}
