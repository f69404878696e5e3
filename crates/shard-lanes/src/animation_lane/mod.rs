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

//! Maps the resolved progress onto animation track playheads.

use shard_core::{
    control::Progress,
    lane::{Lane, LaneKind},
    scene::{AnimationTrack, PlaybackState},
};

/// Drives every track of the active asset from a single progress value.
///
/// Tracks are held in [`PlaybackState::Paused`] so no clock advances them;
/// `current_time` is a pure function of progress: `progress * duration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineLane;

impl TimelineLane {
    /// Creates the lane.
    pub fn new() -> Self {
        Self
    }

    /// Sets each track's playhead from `progress`. Returns the number of tracks touched.
    pub fn drive(&self, tracks: &mut [AnimationTrack], progress: Progress) -> usize {
        for track in tracks.iter_mut() {
            track.state = PlaybackState::Paused;
            track.current_time = progress.get() * track.duration;
        }
        if !tracks.is_empty() {
            log::trace!(
                "Timeline set {} track(s) to progress {:.3}",
                tracks.len(),
                progress.get()
            );
        }
        tracks.len()
    }
}

impl Lane for TimelineLane {
    fn strategy_name(&self) -> &'static str {
        "Timeline"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_progress_zero_rewinds_every_track() {
        let mut tracks = vec![AnimationTrack::new("a", 4.0), AnimationTrack::new("b", 2.5)];
        tracks[0].current_time = 3.0;

        TimelineLane::new().drive(&mut tracks, Progress::ZERO);

        assert!(tracks.iter().all(|t| t.current_time == 0.0));
        assert!(tracks.iter().all(|t| t.state == PlaybackState::Paused));
    }

    #[test]
    fn test_progress_one_reaches_duration() {
        let mut tracks = vec![AnimationTrack::new("grow", 4.0)];
        TimelineLane::new().drive(&mut tracks, Progress::ONE);
        assert_relative_eq!(tracks[0].current_time, 4.0);
    }

    #[test]
    fn test_tracks_are_driven_independently() {
        let mut tracks = vec![AnimationTrack::new("short", 1.0), AnimationTrack::new("long", 10.0)];
        let touched = TimelineLane::new().drive(&mut tracks, Progress::new(0.25));

        assert_eq!(touched, 2);
        assert_relative_eq!(tracks[0].current_time, 0.25);
        assert_relative_eq!(tracks[1].current_time, 2.5);
    }

    #[test]
    fn test_empty_track_list_is_noop() {
        let mut tracks: Vec<AnimationTrack> = Vec::new();
        assert_eq!(TimelineLane::new().drive(&mut tracks, Progress::ONE), 0);
    }

    #[test]
    fn test_zero_duration_track_stays_at_zero() {
        let mut tracks = vec![AnimationTrack::new("static", 0.0)];
        TimelineLane::new().drive(&mut tracks, Progress::new(0.9));
        assert_eq!(tracks[0].current_time, 0.0);
    }
}
