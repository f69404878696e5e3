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

//! Rolling frame-rate measurement.

use std::time::{Duration, Instant};

use crate::metrics::RingBuffer;

/// Number of closed windows kept for averaging.
const HISTORY_LEN: usize = 60;

/// Frame count of one closed measurement window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsSample {
    /// Frames rendered during the window.
    pub fps: u32,
    /// Actual length of the window.
    pub elapsed: Duration,
}

/// Counts frames and closes a window once `window` has elapsed.
///
/// The first [`tick`](Self::tick) only sets the checkpoint. Every later tick
/// counts one frame; when at least `window` has passed since the checkpoint the
/// count is published as the sample and both counter and checkpoint reset.
/// The sample is the raw frame count, not normalized by the actual window
/// length.
#[derive(Debug, Clone)]
pub struct FrameRateSampler {
    window: Duration,
    frames: u32,
    checkpoint: Option<Instant>,
    history: RingBuffer<f32, HISTORY_LEN>,
}

impl FrameRateSampler {
    /// Creates a sampler closing one window per `window`.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            frames: 0,
            checkpoint: None,
            history: RingBuffer::new(),
        }
    }

    /// Records a frame at `now`. Returns a sample when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<FpsSample> {
        let Some(checkpoint) = self.checkpoint else {
            self.checkpoint = Some(now);
            return None;
        };

        self.frames = self.frames.saturating_add(1);
        let elapsed = now.saturating_duration_since(checkpoint);
        if elapsed < self.window {
            return None;
        }

        let sample = FpsSample {
            fps: self.frames,
            elapsed,
        };
        self.frames = 0;
        self.checkpoint = Some(now);
        self.history.push(sample.fps as f32);
        log::trace!("Frame-rate window closed: {} fps", sample.fps);
        Some(sample)
    }

    /// Forgets the current window. The next tick starts a new one.
    ///
    /// Used when frames stop for a while (idle), so the gap is not counted.
    pub fn restart(&mut self) {
        self.frames = 0;
        self.checkpoint = None;
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Frames counted in the open window.
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }

    /// Most recent sample, if any window has closed.
    pub fn latest(&self) -> Option<u32> {
        self.history.latest().map(|fps| fps as u32)
    }

    /// Mean of the retained samples, `0.0` before the first window closes.
    pub fn average_fps(&self) -> f32 {
        self.history.average()
    }

    /// Lowest retained sample.
    pub fn min_fps(&self) -> Option<f32> {
        (!self.history.is_empty()).then(|| self.history.min())
    }
}

impl Default for FrameRateSampler {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `windows` seconds of frames at a steady `fps` and collects the samples.
    fn run(
        sampler: &mut FrameRateSampler,
        start: Instant,
        fps: u32,
        windows: u32,
    ) -> Vec<FpsSample> {
        sampler.tick(start);
        (1..=fps * windows)
            .filter_map(|k| sampler.tick(start + Duration::from_secs(1) * k / fps))
            .collect()
    }

    #[test]
    fn test_first_tick_only_sets_checkpoint() {
        let mut sampler = FrameRateSampler::default();
        assert!(sampler.tick(Instant::now()).is_none());
        assert_eq!(sampler.pending_frames(), 0);
    }

    #[test]
    fn test_steady_rate_yields_one_sample_per_window() {
        let mut sampler = FrameRateSampler::default();
        let samples = run(&mut sampler, Instant::now(), 60, 3);

        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.fps == 60));
        assert_eq!(sampler.latest(), Some(60));
        assert!((sampler.average_fps() - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_no_sample_before_window_elapses() {
        let mut sampler = FrameRateSampler::default();
        let start = Instant::now();
        sampler.tick(start);
        for ms in (10..990).step_by(10) {
            assert!(sampler.tick(start + Duration::from_millis(ms)).is_none());
        }
        assert_eq!(sampler.pending_frames(), 98);
    }

    #[test]
    fn test_slow_frames_report_low_rate() {
        let mut sampler = FrameRateSampler::default();
        let samples = run(&mut sampler, Instant::now(), 12, 2);
        assert_eq!(samples.iter().map(|s| s.fps).collect::<Vec<_>>(), vec![12, 12]);
        assert_eq!(sampler.min_fps(), Some(12.0));
    }

    #[test]
    fn test_long_stall_counts_as_one_window() {
        let mut sampler = FrameRateSampler::default();
        let start = Instant::now();
        sampler.tick(start);
        let sample = sampler.tick(start + Duration::from_secs(5)).unwrap();
        assert_eq!(sample.fps, 1);
        assert_eq!(sample.elapsed, Duration::from_secs(5));
    }

    #[test]
    fn test_restart_discards_open_window() {
        let mut sampler = FrameRateSampler::default();
        let start = Instant::now();
        sampler.tick(start);
        sampler.tick(start + Duration::from_millis(100));
        sampler.restart();
        assert_eq!(sampler.pending_frames(), 0);
        assert!(sampler.tick(start + Duration::from_secs(3)).is_none());
    }
}
