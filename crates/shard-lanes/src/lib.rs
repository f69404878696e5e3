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

//! # Shard Lanes
//!
//! The per-frame processing stages of the viewer, in the order the render
//! loop runs them:
//!
//! 1. [`signal_lane`]: normalize scroll or camera input into one progress value.
//! 2. [`animation_lane`]: map that progress onto every animation track.
//! 3. [`scene_lane`]: classify scene nodes and assign cached materials.

#![warn(missing_docs)]

pub mod animation_lane;
pub mod scene_lane;
pub mod signal_lane;

pub use animation_lane::TimelineLane;
pub use scene_lane::{classify_name, ClassificationConfig, ClassificationLane, ClassificationReport};
pub use signal_lane::{ControlSignalLane, SignalConfig, SignalInput, SignalSource};
