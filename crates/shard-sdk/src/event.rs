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

//! Events delivered from the embedding layer to the coordinator.

use shard_core::control::{CameraPose, ControlMode, PerformanceMode};

/// An input or platform notification.
///
/// All events enter through one [`EventBus`](shard_core::EventBus) owned by
/// the coordinator and are applied at the start of the next frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// The page scroll fraction changed.
    ScrollChanged(f32),
    /// The camera moved.
    CameraMoved(CameraPose),
    /// The user switched between scroll and pose control.
    ControlModeChanged(ControlMode),
    /// The user changed the performance preference.
    PerformanceModeChanged(PerformanceMode),
    /// The user picked an asset variant by path.
    AssetSelected(String),
    /// The drawing surface changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// The platform asked for a frame.
    RedrawRequested,
    /// The graphics context was lost.
    ContextLost,
}
