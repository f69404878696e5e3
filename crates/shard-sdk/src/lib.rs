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

//! # Shard SDK
//!
//! The public entry point of the viewer core. An embedding layer builds a
//! [`RenderLoopCoordinator`] from a [`ViewerConfig`] and an
//! [`AssetSource`](shard_core::scene::AssetSource), pushes [`ViewerEvent`]s
//! into it, and calls [`RenderLoopCoordinator::frame`] from its frame
//! callback. Everything it needs to display comes back through
//! [`ViewerStatus`].

#![warn(missing_docs)]

pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod memory_source;
pub mod settings;

pub use config::ViewerConfig;
pub use coordinator::{
    FrameOutcome, FrameReport, FrameUniforms, RenderLoopCoordinator, ViewerStatus,
};
pub use error::{RenderFault, ViewerError};
pub use event::ViewerEvent;
pub use memory_source::MemoryAssetSource;
pub use settings::RenderSettings;

pub use shard_control::QualityTransition;
pub use shard_core::control::{
    CameraPose, CameraPreset, CameraRotation, ControlMode, FpsBand, PerformanceMode, Progress,
    QualityLevel,
};
pub use shard_data::assets::{AssetVariant, Fidelity, PalettePreset};
