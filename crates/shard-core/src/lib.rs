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

//! # Shard Core
//!
//! Foundational crate containing the math primitives, asset and scene
//! contracts, and shared control types used by every other Shardlight crate.
//!
//! Nothing in here knows how a frame is scheduled or how an asset is loaded.
//! Those decisions live in `shard-lanes`, `shard-control` and `shard-sdk`.

#![warn(missing_docs)]

pub mod asset;
pub mod control;
pub mod event;
pub mod lane;
pub mod math;
pub mod scene;
pub mod telemetry;

pub use control::{ControlMode, PerformanceMode, Progress, QualityLevel};
pub use event::EventBus;
