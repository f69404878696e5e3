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

//! # Shard Control
//!
//! Measures the frame rate the viewer actually achieves and reacts to it.
//!
//! The [`FrameRateSampler`] closes one measurement window per second and
//! publishes the frame count of that window. The [`QualityController`] is the
//! single writer of the quality state: it records each sample and, when the
//! rate drops below the threshold while the top variant is active, switches
//! to the next lower variant exactly once per session.

#![warn(missing_docs)]

pub mod metrics;
pub mod quality;
pub mod sampler;

pub use quality::{ControlError, QualityController, QualityPolicy, QualityTransition};
pub use sampler::{FpsSample, FrameRateSampler};
