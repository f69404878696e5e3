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

//! # Lane Abstraction
//!
//! The common base trait for the per-frame processing stages of the viewer.
//!
//! A **Lane** is a self-contained strategy for one step of the frame: turning
//! raw input into a progress value, driving animation tracks from it, or
//! classifying a scene graph. The render loop coordinator owns one lane of
//! each kind and invokes them in a fixed order.
//!
//! Domain-specific methods live on the concrete lane types in `shard-lanes`;
//! this trait only carries identity and classification.

use std::fmt;

/// Error type for lane operations.
#[derive(Debug)]
pub enum LaneError {
    /// The lane was built with parameters it cannot work with.
    InvalidConfig {
        /// Strategy name of the lane.
        lane: &'static str,
        /// What was wrong.
        reason: String,
    },
    /// A domain-specific error occurred during execution.
    ExecutionFailed(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::InvalidConfig { lane, reason } => {
                write!(f, "Invalid configuration for lane {lane}: {reason}")
            }
            LaneError::ExecutionFailed(e) => write!(f, "Lane execution failed: {e}"),
        }
    }
}

impl std::error::Error for LaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaneError::ExecutionFailed(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Classification of lane types, used for logging and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneKind {
    /// Resolves the control signal. Runs first.
    Signal,
    /// Drives animation tracks from the resolved signal.
    Animation,
    /// Classifies scene nodes and assigns materials.
    Scene,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Signal => write!(f, "Signal"),
            LaneKind::Animation => write!(f, "Animation"),
            LaneKind::Scene => write!(f, "Scene"),
        }
    }
}

/// The base trait for every per-frame processing strategy.
pub trait Lane: Send + Sync {
    /// Human-readable name of the strategy, used in logs.
    fn strategy_name(&self) -> &'static str;

    /// Which stage of the frame this lane implements.
    fn lane_kind(&self) -> LaneKind;
}
