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

use std::fmt;

use super::{AnimationTrack, SceneGraph};

/// A fully loaded asset: its node hierarchy and its animation tracks.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    /// Catalog path the scene was loaded from.
    pub path: String,
    /// Node hierarchy.
    pub graph: SceneGraph,
    /// Animation tracks.
    pub tracks: Vec<AnimationTrack>,
}

impl LoadedScene {
    /// Creates a scene with no nodes and no tracks.
    pub fn empty(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            graph: SceneGraph::new(),
            tracks: Vec::new(),
        }
    }
}

/// An error that can occur while fetching a scene from an [`AssetSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadError {
    /// No asset exists at the given path.
    NotFound(String),
    /// The asset exists but could not be decoded.
    Malformed {
        /// Path of the asset.
        path: String,
        /// Human readable reason.
        reason: String,
    },
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetLoadError::NotFound(path) => write!(f, "Asset not found: {path}"),
            AssetLoadError::Malformed { path, reason } => {
                write!(f, "Asset '{path}' is malformed: {reason}")
            }
        }
    }
}

impl std::error::Error for AssetLoadError {}

/// Supplies loaded scenes by catalog path.
///
/// Decoding file formats is outside the core; implementors hand back an
/// already-built [`LoadedScene`].
pub trait AssetSource {
    /// Loads the scene stored at `path`.
    fn load(&mut self, path: &str) -> Result<LoadedScene, AssetLoadError>;
}
