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

//! Errors and advisories surfaced by the viewer.

use std::path::PathBuf;

use serde::Serialize;
use shard_control::ControlError;
use shard_core::{lane::LaneError, scene::AssetLoadError, telemetry::MetricsError};
use shard_data::assets::CatalogError;

/// Errors returned by the viewer API.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The configuration text could not be parsed or written.
    #[error("invalid viewer configuration: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured catalog is unusable.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A lane rejected its configuration or failed while running.
    #[error(transparent)]
    Lane(#[from] LaneError),

    /// A quality request was rejected.
    #[error(transparent)]
    Control(#[from] ControlError),

    /// The asset source could not provide a scene.
    #[error(transparent)]
    Asset(#[from] AssetLoadError),

    /// Metric registration failed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// A recoverable fault reported to the outer layer.
///
/// Faults stop frame production. There is no automatic retry; the outer
/// layer decides whether to rebuild the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RenderFault {
    /// The graphics context was lost.
    ContextLost,
}

impl RenderFault {
    /// Message suitable for showing to the user.
    pub fn advisory(&self) -> &'static str {
        match self {
            RenderFault::ContextLost => {
                "Graphics context lost. Try reloading or closing other GPU-intensive applications."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_errors_keep_message() {
        let err: ViewerError = CatalogError::Empty.into();
        assert_eq!(err.to_string(), CatalogError::Empty.to_string());

        let err: ViewerError = ControlError::UnknownAsset("/x.glb".to_string()).into();
        assert!(err.to_string().contains("/x.glb"));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err = ViewerError::Io {
            path: PathBuf::from("viewer.ron"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("viewer.ron"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_context_lost_advisory() {
        assert!(RenderFault::ContextLost.advisory().contains("context lost"));
    }
}
