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

//! Service owning the metrics registry and pacing periodic summaries.

use crate::metrics::registry::MetricsRegistry;
use std::time::{Duration, Instant};

/// Owns the metrics registry and reports when a periodic summary is due.
#[derive(Debug)]
pub struct TelemetryService {
    metrics: MetricsRegistry,
    last_update: Option<Instant>,
    update_interval: Duration,
}

impl TelemetryService {
    /// Creates a new telemetry service with the given update interval.
    pub fn new(update_interval: Duration) -> Self {
        Self {
            metrics: MetricsRegistry::new(),
            last_update: None,
            update_interval,
        }
    }

    /// Should be called once per frame. Returns `true` when the interval has passed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Same as [`tick`](Self::tick) with an explicit clock.
    ///
    /// The first call only starts the interval.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.last_update {
            None => {
                self.last_update = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.update_interval => {
                log::trace!("Telemetry interval elapsed.");
                self.last_update = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    /// Returns a reference to the metrics registry.
    pub fn metrics_registry(&self) -> &MetricsRegistry {
        &self.metrics
    }
}

impl Default for TelemetryService {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
