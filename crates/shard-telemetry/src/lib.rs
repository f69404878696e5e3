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

//! # Shard Telemetry
//!
//! Aggregates viewer metrics and bootstraps logging.
//!
//! - [`MetricsRegistry`]: registers counters and gauges and hands out cheap
//!   handles for updating them.
//! - [`TelemetryService`]: owns a registry and reports when a summary is due.
//! - [`logging::init_logging`]: installs the `env_logger` backend for the
//!   `log` facade.

pub mod logging;
pub mod metrics;
pub mod service;
pub mod storage;

pub use metrics::registry::{CounterHandle, GaugeHandle, MetricSnapshot, MetricsRegistry};
pub use logging::init_logging;
pub use service::TelemetryService;
