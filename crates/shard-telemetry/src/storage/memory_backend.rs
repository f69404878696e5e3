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

use crate::storage::backend::MetricsBackend;
use shard_core::telemetry::{Metric, MetricId, MetricsError, MetricsResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory metrics backend using `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    storage: RwLock<HashMap<MetricId, Metric>>,
}

impl InMemoryBackend {
    /// Create a new in-memory backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsBackend for InMemoryBackend {
    fn put_metric(&self, metric: Metric) -> MetricsResult<()> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| MetricsError::StorageError("Failed to acquire write lock".to_string()))?;

        storage.insert(metric.metadata.id.clone(), metric);
        Ok(())
    }

    fn get_metric(&self, id: &MetricId) -> MetricsResult<Metric> {
        let storage = self
            .storage
            .read()
            .map_err(|_| MetricsError::StorageError("Failed to acquire read lock".to_string()))?;

        storage
            .get(id)
            .cloned()
            .ok_or_else(|| MetricsError::MetricNotFound(id.clone()))
    }

    fn contains_metric(&self, id: &MetricId) -> bool {
        self.storage
            .read()
            .map(|storage| storage.contains_key(id))
            .unwrap_or(false)
    }

    fn list_all_metrics(&self) -> Vec<Metric> {
        self.storage
            .read()
            .map(|storage| storage.values().cloned().collect())
            .unwrap_or_default()
    }

    fn metric_count(&self) -> usize {
        self.storage.read().map(|storage| storage.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_core::telemetry::{MetricType, MetricValue};

    #[test]
    fn test_put_and_get() {
        let backend = InMemoryBackend::new();
        let id = MetricId::new("viewer", "frames");
        backend
            .put_metric(Metric::new_counter(id.clone(), "Frames", 3))
            .unwrap();

        assert!(backend.contains_metric(&id));
        assert_eq!(backend.metric_count(), 1);
        assert_eq!(backend.get_metric(&id).unwrap().value, MetricValue::Counter(3));
    }

    #[test]
    fn test_missing_metric() {
        let backend = InMemoryBackend::new();
        let id = MetricId::new("viewer", "missing");
        assert_eq!(
            backend.get_metric(&id).unwrap_err(),
            MetricsError::MetricNotFound(id)
        );
    }

    #[test]
    fn test_increment_counter_and_type_mismatch() {
        let backend = InMemoryBackend::new();
        let counter = MetricId::new("viewer", "frames");
        let gauge = MetricId::new("viewer", "fps");
        backend.put_metric(Metric::new_counter(counter.clone(), "", 0)).unwrap();
        backend
            .put_metric(Metric::new_gauge(gauge.clone(), "", "fps", 0.0))
            .unwrap();

        assert_eq!(backend.increment_counter(&counter, 2).unwrap(), 2);
        assert_eq!(backend.increment_counter(&counter, 5).unwrap(), 7);
        assert_eq!(
            backend.increment_counter(&gauge, 1),
            Err(MetricsError::TypeMismatch {
                expected: MetricType::Counter,
                found: MetricType::Gauge,
            })
        );
        assert!(backend.set_gauge(&counter, 1.0).is_err());
    }
}
