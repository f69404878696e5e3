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

//! A memoizing store for palette materials.

use std::collections::HashMap;

use shard_core::{
    asset::{AssetHandle, Material, MaterialHandle, UnlitMaterial},
    control::Progress,
};

use super::Palette;

/// Default number of progress buckets.
pub const DEFAULT_QUANTIZATION_STEPS: u32 = 10;

/// Logical descriptor of a palette material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialKey {
    /// Palette category.
    pub category: usize,
    /// Quantized progress bucket.
    pub bucket: u32,
}

impl MaterialKey {
    /// Creates a new key.
    pub fn new(category: usize, bucket: u32) -> Self {
        Self { category, bucket }
    }
}

/// A lazily populated, never evicted cache of constructed materials.
///
/// Each [`MaterialKey`] maps to exactly one material instance for the
/// lifetime of the cache; every lookup of an equal key returns a handle to the
/// same allocation. Keys are normalized into the palette's range first, so
/// the number of materials ever built is bounded by
/// `palette.len() * steps`.
#[derive(Debug)]
pub struct MaterialCache {
    palette: Palette,
    steps: u32,
    entries: HashMap<MaterialKey, MaterialHandle>,
    outline: Option<MaterialHandle>,
    constructed: usize,
}

impl MaterialCache {
    /// Creates an empty cache for `palette` with `steps` progress buckets.
    pub fn new(palette: Palette, steps: u32) -> Self {
        Self {
            palette,
            steps: steps.max(1),
            entries: HashMap::new(),
            outline: None,
            constructed: 0,
        }
    }

    /// Palette the cache builds from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of progress buckets.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Maps a progress value to its bucket.
    pub fn quantize(&self, progress: Progress) -> u32 {
        progress.bucket(self.steps)
    }

    /// Upper bound on the number of palette materials this cache can hold.
    pub fn capacity_bound(&self) -> usize {
        self.palette.len() * self.steps as usize
    }

    /// Returns the cached material for `key`, building it on first request.
    pub fn get(&mut self, key: MaterialKey) -> MaterialHandle {
        let key = MaterialKey {
            category: key.category % self.palette.len(),
            bucket: key.bucket.min(self.steps - 1),
        };

        let palette = &self.palette;
        let steps = self.steps;
        let mut built = false;
        let handle = self
            .entries
            .entry(key)
            .or_insert_with(|| {
                built = true;
                AssetHandle::new(palette.build_material(key.category, key.bucket, steps))
            })
            .clone();

        if built {
            self.constructed += 1;
            log::trace!(
                "Built material for category {} bucket {} ({} cached)",
                key.category,
                key.bucket,
                self.entries.len()
            );
            debug_assert!(self.entries.len() <= self.capacity_bound());
        }

        handle
    }

    /// Returns the cached material for `key` without building it.
    pub fn peek(&self, key: &MaterialKey) -> Option<&MaterialHandle> {
        self.entries.get(key)
    }

    /// The shared outline material, built on first request.
    pub fn outline_material(&mut self) -> MaterialHandle {
        self.outline
            .get_or_insert_with(|| {
                let material: Box<dyn Material> = Box::new(UnlitMaterial::outline());
                AssetHandle::new(material)
            })
            .clone()
    }

    /// Number of palette materials currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no palette material has been built yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of palette materials ever constructed.
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}
