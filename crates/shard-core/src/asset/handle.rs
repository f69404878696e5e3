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

use super::Asset;
use std::{ops::Deref, sync::Arc};

/// A thread-safe, reference-counted handle to a loaded asset.
///
/// Cloning a handle only increments the reference count. Two handles are the
/// *same asset* when [`AssetHandle::ptr_eq`] returns `true`; the material
/// cache relies on this identity to prove it never builds a key twice.
#[derive(Debug)]
pub struct AssetHandle<T: Asset + ?Sized>(Arc<T>);

impl<T: Asset> AssetHandle<T> {
    /// Creates a new `AssetHandle` that takes ownership of the asset data.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }
}

impl<T: Asset + ?Sized> AssetHandle<T> {
    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Number of live handles sharing this asset.
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }
}

impl<T: Asset + ?Sized> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Asset + ?Sized> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
