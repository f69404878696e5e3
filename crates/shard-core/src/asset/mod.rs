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

//! Provides the foundational traits and handle types for Shardlight's assets.
//!
//! This module defines the contracts that storage crates implement or use. It
//! has no knowledge of how an asset is loaded, cached or evicted.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for all types that can be treated as assets.
//! - [`AssetHandle`]: a cheap, shared reference to a loaded asset.
//! - The [`Material`] family used by the scene classifier.

mod handle;
mod materials;

pub use handle::*;
pub use materials::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits guarantee that an asset can be shared behind an
/// [`AssetHandle`] and stored for the lifetime of the viewer.
///
/// # Examples
///
/// ```
/// use shard_core::asset::Asset;
///
/// struct Texture {
///     width: u32,
/// }
///
/// impl Asset for Texture {}
/// ```
pub trait Asset: Send + Sync + 'static {}
