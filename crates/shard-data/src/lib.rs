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

//! # Shard Data
//!
//! Owned state shared by the per-frame lanes: the palette and material cache,
//! the catalog of asset variants, the quality state, and the [`RenderContext`]
//! that bundles them.

pub mod assets;
pub mod context;
pub mod quality;

pub use context::RenderContext;
pub use quality::QualityState;
