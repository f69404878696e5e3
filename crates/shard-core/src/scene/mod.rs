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

//! Defines the scene contract shared between asset sources and the classifier.
//!
//! A loaded asset is an arena of [`SceneNode`]s plus a list of
//! [`AnimationTrack`]s. The core never creates or destroys nodes or tracks;
//! it only reads names and writes the derived role, material and visibility.

mod animation;
mod graph;
mod source;

pub use animation::*;
pub use graph::*;
pub use source::*;
