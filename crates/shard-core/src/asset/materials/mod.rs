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

//! Defines the core traits and material types produced by the scene classifier.

mod alpha_mode;
mod standard;
mod toon;
mod unlit;

pub use alpha_mode::*;
pub use standard::*;
pub use toon::*;
pub use unlit::*;

use std::any::Any;
use std::fmt::Debug;

use super::{Asset, AssetHandle};
use crate::math::LinearRgba;

/// Helper trait to allow downcasting `dyn Material` trait objects to their concrete types.
pub trait AsAny {
    /// Returns a reference to the inner value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Which faces of a mesh a material is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceSide {
    /// Only front faces are drawn.
    #[default]
    Front,
    /// Only back faces are drawn. Used by inverted-hull outlines.
    Back,
    /// Both faces are drawn.
    Double,
}

/// A trait for types that can be used as a material.
///
/// A material defines the surface properties of a node. The renderer reads
/// these values through the trait so it does not need to know which concrete
/// palette produced the material.
pub trait Material: Asset + AsAny + Debug {
    /// Returns the base color (albedo or diffuse) of the material.
    /// Default implementation is White.
    fn base_color(&self) -> LinearRgba {
        LinearRgba::WHITE
    }

    /// Returns the emissive color of the material, already scaled by its intensity.
    /// Default implementation is Black.
    fn emissive_color(&self) -> LinearRgba {
        LinearRgba::BLACK
    }

    /// Returns the overall opacity, `1.0` for opaque materials.
    fn opacity(&self) -> f32 {
        1.0
    }

    /// Returns the faces this material is drawn on.
    fn side(&self) -> FaceSide {
        FaceSide::Front
    }
}

/// A boxed, dynamic Material trait object can itself be stored inside an
/// [`AssetHandle`], which gives every material a single handle type.
impl Asset for Box<dyn Material> {}

/// Shared, type-erased handle to a constructed material.
pub type MaterialHandle = AssetHandle<Box<dyn Material>>;

impl AssetHandle<Box<dyn Material>> {
    /// Downcasts the shared material to its concrete type.
    pub fn downcast<M: Material>(&self) -> Option<&M> {
        (***self).as_any().downcast_ref::<M>()
    }
}
