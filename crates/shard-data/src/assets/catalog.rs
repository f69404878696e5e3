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

//! The ordered list of interchangeable asset variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative visual fidelity of an asset variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fidelity {
    /// Cheapest variant.
    Low,
    /// Intermediate variant.
    Medium,
    /// Full-detail variant.
    High,
}

/// One selectable version of the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetVariant {
    /// Path the variant is loaded from. Unique within a catalog.
    pub path: String,
    /// Label shown to the user.
    pub label: String,
    /// Visual fidelity.
    pub fidelity: Fidelity,
}

impl AssetVariant {
    /// Creates a new variant.
    pub fn new(path: impl Into<String>, label: impl Into<String>, fidelity: Fidelity) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            fidelity,
        }
    }
}

/// An error raised while building an [`AssetCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no variants.
    Empty,
    /// Two variants share a path.
    DuplicatePath(String),
    /// A variant has higher fidelity than the one listed before it.
    OutOfOrder {
        /// Path of the offending variant.
        path: String,
        /// Its fidelity.
        fidelity: Fidelity,
        /// Fidelity of the variant listed before it.
        previous: Fidelity,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Asset catalog must contain at least one variant"),
            CatalogError::DuplicatePath(path) => {
                write!(f, "Asset catalog lists '{path}' more than once")
            }
            CatalogError::OutOfOrder {
                path,
                fidelity,
                previous,
            } => write!(
                f,
                "Asset catalog lists '{path}' ({fidelity:?}) after a {previous:?} variant; \
                 variants must go from highest to lowest fidelity"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Asset variants ordered from highest to lowest fidelity.
///
/// The order given at construction is kept as is; the first entry is the
/// highest-fidelity variant and each following entry is the next step down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    variants: Vec<AssetVariant>,
}

impl AssetCatalog {
    /// Builds a catalog, rejecting empty lists, duplicate paths and
    /// variants whose fidelity rises down the list.
    pub fn new(variants: Vec<AssetVariant>) -> Result<Self, CatalogError> {
        if variants.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, variant) in variants.iter().enumerate() {
            if variants[..i].iter().any(|v| v.path == variant.path) {
                return Err(CatalogError::DuplicatePath(variant.path.clone()));
            }
        }
        for pair in variants.windows(2) {
            if pair[1].fidelity > pair[0].fidelity {
                return Err(CatalogError::OutOfOrder {
                    path: pair[1].path.clone(),
                    fidelity: pair[1].fidelity,
                    previous: pair[0].fidelity,
                });
            }
        }
        Ok(Self { variants })
    }

    /// The highest-fidelity variant.
    pub fn highest(&self) -> &AssetVariant {
        &self.variants[0]
    }

    /// Returns `true` if `path` names the highest-fidelity variant.
    pub fn is_highest(&self, path: &str) -> bool {
        self.highest().path == path
    }

    /// Looks up a variant by path.
    pub fn get(&self, path: &str) -> Option<&AssetVariant> {
        self.variants.iter().find(|v| v.path == path)
    }

    /// Returns `true` if `path` is in the catalog.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// The variant directly below `path`, if any.
    pub fn next_lower(&self, path: &str) -> Option<&AssetVariant> {
        let index = self.variants.iter().position(|v| v.path == path)?;
        self.variants.get(index + 1)
    }

    /// The last, lowest-fidelity variant.
    pub fn lowest(&self) -> &AssetVariant {
        &self.variants[self.variants.len() - 1]
    }

    /// Iterates over variants from highest to lowest fidelity.
    pub fn iter(&self) -> impl Iterator<Item = &AssetVariant> {
        self.variants.iter()
    }

    /// Number of variants. Never zero.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for AssetCatalog {
    /// The three crystal variants: full animation, no materials, simple model.
    fn default() -> Self {
        Self {
            variants: vec![
                AssetVariant::new("/crystal_animation.glb", "Full Animation", Fidelity::High),
                AssetVariant::new("/crystals_no_materials.glb", "No Materials", Fidelity::Medium),
                AssetVariant::new("/crystal_simple.glb", "Simple Model", Fidelity::Low),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = AssetCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.highest().path, "/crystal_animation.glb");
        assert_eq!(catalog.lowest().path, "/crystal_simple.glb");
        assert!(catalog.is_highest("/crystal_animation.glb"));
        assert!(!catalog.is_highest("/crystal_simple.glb"));
    }

    #[test]
    fn test_next_lower_steps_one_variant() {
        let catalog = AssetCatalog::default();
        assert_eq!(
            catalog.next_lower("/crystal_animation.glb").map(|v| v.path.as_str()),
            Some("/crystals_no_materials.glb")
        );
        assert_eq!(
            catalog.next_lower("/crystals_no_materials.glb").map(|v| v.path.as_str()),
            Some("/crystal_simple.glb")
        );
        assert!(catalog.next_lower("/crystal_simple.glb").is_none());
        assert!(catalog.next_lower("/unknown.glb").is_none());
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(AssetCatalog::new(Vec::new()), Err(CatalogError::Empty));

        let dup = vec![
            AssetVariant::new("/a.glb", "A", Fidelity::High),
            AssetVariant::new("/a.glb", "A again", Fidelity::Low),
        ];
        assert_eq!(
            AssetCatalog::new(dup),
            Err(CatalogError::DuplicatePath("/a.glb".to_string()))
        );
    }

    #[test]
    fn test_rejects_rising_fidelity() {
        let inverted = vec![
            AssetVariant::new("/simple.glb", "Simple", Fidelity::Low),
            AssetVariant::new("/full.glb", "Full", Fidelity::High),
        ];
        assert_eq!(
            AssetCatalog::new(inverted),
            Err(CatalogError::OutOfOrder {
                path: "/full.glb".to_string(),
                fidelity: Fidelity::High,
                previous: Fidelity::Low,
            })
        );
    }

    #[test]
    fn test_equal_fidelity_neighbours_are_allowed() {
        let catalog = AssetCatalog::new(vec![
            AssetVariant::new("/a.glb", "A", Fidelity::High),
            AssetVariant::new("/b.glb", "B", Fidelity::Medium),
            AssetVariant::new("/c.glb", "C", Fidelity::Medium),
        ])
        .unwrap();
        assert_eq!(catalog.next_lower("/b.glb").map(|v| v.path.as_str()), Some("/c.glb"));
    }

    #[test]
    fn test_single_variant_catalog() {
        let catalog =
            AssetCatalog::new(vec![AssetVariant::new("/only.glb", "Only", Fidelity::Low)]).unwrap();
        assert!(catalog.is_highest("/only.glb"));
        assert!(catalog.next_lower("/only.glb").is_none());
    }

    #[test]
    fn test_variant_from_ron() {
        let variant: AssetVariant =
            ron::from_str(r#"(path: "/x.glb", label: "X", fidelity: Medium)"#).unwrap();
        assert_eq!(variant.fidelity, Fidelity::Medium);
        assert!(Fidelity::High > Fidelity::Medium);
    }
}
