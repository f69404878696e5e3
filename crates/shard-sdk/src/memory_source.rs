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

//! An [`AssetSource`] backed by prebuilt scenes held in memory.

use std::collections::HashMap;

use shard_core::scene::{
    AnimationTrack, AssetLoadError, AssetSource, LoadedScene, SceneGraph, SceneNode,
};

/// Serves clones of registered scenes.
///
/// Used by the headless runtime and by tests; a real embedding supplies a
/// source that decodes asset files.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    scenes: HashMap<String, LoadedScene>,
    loads: usize,
}

impl MemoryAssetSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `scene` under its own path, replacing any previous one.
    pub fn insert(&mut self, scene: LoadedScene) {
        self.scenes.insert(scene.path.clone(), scene);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_scene(mut self, scene: LoadedScene) -> Self {
        self.insert(scene);
        self
    }

    /// Number of successful loads so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Scenes for the three default catalog variants.
    pub fn demo() -> Self {
        Self::new()
            .with_scene(crystal_scene("/crystal_animation.glb", 12, 2))
            .with_scene(crystal_scene("/crystals_no_materials.glb", 8, 1))
            .with_scene(crystal_scene("/crystal_simple.glb", 4, 0))
    }
}

impl AssetSource for MemoryAssetSource {
    fn load(&mut self, path: &str) -> Result<LoadedScene, AssetLoadError> {
        let scene = self
            .scenes
            .get(path)
            .cloned()
            .ok_or_else(|| AssetLoadError::NotFound(path.to_string()))?;
        self.loads += 1;
        log::debug!("Loaded '{path}' ({} nodes, {} tracks)", scene.graph.len(), scene.tracks.len());
        Ok(scene)
    }
}

/// A ground plane, a backdrop, and `shards` crystal shards under one group.
fn crystal_scene(path: &str, shards: usize, tracks: usize) -> LoadedScene {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(SceneNode::new("Scene", false));
    let _ = graph.add_child(root, SceneNode::new("Ground_01", true));
    let _ = graph.add_child(root, SceneNode::new("Backdrop_Plane", true));
    if let Some(cluster) = graph.add_child(root, SceneNode::new("Cluster", false)) {
        for i in 0..shards {
            let _ = graph.add_child(cluster, SceneNode::new(format!("Crystal_Shard_{i:02}"), true));
        }
        let _ = graph.add_child(cluster, SceneNode::new("Pedestal", true));
    }

    let tracks = (0..tracks)
        .map(|i| AnimationTrack::new(format!("Grow_{i}"), 4.0 + i as f32))
        .collect();

    LoadedScene {
        path: path.to_string(),
        graph,
        tracks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_serves_default_catalog() {
        let mut source = MemoryAssetSource::demo();
        for path in [
            "/crystal_animation.glb",
            "/crystals_no_materials.glb",
            "/crystal_simple.glb",
        ] {
            let scene = source.load(path).unwrap();
            assert_eq!(scene.path, path);
            assert!(scene.graph.find("Ground_01").is_some());
        }
        assert_eq!(source.loads(), 3);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let mut source = MemoryAssetSource::new();
        assert_eq!(
            source.load("/nope.glb").unwrap_err(),
            AssetLoadError::NotFound("/nope.glb".to_string())
        );
        assert_eq!(source.loads(), 0);
    }

    #[test]
    fn test_load_returns_independent_copies() {
        let mut source = MemoryAssetSource::demo();
        let mut first = source.load("/crystal_simple.glb").unwrap();
        let id = first.graph.find("Ground_01").unwrap();
        first.graph.node_mut(id).unwrap().is_renderable = false;

        let second = source.load("/crystal_simple.glb").unwrap();
        assert!(second.graph.node(id).unwrap().is_renderable);
    }
}
