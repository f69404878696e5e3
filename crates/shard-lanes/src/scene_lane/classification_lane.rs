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

use std::fmt;

use serde::{Deserialize, Serialize};
use shard_core::{
    control::Progress,
    lane::{Lane, LaneError, LaneKind},
    scene::{NodeId, NodeKind, NodeRole, Outline, SceneGraph},
};
use shard_data::assets::{MaterialCache, MaterialKey};

use super::classify_name;

/// Outline settings for tintable nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Attach an outline shell to tintable nodes.
    pub outlines: bool,
    /// Scale of the outline shell relative to its node.
    pub outline_scale: f32,
    /// Draw order of the outline shell.
    pub outline_render_order: i32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            outlines: false,
            outline_scale: 1.07,
            outline_render_order: -1,
        }
    }
}

/// Summary of one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationReport {
    /// Quantized progress bucket the pass ran at.
    pub bucket: u32,
    /// Nodes hidden.
    pub hidden: usize,
    /// Nodes tinted.
    pub tinted: usize,
    /// Nodes left untouched.
    pub passthrough: usize,
    /// Outlines attached during this pass.
    pub outlines_added: usize,
}

/// A node id produced by traversal that does not exist in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingNode(pub NodeId);

impl fmt::Display for MissingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scene graph has no node {}", self.0 .0)
    }
}

impl std::error::Error for MissingNode {}

/// Walks a scene graph, assigns node roles and palette materials.
///
/// Tintable nodes get palette categories in round-robin order of a
/// depth-first traversal; the counter restarts at zero on every pass, so two
/// passes over the same graph at the same progress produce identical results.
/// Materials come from the [`MaterialCache`], so a repeated pass never builds
/// a material twice, and an outline is attached at most once per node.
#[derive(Debug, Clone, Default)]
pub struct ClassificationLane {
    config: ClassificationConfig,
}

impl ClassificationLane {
    /// Creates the lane.
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Classifies every mesh node of `graph` at `progress`.
    pub fn classify(
        &self,
        graph: &mut SceneGraph,
        progress: Progress,
        materials: &mut MaterialCache,
    ) -> Result<ClassificationReport, LaneError> {
        let bucket = materials.quantize(progress);
        let mut report = ClassificationReport {
            bucket,
            ..Default::default()
        };
        let mut next_category = 0usize;

        for id in graph.depth_first() {
            let node = graph
                .node_mut(id)
                .ok_or_else(|| LaneError::ExecutionFailed(Box::new(MissingNode(id))))?;
            if !node.has_mesh {
                continue;
            }

            let kind = node
                .role
                .map(|role| role.kind())
                .unwrap_or_else(|| classify_name(&node.name));

            match kind {
                NodeKind::Hidden => {
                    node.is_renderable = false;
                    node.role = Some(NodeRole::Hidden);
                    report.hidden += 1;
                }
                NodeKind::Tintable => {
                    let category = next_category % materials.palette().len();
                    next_category += 1;

                    node.material = Some(materials.get(MaterialKey::new(category, bucket)));
                    node.role = Some(NodeRole::Tintable(category));
                    node.frustum_culled = true;

                    if self.config.outlines && node.outline.is_none() {
                        node.outline = Some(Outline {
                            material: materials.outline_material(),
                            scale: self.config.outline_scale,
                            render_order: self.config.outline_render_order,
                        });
                        report.outlines_added += 1;
                    }
                    report.tinted += 1;
                }
                NodeKind::Passthrough => {
                    node.role = Some(NodeRole::Passthrough);
                    report.passthrough += 1;
                }
            }
        }

        log::debug!(
            "Classified scene at bucket {}: {} hidden, {} tinted, {} passthrough",
            report.bucket,
            report.hidden,
            report.tinted,
            report.passthrough
        );
        Ok(report)
    }
}

impl Lane for ClassificationLane {
    fn strategy_name(&self) -> &'static str {
        "Classification"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_core::{asset::AssetHandle, scene::SceneNode};
    use shard_data::assets::{Palette, DEFAULT_QUANTIZATION_STEPS};

    fn graph() -> SceneGraph {
        let mut graph = SceneGraph::new();
        let root = graph.add_root(SceneNode::new("Scene", false));
        graph.add_child(root, SceneNode::new("Ground_01", true));
        graph.add_child(root, SceneNode::new("Crystal_Shard_01", true));
        graph.add_child(root, SceneNode::new("Crystal_Shard_02", true));
        graph.add_child(root, SceneNode::new("Rock", true));
        graph.add_child(root, SceneNode::new("Crystal_Shard_03", true));
        graph.add_child(root, SceneNode::new("Crystal_Shard_04", true));
        graph
    }

    fn cache() -> MaterialCache {
        MaterialCache::new(Palette::crystal(), DEFAULT_QUANTIZATION_STEPS)
    }

    fn node<'a>(graph: &'a SceneGraph, name: &str) -> &'a SceneNode {
        graph.node(graph.find(name).unwrap()).unwrap()
    }

    #[test]
    fn test_roles_are_assigned() {
        let mut graph = graph();
        let mut materials = cache();
        let report = ClassificationLane::default()
            .classify(&mut graph, Progress::new(0.35), &mut materials)
            .unwrap();

        assert_eq!(report.bucket, 3);
        assert_eq!(report.hidden, 1);
        assert_eq!(report.tinted, 4);
        assert_eq!(report.passthrough, 1);

        let ground = node(&graph, "Ground_01");
        assert!(!ground.is_renderable);
        assert_eq!(ground.role, Some(NodeRole::Hidden));
        assert!(ground.material.is_none());

        let rock = node(&graph, "Rock");
        assert!(rock.is_renderable);
        assert!(rock.material.is_none());
        assert!(!rock.frustum_culled);

        // The root group has no mesh and is never classified.
        assert!(node(&graph, "Scene").role.is_none());
    }

    #[test]
    fn test_round_robin_categories() {
        let mut graph = graph();
        let mut materials = cache();
        ClassificationLane::default()
            .classify(&mut graph, Progress::ZERO, &mut materials)
            .unwrap();

        let names = [
            "Crystal_Shard_01",
            "Crystal_Shard_02",
            "Crystal_Shard_03",
            "Crystal_Shard_04",
        ];
        let roles: Vec<_> = names.iter().map(|n| node(&graph, n).role).collect();
        assert_eq!(
            roles,
            vec![
                Some(NodeRole::Tintable(0)),
                Some(NodeRole::Tintable(1)),
                Some(NodeRole::Tintable(2)),
                Some(NodeRole::Tintable(0)),
            ]
        );

        let first = node(&graph, "Crystal_Shard_01").material.clone().unwrap();
        let fourth = node(&graph, "Crystal_Shard_04").material.clone().unwrap();
        assert!(AssetHandle::ptr_eq(&first, &fourth));
        assert_eq!(materials.constructed(), 3);
        assert!(node(&graph, "Crystal_Shard_02").frustum_culled);
    }

    #[test]
    fn test_repeated_pass_is_idempotent() {
        let mut graph = graph();
        let mut materials = cache();
        let lane = ClassificationLane::new(ClassificationConfig {
            outlines: true,
            ..Default::default()
        });

        let first = lane.classify(&mut graph, Progress::new(0.5), &mut materials).unwrap();
        let before: Vec<_> = graph
            .iter()
            .map(|(_, n)| (n.role, n.is_renderable, n.material.clone()))
            .collect();

        let second = lane.classify(&mut graph, Progress::new(0.5), &mut materials).unwrap();
        let after: Vec<_> = graph
            .iter()
            .map(|(_, n)| (n.role, n.is_renderable, n.material.clone()))
            .collect();

        assert_eq!(first.outlines_added, 4);
        assert_eq!(second.outlines_added, 0);
        assert_eq!(materials.constructed(), 3);
        for ((role_a, vis_a, mat_a), (role_b, vis_b, mat_b)) in before.iter().zip(after.iter()) {
            assert_eq!(role_a, role_b);
            assert_eq!(vis_a, vis_b);
            match (mat_a, mat_b) {
                (Some(a), Some(b)) => assert!(AssetHandle::ptr_eq(a, b)),
                (None, None) => {}
                _ => panic!("material presence changed between passes"),
            }
        }
    }

    #[test]
    fn test_outline_shape() {
        let mut graph = graph();
        let mut materials = cache();
        let lane = ClassificationLane::new(ClassificationConfig {
            outlines: true,
            ..Default::default()
        });
        lane.classify(&mut graph, Progress::ZERO, &mut materials).unwrap();

        let outline = node(&graph, "Crystal_Shard_01").outline.clone().unwrap();
        assert!((outline.scale - 1.07).abs() < 0.001);
        assert_eq!(outline.render_order, -1);
        assert!(node(&graph, "Rock").outline.is_none());
        assert!(node(&graph, "Ground_01").outline.is_none());
    }

    #[test]
    fn test_bucket_change_swaps_materials() {
        let mut graph = graph();
        let mut materials = cache();
        let lane = ClassificationLane::default();

        lane.classify(&mut graph, Progress::new(0.1), &mut materials).unwrap();
        let low = node(&graph, "Crystal_Shard_01").material.clone().unwrap();

        lane.classify(&mut graph, Progress::new(0.9), &mut materials).unwrap();
        let high = node(&graph, "Crystal_Shard_01").material.clone().unwrap();

        assert!(!AssetHandle::ptr_eq(&low, &high));
        assert_eq!(materials.constructed(), 6);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut graph = SceneGraph::new();
        let mut materials = cache();
        let report = ClassificationLane::default()
            .classify(&mut graph, Progress::ONE, &mut materials)
            .unwrap();
        assert_eq!(report.tinted + report.hidden + report.passthrough, 0);
        assert!(materials.is_empty());
    }
}
