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

use crate::asset::MaterialHandle;

/// Index of a node inside its [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Pure classification of a node name, independent of traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Ground, plane or floor geometry. Never drawn.
    Hidden,
    /// Geometry that receives a palette material.
    Tintable,
    /// Everything else. Left as authored.
    Passthrough,
}

/// Role cached on a node by the last classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The node was hidden.
    Hidden,
    /// The node was tinted with the given palette category.
    Tintable(usize),
    /// The node was left untouched.
    Passthrough,
}

impl NodeRole {
    /// Returns the kind this role was derived from.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRole::Hidden => NodeKind::Hidden,
            NodeRole::Tintable(_) => NodeKind::Tintable,
            NodeRole::Passthrough => NodeKind::Passthrough,
        }
    }
}

/// An inverted-hull outline attached to a tintable node.
#[derive(Debug, Clone)]
pub struct Outline {
    /// Material of the shell, normally black and back-face only.
    pub material: MaterialHandle,
    /// Uniform scale applied to the shell relative to its node.
    pub scale: f32,
    /// Draw order; negative values draw before the node itself.
    pub render_order: i32,
}

/// A single node of a loaded scene.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Authored name, used for classification.
    pub name: String,
    /// `true` if the node carries drawable geometry.
    pub has_mesh: bool,
    /// Visibility flag. Cleared for hidden nodes.
    pub is_renderable: bool,
    /// Role cached by the last classification pass.
    pub role: Option<NodeRole>,
    /// Material assigned by the classifier, if any.
    pub material: Option<MaterialHandle>,
    /// Outline shell, attached at most once.
    pub outline: Option<Outline>,
    /// Whether the renderer may cull this node against the view frustum.
    pub frustum_culled: bool,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Creates a visible node with no derived state.
    pub fn new(name: impl Into<String>, has_mesh: bool) -> Self {
        Self {
            name: name.into(),
            has_mesh,
            is_renderable: true,
            role: None,
            material: None,
            outline: None,
            frustum_culled: false,
            children: Vec::new(),
        }
    }

    /// Child nodes, in authored order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An arena-backed scene hierarchy.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level node.
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Adds `node` under `parent`. Returns `None` if `parent` does not exist.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Returns the node with the given id, mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    /// Top-level nodes, in authored order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Node ids in pre-order depth-first order, children in authored order.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    /// Finds the first node with exactly this name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.name == name).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SceneGraph {
        let mut graph = SceneGraph::new();
        let root = graph.add_root(SceneNode::new("Scene", false));
        let a = graph.add_child(root, SceneNode::new("A", true)).unwrap();
        graph.add_child(a, SceneNode::new("A1", true)).unwrap();
        graph.add_child(root, SceneNode::new("B", true)).unwrap();
        graph.add_root(SceneNode::new("C", true));
        graph
    }

    #[test]
    fn test_depth_first_is_pre_order() {
        let graph = sample();
        let names: Vec<_> = graph
            .depth_first()
            .into_iter()
            .map(|id| graph.node(id).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["Scene", "A", "A1", "B", "C"]);
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let mut graph = SceneGraph::new();
        assert!(graph.add_child(NodeId(3), SceneNode::new("X", true)).is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_new_node_is_visible_and_unclassified() {
        let node = SceneNode::new("Crystal", true);
        assert!(node.is_renderable);
        assert!(node.role.is_none());
        assert!(node.material.is_none());
        assert!(node.outline.is_none());
        assert!(!node.frustum_culled);
    }

    #[test]
    fn test_find_by_name() {
        let graph = sample();
        assert_eq!(graph.find("B"), Some(NodeId(3)));
        assert_eq!(graph.find("missing"), None);
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn test_role_kind() {
        assert_eq!(NodeRole::Tintable(4).kind(), NodeKind::Tintable);
        assert_eq!(NodeRole::Hidden.kind(), NodeKind::Hidden);
    }
}
