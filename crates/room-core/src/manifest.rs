//! Room scene graph as delivered by the asset server.
//!
//! The manifest is a JSON tree of named nodes with world-space bounds. The
//! core only needs names (for tags and references) and bounds (for picking and
//! drawing); everything else about the meshes stays with the renderer.

use crate::error::ManifestError;
use crate::pick::{Aabb, PickTag, Pickable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const WALL_NODE: &str = "Wall";
pub const BOOK_NODE: &str = "Book";
pub const SWITCH_BOARD_NODE: &str = "SwitchBoard";
/// Case fans are named `Fan`, `Fan001`, `Fan002`, ...
pub const FAN_NODE_PREFIX: &str = "Fan";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneManifest {
    pub nodes: Vec<NodeDesc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NodeDesc {
    pub name: String,
    pub min: [f32; 3],
    pub max: [f32; 3],
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    #[serde(default)]
    pub children: Vec<NodeDesc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Solid,
    /// Samples the animated particle texture.
    ParticleWall,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<String>,
    pub bounds: Aabb,
    pub color: Vec3,
    pub surface: Surface,
    /// Decorative nodes never take part in picking.
    pub decorative: bool,
}

impl SceneNode {
    /// Case fans spin continuously about their own Z axis.
    pub fn is_fan(&self) -> bool {
        !self.decorative && self.name.starts_with(FAN_NODE_PREFIX)
    }
}

/// Flattened scene graph with parent links kept by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

const DEFAULT_NODE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

impl SceneGraph {
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let manifest: SceneManifest = serde_json::from_str(text)?;
        Self::from_manifest(&manifest)
    }

    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self, ManifestError> {
        if manifest.nodes.is_empty() {
            return Err(ManifestError::Empty);
        }
        let mut graph = SceneGraph::default();
        for node in &manifest.nodes {
            graph.flatten(node, None)?;
        }
        Ok(graph)
    }

    fn flatten(&mut self, desc: &NodeDesc, parent: Option<&str>) -> Result<(), ManifestError> {
        let min = Vec3::from(desc.min);
        let max = Vec3::from(desc.max);
        if min.cmpgt(max).any() {
            return Err(ManifestError::InvertedBounds(desc.name.clone()));
        }
        self.nodes.push(SceneNode {
            name: desc.name.clone(),
            parent: parent.map(str::to_string),
            bounds: Aabb { min, max },
            color: Vec3::from(desc.color.unwrap_or(DEFAULT_NODE_COLOR)),
            surface: if desc.name == WALL_NODE {
                Surface::ParticleWall
            } else {
                Surface::Solid
            },
            decorative: false,
        });
        for child in &desc.children {
            self.flatten(child, Some(&desc.name))?;
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// First child of `parent`, in manifest order.
    pub fn first_child(&self, parent: &str) -> Option<&SceneNode> {
        self.nodes
            .iter()
            .find(|n| n.parent.as_deref() == Some(parent))
    }

    pub fn book_cover(&self) -> Option<&SceneNode> {
        self.first_child(BOOK_NODE)
    }

    pub fn light_switch(&self) -> Option<&SceneNode> {
        self.first_child(SWITCH_BOARD_NODE)
    }

    pub fn fans(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(|n| n.is_fan())
    }

    /// Uniformly scale every node about the origin.
    pub fn scale(&mut self, factor: f32) {
        if (factor - 1.0).abs() <= f32::EPSILON {
            return;
        }
        for n in &mut self.nodes {
            n.bounds = n.bounds.scaled(factor);
        }
    }

    /// Add a decorative model placed at `offset` with uniform `scale`.
    pub fn merge_decor(&mut self, other: SceneGraph, offset: Vec3, scale: f32) {
        for mut n in other.nodes {
            n.bounds = Aabb::new(n.bounds.min * scale + offset, n.bounds.max * scale + offset);
            n.decorative = true;
            self.nodes.push(n);
        }
    }

    pub fn pickables(&self) -> Vec<Pickable> {
        self.nodes
            .iter()
            .filter(|n| !n.decorative)
            .filter_map(|n| {
                PickTag::from_node_name(&n.name).map(|tag| Pickable {
                    tag,
                    bounds: n.bounds,
                })
            })
            .collect()
    }
}
