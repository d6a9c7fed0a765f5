//! Radial partition layout.
//!
//! Flattens the tree into an index-based arena and assigns every node an
//! angular span (size-weighted subdivision of its parent's span) and a radial
//! band (equal-depth rings). Parent/child links are arena indices, so the
//! layout carries no cyclic references and is rebuilt from scratch on every
//! visualize call.

use crate::tree::node::{Table, TreeNode};

/// A laid-out node: normalized geometry plus the display data copied off the
/// tree node it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PartNode {
    pub name: String,
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,

    /// Angular extent, normalized to [0, 1] before scaling to radians.
    pub x0: f64,
    pub x1: f64,

    /// Radial extent, normalized to [0, 1] before scaling to pixels.
    pub y0: f64,
    pub y1: f64,

    /// Aggregated size: own size plus the sum of all descendant sizes.
    pub value: u64,

    pub size: Option<u64>,
    pub size_gzipped: Option<u64>,
    pub loc: Option<u64>,
    pub contents: Option<String>,
    pub table: Option<Table>,
}

impl PartNode {
    pub fn is_file(&self) -> bool {
        self.size.is_some()
    }
}

/// The partitioned tree. Index 0 is always the synthetic root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub nodes: Vec<PartNode>,
}

impl Partition {
    /// Compute the layout for `tree`.
    pub fn build(tree: &TreeNode) -> Self {
        let mut partition = Partition { nodes: Vec::new() };
        partition.copy_node(tree, None, 0);
        partition.aggregate(0);
        let levels = partition
            .nodes
            .iter()
            .map(|n| n.depth)
            .max()
            .unwrap_or(0) as f64
            + 1.0;
        partition.divide(0, 0.0, 1.0, levels);
        partition
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&PartNode> {
        self.nodes.first()
    }

    /// Strict ancestors of `idx`, root-first, excluding both the synthetic
    /// root and the node itself.
    pub fn ancestors(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = self.nodes[idx].parent;
        while let Some(parent) = current {
            if self.nodes[parent].parent.is_some() {
                chain.push(parent);
            }
            current = self.nodes[parent].parent;
        }
        chain.reverse();
        chain
    }

    fn copy_node(&mut self, node: &TreeNode, parent: Option<usize>, depth: usize) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(PartNode {
            name: node.name.clone(),
            depth,
            parent,
            children: Vec::new(),
            x0: 0.0,
            x1: 0.0,
            y0: 0.0,
            y1: 0.0,
            value: 0,
            size: node.size,
            size_gzipped: node.size_gzipped,
            loc: node.loc,
            contents: node.contents.clone(),
            table: node.table.clone(),
        });
        for child in &node.children {
            let child_idx = self.copy_node(child, Some(idx), depth + 1);
            self.nodes[idx].children.push(child_idx);
        }
        idx
    }

    /// Bottom-up value aggregation: own size plus all descendant sizes.
    fn aggregate(&mut self, idx: usize) -> u64 {
        let children = self.nodes[idx].children.clone();
        let mut value = self.nodes[idx].size.unwrap_or(0);
        for child in children {
            value += self.aggregate(child);
        }
        self.nodes[idx].value = value;
        value
    }

    /// Top-down subdivision: split `[x0, x1]` among children proportionally
    /// to their aggregated value, in child order. Zero-valued children get a
    /// zero-width span at the running cursor.
    fn divide(&mut self, idx: usize, x0: f64, x1: f64, levels: f64) {
        let depth = self.nodes[idx].depth as f64;
        self.nodes[idx].x0 = x0;
        self.nodes[idx].x1 = x1;
        self.nodes[idx].y0 = depth / levels;
        self.nodes[idx].y1 = (depth + 1.0) / levels;

        let children = self.nodes[idx].children.clone();
        let total = self.nodes[idx].value;
        let mut cursor = x0;
        for child in children {
            let span = if total == 0 {
                0.0
            } else {
                (x1 - x0) * self.nodes[child].value as f64 / total as f64
            };
            let child_x1 = cursor + span;
            self.divide(child, cursor, child_x1, levels);
            cursor = child_x1;
        }
    }
}
