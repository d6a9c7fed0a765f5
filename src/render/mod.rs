//! Sunburst rendering engine.
//!
//! The engine owns the scale, color, and layout state and draws into a
//! [`Scene`] — plain data describing every arc, breadcrumb, and the stats
//! panel. The embedding host (the bundled HTML client, a GUI shell, a test)
//! applies scenes to its actual surface and drives animations by sampling
//! the returned transitions; the engine itself never touches a display and
//! never blocks.

pub mod breadcrumbs;
pub mod color;
pub mod geometry;
pub mod stats;
pub mod transition;

use crate::layout::{PartNode, Partition};
use crate::render::breadcrumbs::{breadcrumb, Breadcrumb};
use crate::render::color::ColorScale;
use crate::render::geometry::{compute_arc, LinearScale, SqrtScale, TAU};
use crate::render::stats::{stats_for, StatsPanel};
use crate::render::transition::{OpacityFade, ScaleState, ScaleTween, FADE_MS, ZOOM_MS};
use crate::tree::node::TreeNode;
use std::collections::HashSet;

/// Opacity of arcs outside the current highlight set.
pub const DIMMED_OPACITY: f64 = 0.3;
pub const FULL_OPACITY: f64 = 1.0;

/// Inner radius left open at the center after zooming into a non-root node.
pub const ZOOM_INNER_RADIUS: f64 = 20.0;

/// Fixed minimum visualization size, in pixels.
pub const MIN_SIZE: f64 = 960.0;

/// Mount point and viewport, supplied by the embedding page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub selector: String,
    pub width: f64,
    pub height: f64,
}

/// Drawing viewport derived from the window dimensions at load time only;
/// later resizes redraw at this original size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn from_window(window_height: f64, occupied_height: f64) -> Self {
        Viewport {
            width: MIN_SIZE,
            height: (window_height - occupied_height).min(MIN_SIZE),
        }
    }
}

/// One arc in the scene. The normalized layout extents are retained so
/// transitions can re-evaluate the path from tweened scales.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcElement {
    /// Index of the backing node in the current partition.
    pub node: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub path: String,
    pub fill: String,
    /// Hover tooltip: `"<name>\n<aggregated size>"`.
    pub title: String,
    pub opacity: f64,
}

/// Everything currently drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub arcs: Vec<ArcElement>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub stats: Option<StatsPanel>,
}

/// The stateful drawing shell around the pure layout and geometry math.
#[derive(Debug, Clone)]
pub struct Sunburst {
    options: RenderOptions,
    radius: f64,
    scale_x: LinearScale,
    scale_y: SqrtScale,
    color: ColorScale,
    partition: Partition,
    total_size: u64,
    scene: Scene,
}

impl Sunburst {
    pub fn new(options: RenderOptions) -> Self {
        let radius = options.width.min(options.height) / 2.0;
        Sunburst {
            options,
            radius,
            scale_x: LinearScale::new((0.0, 1.0), (0.0, TAU)),
            scale_y: SqrtScale::new((0.0, 1.0), (0.0, radius)),
            color: ColorScale::new(),
            partition: Partition::default(),
            total_size: 0,
            scene: Scene::default(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Total aggregated byte size of the last visualized tree.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Clear any prior rendering, rebuild the layout, and draw one arc per
    /// node. The color of an arc is keyed by its own name when it has
    /// children, else by its parent's name, so siblings in one directory
    /// share a color family.
    pub fn visualize(&mut self, tree: &TreeNode) {
        self.scene = Scene::default();
        self.partition = Partition::build(tree);
        self.total_size = self.partition.root().map(|r| r.value).unwrap_or(0);

        for idx in 0..self.partition.len() {
            let key = self.fill_key(idx);
            let fill = self.color.color(&key).to_string();
            let node = &self.partition.nodes[idx];
            let shape = compute_arc(
                (node.x0, node.x1),
                (node.y0, node.y1),
                &self.scale_x,
                &self.scale_y,
            );
            self.scene.arcs.push(ArcElement {
                node: idx,
                x0: node.x0,
                x1: node.x1,
                y0: node.y0,
                y1: node.y1,
                path: shape.path(),
                fill,
                title: format!("{}\n{}", node.name, node.value),
                opacity: FULL_OPACITY,
            });
        }
    }

    /// Start a zoom onto `idx`: the node's span becomes the full angular
    /// range and the radial domain re-anchors at its band. The caller steps
    /// the returned tween and feeds samples back via
    /// [`apply_scale_state`](Self::apply_scale_state).
    pub fn zoom_to_node(&mut self, idx: usize) -> ScaleTween {
        let node = &self.partition.nodes[idx];
        let from = ScaleState {
            x_domain: self.scale_x.domain,
            y_domain: self.scale_y.domain,
            y_range: self.scale_y.range,
        };
        let to = ScaleState {
            x_domain: (node.x0, node.x1),
            y_domain: (node.y0, 1.0),
            y_range: (
                if node.y0 > 0.0 { ZOOM_INNER_RADIUS } else { 0.0 },
                self.radius,
            ),
        };
        ScaleTween::new(from, to, ZOOM_MS)
    }

    /// Apply one sampled tween state and re-evaluate every arc path.
    pub fn apply_scale_state(&mut self, state: ScaleState) {
        self.scale_x.domain = state.x_domain;
        self.scale_y.domain = state.y_domain;
        self.scale_y.range = state.y_range;
        self.refresh_arcs();
    }

    /// Dim every arc, then restore the ones matching `predicate`. Full
    /// re-evaluation on each call, never incremental.
    pub fn highlight_nodes(&mut self, predicate: impl Fn(&PartNode) -> bool) {
        let matched: Vec<bool> = self
            .scene
            .arcs
            .iter()
            .map(|arc| predicate(&self.partition.nodes[arc.node]))
            .collect();
        for (arc, hit) in self.scene.arcs.iter_mut().zip(matched) {
            arc.opacity = if hit { FULL_OPACITY } else { DIMMED_OPACITY };
        }
    }

    /// Mouse-over entry point: highlight the chain from the root down to
    /// `idx`, and point the breadcrumbs and stats panel at it.
    pub fn highlight_ancestor_path(&mut self, idx: usize) {
        let mut chain = self.partition.ancestors(idx);
        chain.push(idx);
        self.update_breadcrumbs(&chain);
        self.update_stats(idx);
        let members: HashSet<usize> = chain.into_iter().collect();
        let matched: Vec<bool> = self
            .scene
            .arcs
            .iter()
            .map(|arc| members.contains(&arc.node))
            .collect();
        for (arc, hit) in self.scene.arcs.iter_mut().zip(matched) {
            arc.opacity = if hit { FULL_OPACITY } else { DIMMED_OPACITY };
        }
    }

    /// Pointer-leave entry point: fade every arc back to full opacity. The
    /// caller steps the returned fade and feeds samples back via
    /// [`apply_opacities`](Self::apply_opacities).
    pub fn reset_highlights(&mut self) -> OpacityFade {
        OpacityFade::new(
            self.scene.arcs.iter().map(|arc| arc.opacity).collect(),
            FADE_MS,
        )
    }

    pub fn apply_opacities(&mut self, opacities: &[f64]) {
        for (arc, opacity) in self.scene.arcs.iter_mut().zip(opacities) {
            arc.opacity = *opacity;
        }
    }

    /// Rebuild the breadcrumb trail for the given node chain; an empty
    /// chain clears it.
    pub fn update_breadcrumbs(&mut self, chain: &[usize]) {
        let mut crumbs = Vec::with_capacity(chain.len());
        for (i, &idx) in chain.iter().enumerate() {
            let key = self.fill_key(idx);
            let fill = self.color.color(&key).to_string();
            let node = &self.partition.nodes[idx];
            crumbs.push(breadcrumb(&node.name, node.depth, i, &fill));
        }
        self.scene.breadcrumbs = crumbs;
    }

    pub fn update_stats(&mut self, idx: usize) {
        self.scene.stats = Some(stats_for(&self.partition.nodes[idx]));
    }

    pub fn hide_stats(&mut self) {
        self.scene.stats = None;
    }

    fn refresh_arcs(&mut self) {
        for arc in &mut self.scene.arcs {
            let shape = compute_arc(
                (arc.x0, arc.x1),
                (arc.y0, arc.y1),
                &self.scale_x,
                &self.scale_y,
            );
            arc.path = shape.path();
        }
    }

    /// Color key for a node: its own name when it has children, else its
    /// parent's name.
    fn fill_key(&self, idx: usize) -> String {
        let node = &self.partition.nodes[idx];
        if node.children.is_empty() {
            if let Some(parent) = node.parent {
                return self.partition.nodes[parent].name.clone();
            }
        }
        node.name.clone()
    }
}
