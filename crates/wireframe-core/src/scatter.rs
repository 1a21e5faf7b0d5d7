use crate::animator::{Clock, Wireframe};
use crate::config::AnimatorConfig;
use crate::constants::*;
use crate::draw::{DrawList, Rgba};
use crate::mesh::Edge;
use crate::pointer::PointerState;
use crate::projection::{depth_factor, Projector, ScreenPoint};
use crate::viewport::Viewport;
use glam::Vec3;
use rand::prelude::*;

/// Randomly placed nodes joined to every neighbour closer than the link
/// distance. Node positions and edges are fixed until the next resize; only a
/// per-frame depth offset moves them.
pub struct ScatterField {
    nodes: Vec<Vec3>,
    edges: Vec<Edge>,
    node_count: usize,
    link_distance: f32,
    color: Rgba,
    rng: StdRng,
    projected: Vec<ScreenPoint>,
    node_order: Vec<usize>,
    edge_order: Vec<usize>,
}

impl ScatterField {
    pub fn new(config: &AnimatorConfig, viewport: Viewport) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut field = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_count: config.node_count,
            link_distance: config.link_distance,
            color: config.color,
            rng,
            projected: Vec::new(),
            node_order: Vec::new(),
            edge_order: Vec::new(),
        };
        field.generate(viewport);
        field
    }

    /// Replace the node set with a fresh sample over `viewport`.
    pub fn generate(&mut self, viewport: Viewport) {
        self.nodes = sample_nodes(&mut self.rng, self.node_count, viewport);
        self.edges = link_nodes(&self.nodes, self.link_distance);
        self.projected.clear();
        self.node_order.clear();
        self.edge_order.clear();
        log::debug!(
            "[scatter] {} nodes, {} edges over {}x{}",
            self.nodes.len(),
            self.edges.len(),
            viewport.width,
            viewport.height
        );
    }

    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Projections from the last `project_all`, index-aligned with `nodes()`.
    pub fn projected(&self) -> &[ScreenPoint] {
        &self.projected
    }

    /// Node indices in paint order (farthest first) from the last frame.
    pub fn node_draw_order(&self) -> &[usize] {
        &self.node_order
    }

    /// Edge indices in paint order (farthest first) from the last frame.
    pub fn edge_draw_order(&self) -> &[usize] {
        &self.edge_order
    }

    /// Depth offset for `node` at `time`: a slow wave, minus a pull towards
    /// the viewer when the pointer is near the node's wave-only projection.
    pub fn depth_offset(
        node: Vec3,
        time: f32,
        pointer: &PointerState,
        projector: &Projector,
    ) -> f32 {
        let wave = (time + node.z * SCATTER_WAVE_FREQ).sin() * SCATTER_WAVE_AMPLITUDE;
        let anchor = projector.project(Vec3::new(node.x, node.y, node.z + wave));
        let pull = pointer.influence(anchor.position, SCATTER_PULL_RADIUS) * SCATTER_PULL_DEPTH;
        wave - pull
    }

    /// Project every node for `time` and rebuild both paint orders.
    pub fn project_all(&mut self, time: f32, pointer: &PointerState, projector: &Projector) {
        self.projected.clear();
        self.projected.extend(self.nodes.iter().map(|&node| {
            let offset = Self::depth_offset(node, time, pointer, projector);
            projector.project(Vec3::new(node.x, node.y, node.z + offset))
        }));

        // sort_by is stable, so equal depths keep index order
        let projected = &self.projected;
        self.node_order.clear();
        self.node_order.extend(0..projected.len());
        self.node_order
            .sort_by(|&i, &j| projected[j].depth.total_cmp(&projected[i].depth));

        let edges = &self.edges;
        let mean = |e: &Edge| (projected[e.a].depth + projected[e.b].depth) * 0.5;
        self.edge_order.clear();
        self.edge_order.extend(0..edges.len());
        self.edge_order
            .sort_by(|&i, &j| mean(&edges[j]).total_cmp(&mean(&edges[i])));
    }

    fn draw_edges(&self, pointer: &PointerState, out: &mut DrawList) {
        for &k in &self.edge_order {
            let edge = self.edges[k];
            let (a, b) = (self.projected[edge.a], self.projected[edge.b]);
            let mut opacity = depth_factor(a.depth - b.depth, SCATTER_EDGE_FADE);
            let mid = (a.position + b.position) * 0.5;
            let hover = pointer.influence(mid, SCATTER_EDGE_HOVER_RADIUS);
            let width = if hover > 0.0 {
                opacity = (opacity + hover * SCATTER_EDGE_HOVER_BOOST).min(1.0);
                1.0 + hover * SCATTER_EDGE_HOVER_WIDTH
            } else {
                1.0
            };
            out.line(
                a.position,
                b.position,
                width,
                self.color.with_alpha(opacity * SCATTER_EDGE_ALPHA),
            );
        }
    }

    fn draw_nodes(&self, pointer: &PointerState, out: &mut DrawList) {
        for &i in &self.node_order {
            let p = self.projected[i].position;
            let glow = pointer.influence(p, SCATTER_GLOW_RADIUS);
            let size = SCATTER_NODE_SIZE + glow * SCATTER_GLOW_GROW;
            let opacity = SCATTER_NODE_ALPHA + glow * SCATTER_GLOW_ALPHA;
            let ring = pointer.influence(p, RING_RADIUS);
            if ring > 0.0 {
                out.ring(
                    p,
                    size + RING_GAP,
                    RING_WIDTH,
                    self.color.with_alpha(ring * RING_ALPHA),
                );
            }
            out.dot(p, size, self.color.with_alpha(opacity));
        }
    }
}

impl Wireframe for ScatterField {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn resize(&mut self, viewport: Viewport) {
        self.generate(viewport);
    }

    fn render(
        &mut self,
        clock: &Clock,
        pointer: &PointerState,
        viewport: Viewport,
        out: &mut DrawList,
    ) {
        let projector = Projector::new(viewport);
        self.project_all(clock.time, pointer, &projector);
        self.draw_edges(pointer, out);
        self.draw_nodes(pointer, out);
    }
}

/// `count` nodes uniformly over the viewport and the fixed depth range.
pub fn sample_nodes<R: Rng>(rng: &mut R, count: usize, viewport: Viewport) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
                rng.gen::<f32>() * 2.0 * SCATTER_Z_RANGE - SCATTER_Z_RANGE,
            )
        })
        .collect()
}

/// One edge per pair of nodes closer than `max_distance` in 3D. O(n²).
pub fn link_nodes(nodes: &[Vec3], max_distance: f32) -> Vec<Edge> {
    let max_sq = max_distance * max_distance;
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].distance_squared(nodes[j]) < max_sq {
                edges.extend(Edge::new(i, j));
            }
        }
    }
    edges
}
