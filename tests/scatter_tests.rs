// Host-side tests for the scattered node wireframe.

use glam::{Vec2, Vec3};
use wireframe_core::constants::*;
use wireframe_core::{
    link_nodes, AnimatorConfig, PointerState, Projector, ScatterField, Viewport, Wireframe,
};

fn seeded(seed: u64, viewport: Viewport) -> ScatterField {
    let config = AnimatorConfig {
        seed: Some(seed),
        ..AnimatorConfig::default()
    };
    ScatterField::new(&config, viewport)
}

#[test]
fn nodes_fill_the_viewport_and_depth_range() {
    let viewport = Viewport::new(1000.0, 800.0);
    let field = seeded(1, viewport);
    assert_eq!(field.nodes().len(), SCATTER_NODE_COUNT);
    for n in field.nodes() {
        assert!(n.x >= 0.0 && n.x < 1000.0);
        assert!(n.y >= 0.0 && n.y < 800.0);
        assert!(n.z >= -SCATTER_Z_RANGE && n.z < SCATTER_Z_RANGE);
    }
}

#[test]
fn same_seed_same_layout() {
    let viewport = Viewport::new(1000.0, 800.0);
    let a = seeded(42, viewport);
    let b = seeded(42, viewport);
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
    let c = seeded(43, viewport);
    assert_ne!(a.nodes(), c.nodes());
}

#[test]
fn edges_are_exactly_the_close_pairs() {
    let field = seeded(7, Viewport::new(1000.0, 800.0));
    let nodes = field.nodes();
    for e in field.edges() {
        assert!(e.a < e.b, "edges are stored low/high without self loops");
        assert!(nodes[e.a].distance(nodes[e.b]) < SCATTER_LINK_DISTANCE);
    }
    let close_pairs = (0..nodes.len())
        .flat_map(|i| ((i + 1)..nodes.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| nodes[i].distance(nodes[j]) < SCATTER_LINK_DISTANCE)
        .count();
    assert_eq!(field.edges().len(), close_pairs);
}

#[test]
fn link_distance_is_strict() {
    let nodes = [
        Vec3::ZERO,
        Vec3::new(200.0, 0.0, 0.0),
        Vec3::new(0.0, 199.0, 0.0),
    ];
    let edges = link_nodes(&nodes, 200.0);
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].a, edges[0].b), (0, 2));
}

#[test]
fn draw_order_runs_back_to_front() {
    let viewport = Viewport::new(1000.0, 800.0);
    let mut field = seeded(3, viewport);
    let projector = Projector::new(viewport);
    let mut pointer = PointerState::default();
    pointer.moved(500.0, 400.0);
    for step in 0..5 {
        field.project_all(step as f32 * 0.37, &pointer, &projector);
        let p = field.projected();
        let depths: Vec<f32> = field.node_draw_order().iter().map(|&i| p[i].depth).collect();
        assert!(depths.windows(2).all(|w| w[0] >= w[1]), "{:?}", depths);

        let edges = field.edges();
        let means: Vec<f32> = field
            .edge_draw_order()
            .iter()
            .map(|&k| (p[edges[k].a].depth + p[edges[k].b].depth) * 0.5)
            .collect();
        assert!(means.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(means.len(), edges.len());
    }
}

#[test]
fn scale_stays_finite_and_positive() {
    let viewport = Viewport::new(1000.0, 800.0);
    let mut field = seeded(11, viewport);
    let projector = Projector::new(viewport);

    let mut pointers = vec![PointerState::default()];
    for node in field.nodes().iter().step_by(5) {
        let mut pointer = PointerState::default();
        pointer.moved(node.x, node.y);
        pointers.push(pointer);
    }

    // one full wave period
    let steps = 126;
    for step in 0..=steps {
        let time = step as f32 * std::f32::consts::TAU / steps as f32;
        for pointer in &pointers {
            field.project_all(time, pointer, &projector);
            for p in field.projected() {
                assert!(p.scale.is_finite() && p.scale > 0.0, "t = {}", time);
                assert!(FOCAL_LENGTH + p.depth >= NEAR_PLANE_MARGIN - 1e-3);
                assert!(p.position.is_finite());
            }
        }
    }
}

#[test]
fn pointer_pulls_nearby_nodes_forward() {
    let viewport = Viewport::new(1000.0, 800.0);
    let projector = Projector::new(viewport);
    let node = Vec3::new(500.0, 400.0, 0.0);
    let idle = PointerState::default();
    let wave_only = ScatterField::depth_offset(node, 0.0, &idle, &projector);
    assert_eq!(wave_only, 0.0);

    let mut pointer = PointerState::default();
    pointer.moved(500.0, 400.0);
    let pulled = ScatterField::depth_offset(node, 0.0, &pointer, &projector);
    assert!((pulled + SCATTER_PULL_DEPTH).abs() < 1e-3);

    pointer.moved(500.0 + SCATTER_PULL_RADIUS + 1.0, 400.0);
    let far = ScatterField::depth_offset(node, 0.0, &pointer, &projector);
    assert_eq!(far, wave_only);
}

#[test]
fn pointer_leave_drops_the_pull_on_the_next_frame() {
    let viewport = Viewport::new(1000.0, 800.0);
    let projector = Projector::new(viewport);
    let mut with_leave = seeded(5, viewport);
    let mut never = seeded(5, viewport);

    let mut pointer = PointerState::default();
    pointer.moved(400.0, 300.0);
    with_leave.project_all(0.5, &pointer, &projector);
    pointer.left();
    with_leave.project_all(0.51, &pointer, &projector);

    never.project_all(0.51, &PointerState::default(), &projector);
    assert_eq!(with_leave.projected(), never.projected());
}

#[test]
fn resize_regenerates_for_the_new_size() {
    let mut field = seeded(9, Viewport::new(1000.0, 800.0));
    field.resize(Viewport::new(300.0, 200.0));
    assert_eq!(field.nodes().len(), SCATTER_NODE_COUNT);
    assert!(field.nodes().iter().all(|n| n.x < 300.0 && n.y < 200.0));
    assert!(field.projected().is_empty());
}

#[test]
fn hovered_nodes_get_a_ring() {
    use wireframe_core::{Clock, DrawCmd, DrawList};

    // every node projects within a few pixels of the centre of a tiny surface
    let viewport = Viewport::new(2.0, 2.0);
    let mut field = seeded(2, viewport);
    let mut out = DrawList::new();
    let clock = Clock::default();
    field.render(&clock, &PointerState::default(), viewport, &mut out);
    let count = |out: &DrawList, ring: bool| {
        out.iter()
            .filter(|c| match c {
                DrawCmd::Ring { .. } => ring,
                DrawCmd::Dot { .. } => !ring,
                DrawCmd::Line { .. } => false,
            })
            .count()
    };
    assert_eq!(count(&out, true), 0);
    assert_eq!(count(&out, false), SCATTER_NODE_COUNT);

    let mut pointer = PointerState::default();
    let center: Vec2 = viewport.center();
    pointer.moved(center.x, center.y);
    out.clear();
    field.render(&clock, &pointer, viewport, &mut out);
    assert_eq!(count(&out, true), SCATTER_NODE_COUNT);
    assert_eq!(count(&out, false), SCATTER_NODE_COUNT);

    // each ring comes right before the dot it surrounds
    let cmds = out.as_slice();
    for (k, c) in cmds.iter().enumerate() {
        if let DrawCmd::Ring { center, .. } = *c {
            assert!(matches!(cmds[k + 1], DrawCmd::Dot { center: dot, .. } if dot == center));
        }
    }
}
