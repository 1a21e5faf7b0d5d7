// Host-side tests for the undulating grid wireframe.

use glam::Vec2;
use wireframe_core::constants::*;
use wireframe_core::grid::depth_at;
use wireframe_core::{
    grid_dimensions, AnimatorConfig, Clock, DrawCmd, DrawList, GridField, PointerState, SizeClass,
    Variant, Viewport, Wireframe,
};

fn grid(viewport: Viewport) -> GridField {
    GridField::new(&AnimatorConfig::with_variant(Variant::Grid), viewport)
}

#[test]
fn desktop_grid_covers_the_surface_with_padding() {
    let g = grid(Viewport::new(1024.0, 768.0));
    assert_eq!(g.cell_size(), 55.0);
    assert_eq!((g.cols(), g.rows()), (22, 17));
    assert_eq!(g.point_count(), 22 * 17);
    assert_eq!(grid_dimensions(Viewport::new(1024.0, 768.0), 55.0), (22, 17));
}

#[test]
fn cell_size_follows_breakpoints() {
    assert_eq!(SizeClass::from_width(320.0), SizeClass::Mobile);
    assert_eq!(SizeClass::from_width(639.9), SizeClass::Mobile);
    assert_eq!(SizeClass::from_width(640.0), SizeClass::Tablet);
    assert_eq!(SizeClass::from_width(1023.0), SizeClass::Tablet);
    assert_eq!(SizeClass::from_width(1024.0), SizeClass::Desktop);

    assert_eq!(grid(Viewport::new(375.0, 667.0)).cell_size(), CELL_SIZE_MOBILE);
    assert_eq!(grid(Viewport::new(800.0, 600.0)).cell_size(), CELL_SIZE_TABLET);
    assert_eq!(grid(Viewport::new(1920.0, 1080.0)).cell_size(), CELL_SIZE_DESKTOP);
}

#[test]
fn explicit_cell_size_wins() {
    let config = AnimatorConfig {
        cell_size: Some(100.0),
        ..AnimatorConfig::with_variant(Variant::Grid)
    };
    let g = GridField::new(&config, Viewport::new(375.0, 667.0));
    assert_eq!(g.cell_size(), 100.0);
    assert_eq!((g.cols(), g.rows()), (4 + 3, 7 + 3));
}

#[test]
fn resize_round_trip_is_idempotent() {
    let a = Viewport::new(1024.0, 768.0);
    let b = Viewport::new(500.0, 900.0);
    let mut g = grid(a);
    let before = (g.cols(), g.rows(), g.cell_size());
    g.resize(b);
    assert_ne!((g.cols(), g.rows(), g.cell_size()), before);
    g.resize(a);
    assert_eq!((g.cols(), g.rows(), g.cell_size()), before);
}

#[test]
fn grid_starts_one_cell_outside_the_surface() {
    let g = grid(Viewport::new(1024.0, 768.0));
    assert_eq!(g.planar(0, 0), Vec2::new(-55.0, -55.0));
    assert_eq!(g.planar(1, 1), Vec2::ZERO);
    let last = g.planar(g.rows() - 1, g.cols() - 1);
    assert!(last.x >= 1024.0 && last.y >= 768.0);
}

#[test]
fn depth_is_three_waves_plus_a_bump() {
    let idle = PointerState::default();
    assert_eq!(depth_at(Vec2::ZERO, 0.0, &idle), 0.0);

    let max_wave: f32 = GRID_WAVES.iter().map(|w| w[2]).sum();
    for t in [0.0, 0.5, 3.0, 100.0] {
        for p in [Vec2::new(10.0, 20.0), Vec2::new(400.0, -30.0)] {
            assert!(depth_at(p, t, &idle).abs() <= max_wave + 1e-3);
        }
    }

    let mut pointer = PointerState::default();
    pointer.moved(0.0, 0.0);
    assert!((depth_at(Vec2::ZERO, 0.0, &pointer) - GRID_BUMP_HEIGHT).abs() < 1e-4);
    let outside = Vec2::new(GRID_BUMP_RADIUS, 0.0);
    assert_eq!(depth_at(outside, 0.0, &pointer), depth_at(outside, 0.0, &idle));
}

#[test]
fn render_draws_every_right_and_down_neighbour() {
    let viewport = Viewport::new(1024.0, 768.0);
    let mut g = grid(viewport);
    let mut out = DrawList::new();
    g.render(&Clock::default(), &PointerState::default(), viewport, &mut out);

    let (cols, rows) = (g.cols() as usize, g.rows() as usize);
    let lines = out.iter().filter(|c| matches!(c, DrawCmd::Line { .. })).count();
    assert_eq!(lines, rows * (cols - 1) + cols * (rows - 1));
    // vertices only show up near the pointer
    assert_eq!(lines, out.len());
    assert_eq!(g.projected().len(), g.point_count());
}

#[test]
fn pointer_reveals_nearby_vertices() {
    let viewport = Viewport::new(1024.0, 768.0);
    let mut g = grid(viewport);
    let mut pointer = PointerState::default();
    pointer.moved(512.0, 384.0);
    let mut out = DrawList::new();
    g.render(&Clock::default(), &pointer, viewport, &mut out);

    let dots: Vec<Vec2> = out
        .iter()
        .filter_map(|c| match *c {
            DrawCmd::Dot { center, .. } => Some(center),
            _ => None,
        })
        .collect();
    assert!(!dots.is_empty());
    for d in &dots {
        assert!(d.distance(Vec2::new(512.0, 384.0)) < GRID_VERTEX_RADIUS);
    }
}

#[test]
fn scale_stays_finite_and_positive() {
    let viewport = Viewport::new(1024.0, 768.0);
    let mut g = grid(viewport);
    let mut out = DrawList::new();

    let mut pointers = vec![PointerState::default()];
    for (x, y) in [(512.0, 384.0), (0.0, 0.0), (1023.0, 767.0), (300.0, 700.0)] {
        let mut pointer = PointerState::default();
        pointer.moved(x, y);
        pointers.push(pointer);
    }

    let max_depth: f32 = GRID_WAVES.iter().map(|w| w[2]).sum::<f32>() + GRID_BUMP_HEIGHT;
    // the slowest wave has temporal frequency 0.8, so cover 2π / 0.8
    let steps = 160;
    for step in 0..=steps {
        let clock = Clock {
            time: step as f32 * 0.05,
            ..Clock::default()
        };
        for pointer in &pointers {
            out.clear();
            g.render(&clock, pointer, viewport, &mut out);
            for p in g.projected() {
                assert!(p.scale.is_finite() && p.scale > 0.0, "t = {}", clock.time);
                assert!(FOCAL_LENGTH + p.depth >= NEAR_PLANE_MARGIN - 1e-3);
                assert!(p.depth.abs() <= max_depth + 1e-3);
            }
        }
    }
}

#[test]
fn undersized_cells_are_clamped() {
    let config = AnimatorConfig {
        cell_size: Some(0.001),
        ..AnimatorConfig::with_variant(Variant::Grid)
    };
    let g = GridField::new(&config, Viewport::new(1920.0, 1080.0));
    assert_eq!(g.cell_size(), MIN_CELL_SIZE);
    assert_eq!((g.cols(), g.rows()), (240 + 3, 135 + 3));
}
