// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use wireframe_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_constants_keep_the_divisor_positive() {
    assert!(FOCAL_LENGTH > 0.0);
    assert!(NEAR_PLANE_MARGIN > 0.0);
    assert!(NEAR_PLANE_MARGIN < FOCAL_LENGTH);
    assert!(CLIP_W_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_are_ordered() {
    assert!(TABLET_MIN_WIDTH < DESKTOP_MIN_WIDTH);
    assert!(CELL_SIZE_MOBILE < CELL_SIZE_TABLET);
    assert!(CELL_SIZE_TABLET < CELL_SIZE_DESKTOP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_are_fractions() {
    for a in [
        SCATTER_EDGE_ALPHA,
        SCATTER_NODE_ALPHA,
        SCATTER_NODE_ALPHA + SCATTER_GLOW_ALPHA,
        RING_ALPHA,
        GRID_EDGE_ALPHA,
        GRID_VERTEX_ALPHA,
        FLOATING_LAYER_ALPHA,
        FLOOR_ALPHA_BASE + FLOOR_ALPHA_SWING,
    ] {
        assert!(a > 0.0 && a <= 1.0, "alpha {} out of range", a);
    }
    assert!(FLOOR_ALPHA_BASE - FLOOR_ALPHA_SWING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_rings_sit_inside_the_glow() {
    assert!(RING_RADIUS <= SCATTER_GLOW_RADIUS);
    assert!(RING_RADIUS <= GRID_VERTEX_RADIUS);
    assert!(GRID_VERTEX_RADIUS <= GRID_BUMP_RADIUS);
}

#[test]
fn attribute_names_are_data_attributes() {
    for attr in [
        WIREFRAME_ATTR,
        ICON_ATTR,
        SEED_ATTR,
        CELL_SIZE_ATTR,
        ICON_SIZE_ATTR,
        ICON_COLOR_ATTR,
        ICON_SPEED_ATTR,
    ] {
        assert!(attr.starts_with("data-"), "{}", attr);
    }
    assert_ne!(WIREFRAME_ATTR, ICON_ATTR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_and_pixel_ratio_are_sane() {
    assert!(MAX_FRAME_DT_MS >= 16);
    assert!(ICON_MAX_PIXEL_RATIO >= 1.0);
    assert!(DEFAULT_ICON_SIZE_PX > 0.0);
}
