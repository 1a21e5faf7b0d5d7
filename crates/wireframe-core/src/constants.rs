// Geometry, timing and styling constants shared by every wireframe variant.

// Projection
pub const FOCAL_LENGTH: f32 = 400.0; // pinhole focal distance in CSS pixels
pub const NEAR_PLANE_MARGIN: f32 = 100.0; // F + z is never allowed below this
pub const CLIP_W_EPSILON: f32 = 1e-3; // camera-space points with w below this are culled

// Time
pub const TIME_STEP: f32 = 0.01; // accumulator increment per frame

// Size-class breakpoints (CSS pixels, inclusive lower bounds)
pub const TABLET_MIN_WIDTH: f32 = 640.0;
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;

// Grid cell size per size class
pub const CELL_SIZE_MOBILE: f32 = 40.0;
pub const CELL_SIZE_TABLET: f32 = 48.0;
pub const CELL_SIZE_DESKTOP: f32 = 55.0;
pub const MIN_CELL_SIZE: f32 = 8.0; // smaller explicit cells are rejected

// Scattered node graph
pub const SCATTER_NODE_COUNT: usize = 50;
pub const SCATTER_Z_RANGE: f32 = 250.0; // z sampled from [-range, range)
pub const SCATTER_LINK_DISTANCE: f32 = 200.0;
pub const SCATTER_WAVE_FREQ: f32 = 0.01; // phase offset per unit of z
pub const SCATTER_WAVE_AMPLITUDE: f32 = 50.0;
pub const SCATTER_PULL_RADIUS: f32 = 200.0;
pub const SCATTER_PULL_DEPTH: f32 = 100.0; // full pull towards the viewer
pub const SCATTER_EDGE_FADE: f32 = 300.0; // depth difference at which an edge vanishes
pub const SCATTER_EDGE_ALPHA: f32 = 0.35;
pub const SCATTER_EDGE_HOVER_RADIUS: f32 = 150.0;
pub const SCATTER_EDGE_HOVER_BOOST: f32 = 0.4;
pub const SCATTER_EDGE_HOVER_WIDTH: f32 = 1.5;
pub const SCATTER_NODE_SIZE: f32 = 3.0;
pub const SCATTER_NODE_ALPHA: f32 = 0.4;
pub const SCATTER_GLOW_RADIUS: f32 = 250.0;
pub const SCATTER_GLOW_GROW: f32 = 5.0;
pub const SCATTER_GLOW_ALPHA: f32 = 0.45;

// Glow ring around points close to the pointer
pub const RING_RADIUS: f32 = 100.0;
pub const RING_GAP: f32 = 4.0;
pub const RING_ALPHA: f32 = 0.35;
pub const RING_WIDTH: f32 = 2.0;

// Undulating grid
pub const GRID_PADDING_CELLS: u32 = 3;
// [spatial frequency, temporal frequency, amplitude] over x, y and x + y
pub const GRID_WAVES: [[f32; 3]; 3] = [
    [0.010, 1.0, 20.0],
    [0.012, 0.8, 15.0],
    [0.008, 1.3, 10.0],
];
pub const GRID_BUMP_RADIUS: f32 = 300.0;
pub const GRID_BUMP_HEIGHT: f32 = 30.0;
pub const GRID_EDGE_FADE: f32 = 150.0; // average depth at which a grid line vanishes
pub const GRID_EDGE_ALPHA: f32 = 0.25;
pub const GRID_HOVER_RADIUS: f32 = 120.0;
pub const GRID_HOVER_BOOST: f32 = 0.5;
pub const GRID_HOVER_WIDTH: f32 = 1.0;
pub const GRID_VERTEX_RADIUS: f32 = 150.0; // vertices are only drawn this close to the pointer
pub const GRID_VERTEX_SIZE: f32 = 2.0;
pub const GRID_VERTEX_ALPHA: f32 = 0.6;

// Floating hero scene
pub const FLOATING_CAMERA_Z: f32 = 10.0;
pub const FLOATING_FOV_DEG: f32 = 75.0;
pub const FLOATING_LAYER_ALPHA: f32 = 0.2;
pub const FLOATING_SWAY_RATE: f32 = 0.1; // radians of phase per second
pub const FLOATING_SWAY_ANGLE: f32 = 0.1;
pub const FLOOR_SIZE: f32 = 20.0;
pub const FLOOR_DIVISIONS: u32 = 20;
pub const FLOOR_Z: f32 = -10.0;
pub const FLOOR_ALPHA_BASE: f32 = 0.15;
pub const FLOOR_ALPHA_SWING: f32 = 0.05;
pub const FLOOR_PULSE_RATE: f32 = 2.0;

// Card icons
pub const ICON_CAMERA_Z: f32 = 3.0;
pub const ICON_FOV_DEG: f32 = 50.0;
pub const ICON_ROTATION_SPEED: f32 = 0.008; // radians per frame around x
pub const ICON_LINE_WIDTH: f32 = 1.5;

// Palette
pub const WIREFRAME_RGB: [u8; 3] = [107, 114, 128]; // #6b7280
pub const ICON_RGB: [u8; 3] = [17, 24, 39]; // #111827
pub const FLOOR_RGB: [u8; 3] = [107, 114, 128];
