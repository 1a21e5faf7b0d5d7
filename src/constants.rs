/// DOM hooks and host-side tuning for the web front-end.
///
/// Geometry and styling constants live in `wireframe_core::constants`; this
/// file only holds what the browser glue needs.
// Attributes that opt a <canvas> into auto-mounting
pub const WIREFRAME_ATTR: &str = "data-wireframe"; // scatter | mesh | floating
pub const ICON_ATTR: &str = "data-wireframe-icon"; // shape kind, e.g. "factory"

// Optional per-canvas settings
pub const SEED_ATTR: &str = "data-seed";
pub const CELL_SIZE_ATTR: &str = "data-cell-size";
pub const ICON_SIZE_ATTR: &str = "data-icon-size";
pub const ICON_COLOR_ATTR: &str = "data-icon-color";
pub const ICON_SPEED_ATTR: &str = "data-icon-speed";

// Icon canvas defaults
pub const DEFAULT_ICON_SIZE_PX: f32 = 40.0;
pub const ICON_MAX_PIXEL_RATIO: f64 = 2.0;

// Frame timing
// Longest wall-clock step fed to an animator; covers tabs coming back from
// the background.
pub const MAX_FRAME_DT_MS: u64 = 100;
