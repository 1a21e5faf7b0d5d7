pub mod animator;
pub mod camera;
pub mod config;
pub mod constants;
pub mod draw;
pub mod floating;
pub mod grid;
pub mod icon;
pub mod mesh;
pub mod pointer;
pub mod projection;
pub mod scatter;
pub mod shapes;
pub mod viewport;

pub use animator::{Animator, Clock, Wireframe};
pub use camera::Camera;
pub use config::{AnimatorConfig, ConfigError, Variant};
pub use draw::{DrawCmd, DrawList, Rgba};
pub use floating::FloatingScene;
pub use grid::{grid_dimensions, GridField};
pub use icon::IconSpinner;
pub use mesh::{Edge, Mesh};
pub use pointer::PointerState;
pub use projection::{depth_factor, Projector, ScreenPoint};
pub use scatter::{link_nodes, sample_nodes, ScatterField};
pub use shapes::{ShapeBuilder, ShapeKind, REGISTRY};
pub use viewport::{SizeClass, Viewport};
