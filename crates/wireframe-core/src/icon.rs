use crate::animator::{Clock, Wireframe};
use crate::camera::{project_with, Camera};
use crate::config::{positive, ConfigError};
use crate::constants::{ICON_CAMERA_Z, ICON_FOV_DEG, ICON_LINE_WIDTH, ICON_RGB, ICON_ROTATION_SPEED};
use crate::draw::{DrawList, Rgba};
use crate::mesh::Mesh;
use crate::pointer::PointerState;
use crate::shapes::{placement, ShapeKind};
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};

/// One registry shape spinning on a small square canvas.
pub struct IconSpinner {
    kind: ShapeKind,
    mesh: Mesh,
    rotation: Vec3,
    speed: f32,
    color: Rgba,
    camera: Camera,
    screen: Vec<Option<Vec2>>,
}

impl IconSpinner {
    /// `speed` is radians per frame around x; y and z follow at 0.7 and 0.3 of
    /// it. Zero gives a static icon, negative spins the other way.
    pub fn new(kind: ShapeKind, color: Rgba, speed: f32) -> Result<Self, ConfigError> {
        if !speed.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "rotation_speed",
                value: speed,
            });
        }
        Ok(Self::build(kind, color, speed))
    }

    pub fn with_defaults(kind: ShapeKind) -> Self {
        Self::build(kind, Rgba::rgb(ICON_RGB), ICON_ROTATION_SPEED)
    }

    fn build(kind: ShapeKind, color: Rgba, speed: f32) -> Self {
        Self {
            kind,
            mesh: kind.build(),
            rotation: Vec3::ZERO,
            speed,
            color,
            camera: Camera::looking_at_origin(ICON_CAMERA_Z, ICON_FOV_DEG, 1.0),
            screen: Vec::new(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn step(&mut self) {
        self.rotation += Vec3::new(1.0, 0.7, 0.3) * self.speed;
    }
}

impl Wireframe for IconSpinner {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn resize(&mut self, _viewport: Viewport) {}

    fn render(
        &mut self,
        _clock: &Clock,
        _pointer: &PointerState,
        viewport: Viewport,
        out: &mut DrawList,
    ) {
        self.step();
        // icons are square; centre the largest square that fits
        let side = viewport.width.min(viewport.height);
        let square = Viewport::new(side, side);
        let offset = (viewport.center() - square.center()).max(Vec2::ZERO);
        let mvp = self.camera.view_projection() * placement(Vec3::ZERO, self.rotation);

        self.screen.clear();
        self.screen.extend(
            self.mesh
                .vertices()
                .iter()
                .map(|&v| project_with(&mvp, v, square).map(|p| p + offset)),
        );
        for e in self.mesh.edges() {
            if let (Some(a), Some(b)) = (self.screen[e.a], self.screen[e.b]) {
                out.line(a, b, ICON_LINE_WIDTH, self.color);
            }
        }
    }
}

/// Validate an icon size in CSS pixels.
pub fn icon_size(size: f32) -> Result<f32, ConfigError> {
    positive("icon_size", size)
}
