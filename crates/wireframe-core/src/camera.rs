//! Fixed look-at camera for the scenes drawn through a real perspective
//! matrix (the floating hero scene and the card icons).

use crate::constants::CLIP_W_EPSILON;
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +z axis at distance `z` looking at the origin.
    pub fn looking_at_origin(z: f32, fovy_degrees: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World point to CSS pixels, or `None` when it sits behind the camera.
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Vec2> {
        project_with(&self.view_projection(), world, viewport)
    }
}

/// Same as [`Camera::project`] with a precomputed view-projection matrix, for
/// loops that project many vertices per frame.
#[inline]
pub fn project_with(view_projection: &Mat4, world: Vec3, viewport: Viewport) -> Option<Vec2> {
    let clip = *view_projection * world.extend(1.0);
    if !(clip.w > CLIP_W_EPSILON) {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some(Vec2::new(
        (ndc_x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc_y) * 0.5 * viewport.height,
    ))
}
