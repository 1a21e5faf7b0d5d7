use crate::constants::{FOCAL_LENGTH, NEAR_PLANE_MARGIN};
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};

/// A point after perspective projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub position: Vec2,
    pub scale: f32,
    /// Depth actually used for the projection (after clamping).
    pub depth: f32,
}

/// Pinhole projection towards the centre of the viewport.
///
/// `scale = F / (F + z)`, so larger `z` is further away and shrinks towards
/// the vanishing point. Depth is clamped to `NEAR_PLANE_MARGIN - F` which keeps
/// the divisor at or above `NEAR_PLANE_MARGIN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub focal_length: f32,
    pub center: Vec2,
}

impl Projector {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            focal_length: FOCAL_LENGTH,
            center: viewport.center(),
        }
    }

    #[inline]
    pub fn clamp_depth(&self, z: f32) -> f32 {
        // f32::max drops a NaN operand, so a NaN depth lands on the near plane
        z.max(NEAR_PLANE_MARGIN - self.focal_length)
    }

    #[inline]
    pub fn scale(&self, z: f32) -> f32 {
        self.focal_length / (self.focal_length + self.clamp_depth(z))
    }

    pub fn project(&self, point: Vec3) -> ScreenPoint {
        let depth = self.clamp_depth(point.z);
        let scale = self.scale(depth);
        let planar = Vec2::new(point.x, point.y);
        ScreenPoint {
            position: (planar - self.center) * scale + self.center,
            scale,
            depth,
        }
    }
}

/// Fade in [0, 1] from a depth metric: 1 at zero, 0 at `fade_range` and beyond.
#[inline]
pub fn depth_factor(metric: f32, fade_range: f32) -> f32 {
    (1.0 - metric.abs() / fade_range).max(0.0)
}
