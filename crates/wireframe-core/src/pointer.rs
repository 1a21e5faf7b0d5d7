use glam::Vec2;

/// Last known pointer position over the drawing surface.
///
/// `active` is set by pointer-move and cleared by pointer-leave. While it is
/// false every influence query returns zero, so a leave takes effect on the
/// very next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.position = Vec2::new(x, y);
        self.active = true;
    }

    pub fn left(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> Option<f32> {
        self.active.then(|| self.position.distance(point))
    }

    /// Linear falloff in [0, 1]: 1 under the pointer, 0 at `radius` and beyond.
    #[inline]
    pub fn influence(&self, point: Vec2, radius: f32) -> f32 {
        match self.distance_to(point) {
            Some(d) if d < radius => 1.0 - d / radius,
            _ => 0.0,
        }
    }
}
