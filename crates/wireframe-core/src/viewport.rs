use crate::constants::{
    CELL_SIZE_DESKTOP, CELL_SIZE_MOBILE, CELL_SIZE_TABLET, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH,
};
use glam::Vec2;

/// Size of the drawing surface in CSS pixels.
///
/// Both sides are kept at one pixel or more so that centring and grid
/// dimensions never degenerate while a canvas is still being laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `p` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Responsive breakpoint bucket, used to pick the grid density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Mobile,
    Tablet,
    Desktop,
}

impl SizeClass {
    pub fn from_width(width: f32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            SizeClass::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            SizeClass::Tablet
        } else {
            SizeClass::Mobile
        }
    }

    pub fn cell_size(self) -> f32 {
        match self {
            SizeClass::Mobile => CELL_SIZE_MOBILE,
            SizeClass::Tablet => CELL_SIZE_TABLET,
            SizeClass::Desktop => CELL_SIZE_DESKTOP,
        }
    }
}
