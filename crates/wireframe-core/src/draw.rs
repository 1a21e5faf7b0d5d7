//! Ordered draw commands produced by a frame.
//!
//! The core never touches a canvas. Each variant appends commands here in
//! paint order and the web front-end replays them onto a 2D context.

use crate::config::ConfigError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 },
            ..self
        }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn parse_hex(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(raw.to_string());
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ])),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb([short(0)?, short(1)?, short(2)?]))
            }
            _ => Err(invalid()),
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Filled circle.
    Dot {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Stroked circle.
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    // Fully transparent commands are dropped; they would paint nothing.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        if color.a > 0.0 {
            self.cmds.push(DrawCmd::Line {
                from,
                to,
                width,
                color,
            });
        }
    }

    pub fn dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if color.a > 0.0 && radius > 0.0 {
            self.cmds.push(DrawCmd::Dot {
                center,
                radius,
                color,
            });
        }
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        if color.a > 0.0 && radius > 0.0 {
            self.cmds.push(DrawCmd::Ring {
                center,
                radius,
                width,
                color,
            });
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.cmds.iter()
    }

    pub fn as_slice(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}
