//! The animator: one wireframe strategy plus the state every frame needs
//! (time, pointer, viewport), stepped explicitly by the host's frame loop.

use crate::config::{AnimatorConfig, ConfigError, Variant};
use crate::constants::TIME_STEP;
use crate::draw::DrawList;
use crate::floating::FloatingScene;
use crate::grid::GridField;
use crate::pointer::PointerState;
use crate::scatter::ScatterField;
use crate::viewport::Viewport;
use glam::Vec2;
use std::time::Duration;

/// Frame counters handed to a strategy.
///
/// `time` advances by a fixed step per frame and drives the waves; `elapsed`
/// is wall-clock time measured by the host and drives the slow sways.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    pub time: f32,
    pub frame: u64,
    pub elapsed: Duration,
}

impl Clock {
    pub fn advance(&mut self, dt: Duration) {
        self.time += TIME_STEP;
        self.frame += 1;
        self.elapsed += dt;
    }

    #[inline]
    pub fn seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// A selectable wireframe strategy.
pub trait Wireframe {
    fn name(&self) -> &'static str;
    /// Rebuild whatever depends on the surface size.
    fn resize(&mut self, viewport: Viewport);
    /// Append this frame's draw commands, back to front.
    fn render(
        &mut self,
        clock: &Clock,
        pointer: &PointerState,
        viewport: Viewport,
        out: &mut DrawList,
    );
}

pub struct Animator {
    strategy: Box<dyn Wireframe>,
    viewport: Viewport,
    pointer: PointerState,
    clock: Clock,
    draw: DrawList,
}

impl Animator {
    pub fn new(config: &AnimatorConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        let strategy: Box<dyn Wireframe> = match config.variant {
            Variant::Scatter => Box::new(ScatterField::new(config, viewport)),
            Variant::Grid => Box::new(GridField::new(config, viewport)),
            Variant::Floating => Box::new(FloatingScene::new(viewport)),
        };
        Ok(Self::with_strategy(strategy, viewport))
    }

    /// Wrap an already built strategy, sized for `viewport`.
    pub fn with_strategy(strategy: Box<dyn Wireframe>, viewport: Viewport) -> Self {
        log::debug!(
            "[animator] {} at {}x{}",
            strategy.name(),
            viewport.width,
            viewport.height
        );
        Self {
            strategy,
            viewport,
            pointer: PointerState::default(),
            clock: Clock::default(),
            draw: DrawList::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Last frame's commands.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }

    /// Regenerate for a new surface size. Same-size notifications are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.strategy.resize(viewport);
    }

    /// Moves reported outside the surface count as a leave; the host listens
    /// on the whole window.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.viewport.contains(Vec2::new(x, y)) {
            self.pointer.moved(x, y);
        } else {
            self.pointer.left();
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    pub fn advance(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Advance one tick and rebuild the draw list.
    pub fn frame(&mut self, dt: Duration) -> &DrawList {
        self.advance(dt);
        self.draw.clear();
        self.strategy
            .render(&self.clock, &self.pointer, self.viewport, &mut self.draw);
        &self.draw
    }
}
