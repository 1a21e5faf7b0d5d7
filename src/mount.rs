use crate::attrs::IconSettings;
use crate::constants::{ICON_MAX_PIXEL_RATIO, MAX_FRAME_DT_MS};
use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use crate::listeners::Listener;
use crate::paint::paint;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;
use wireframe_core::{Animator, AnimatorConfig, IconSpinner, Viewport};

// Full-page backgrounds are drawn at up to 3x; icons cap lower.
const BACKGROUND_MAX_PIXEL_RATIO: f64 = 3.0;

/// Everything one animated canvas holds on to.
///
/// Dropping a `Mount` stops its frame loop and removes every listener it
/// registered, in that order, in one synchronous step.
pub struct Mount {
    name: &'static str,
    frames: FrameLoop,
    listeners: Vec<Listener>,
}

impl Mount {
    /// Background wireframe following the canvas size and the pointer.
    pub fn wireframe(
        canvas: &web::HtmlCanvasElement,
        config: &AnimatorConfig,
    ) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(canvas)?;
        let viewport = dom::css_viewport(canvas);
        dom::sync_canvas_backing_size(canvas, &ctx, viewport, BACKGROUND_MAX_PIXEL_RATIO);
        let animator = Rc::new(RefCell::new(Animator::new(config, viewport)?));

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mut listeners = Vec::with_capacity(3);

        let (canvas_resize, ctx_resize, animator_resize) =
            (canvas.clone(), ctx.clone(), animator.clone());
        listeners.push(Listener::new(&window, "resize", move |_| {
            let viewport = dom::css_viewport(&canvas_resize);
            dom::sync_canvas_backing_size(
                &canvas_resize,
                &ctx_resize,
                viewport,
                BACKGROUND_MAX_PIXEL_RATIO,
            );
            animator_resize.borrow_mut().resize(viewport);
        })?);

        let (canvas_move, animator_move) = (canvas.clone(), animator.clone());
        listeners.push(Listener::new(&window, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let pos = input::pointer_canvas_css(ev, &canvas_move);
                animator_move.borrow_mut().pointer_moved(pos.x, pos.y);
            }
        })?);

        let animator_leave = animator.clone();
        listeners.push(Listener::new(canvas, "pointerleave", move |_| {
            animator_leave.borrow_mut().pointer_left();
        })?);

        let name = animator.borrow().name();
        let frames = start_painting(ctx, animator);
        log::info!(
            "[mount] {} wireframe at {}x{}",
            name,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            name,
            frames,
            listeners,
        })
    }

    /// Fixed-size spinning card icon. Registers no listeners.
    pub fn icon(canvas: &web::HtmlCanvasElement, settings: &IconSettings) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(canvas)?;
        let viewport = Viewport::new(settings.size, settings.size);
        dom::sync_canvas_backing_size(canvas, &ctx, viewport, ICON_MAX_PIXEL_RATIO);
        let spinner = IconSpinner::new(settings.kind, settings.color, settings.speed)?;
        let animator = Rc::new(RefCell::new(Animator::with_strategy(Box::new(spinner), viewport)));
        let frames = start_painting(ctx, animator);
        log::info!("[mount] {} icon at {}px", settings.kind, settings.size);
        Ok(Self {
            name: "icon",
            frames,
            listeners: Vec::new(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.frames.stop();
        let count = self.listeners.len();
        for l in self.listeners.drain(..) {
            log::debug!("[mount] {} removing {} listener", self.name, l.event());
        }
        log::info!("[mount] {} torn down ({} listeners removed)", self.name, count);
    }
}

fn start_painting(
    ctx: web::CanvasRenderingContext2d,
    animator: Rc<RefCell<Animator>>,
) -> FrameLoop {
    let max_dt = Duration::from_millis(MAX_FRAME_DT_MS);
    let mut last = Instant::now();
    FrameLoop::start(move || {
        let now = Instant::now();
        let dt = (now - last).min(max_dt);
        last = now;
        let mut animator = animator.borrow_mut();
        let viewport = animator.viewport();
        paint(&ctx, viewport, animator.frame(dt));
    })
}
