use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;
use wireframe_core::Viewport;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Acquire the 2D context, or explain why it is not available.
pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("context is not a CanvasRenderingContext2d"))
}

/// Layout size of the canvas in CSS pixels.
pub fn css_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

/// Match the backing store to `viewport` times the device pixel ratio and
/// scale the context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: Viewport,
    max_ratio: f64,
) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, max_ratio);
    let w_px = (viewport.width as f64 * dpr) as u32;
    let h_px = (viewport.height as f64 * dpr) as u32;
    if canvas.width() != w_px.max(1) || canvas.height() != h_px.max(1) {
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    // resizing resets the transform, so always reapply it
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
