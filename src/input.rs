use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
///
/// Works for events delivered to the window as well as to the canvas, so the
/// position keeps tracking while the pointer is over content on top of it.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
