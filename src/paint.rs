use std::f64::consts::TAU;
use web_sys as web;
use wireframe_core::{DrawCmd, DrawList, Viewport};

/// Clear the surface and replay `list` in order.
pub fn paint(ctx: &web::CanvasRenderingContext2d, viewport: Viewport, list: &DrawList) {
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    for cmd in list {
        match *cmd {
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCmd::Dot {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                ctx.fill();
            }
            DrawCmd::Ring {
                center,
                radius,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(width as f64);
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                ctx.stroke();
            }
        }
    }
}
