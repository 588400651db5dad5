use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::roulette::{angle_per_option, sector_angles, Roulette};

pub const WHEEL_SIZE_PX: u32 = 400;
const HUB_RADIUS: f64 = 20.0;
const LABEL_INSET: f64 = 30.0;

/// Paints the wheel at the engine's current rotation. Sectors, gradients and
/// labels turn with the wheel; the hub and pointer are drawn last and never
/// move.
pub fn draw_wheel(canvas: &HtmlCanvasElement, roulette: &Roulette) {
    if !canvas.is_connected() || roulette.option_count() == 0 {
        return;
    }
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let radius = w.min(h) / 2.0;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let count = roulette.option_count();
    let step = angle_per_option(count);
    let rotation = roulette.rotation();

    ctx.clear_rect(0.0, 0.0, w, h);

    // backdrop disc
    ctx.begin_path();
    ctx.arc(cx, cy, radius - 2.0, 0.0, TAU).ok();
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
    ctx.set_line_width(2.0);
    ctx.stroke();

    for (i, opt) in roulette.options().iter().enumerate() {
        let (start, end) = sector_angles(i, count, rotation);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.arc(cx, cy, radius - 2.0, start, end).ok();
        ctx.close_path();

        if let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) {
            let hue = opt.hue;
            gradient.add_color_stop(0.0, &format!("hsla({hue}, 80%, 65%, 0.9)")).ok();
            gradient.add_color_stop(0.5, &format!("hsla({hue}, 75%, 55%, 0.9)")).ok();
            gradient.add_color_stop(1.0, &format!("hsla({hue}, 70%, 45%, 0.9)")).ok();
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        ctx.fill();
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
        ctx.set_line_width(2.0);
        ctx.stroke();

        // label along the bisector, hugging the rim
        ctx.save();
        ctx.translate(cx, cy).ok();
        ctx.rotate(start + step / 2.0).ok();
        ctx.set_text_align("right");
        ctx.set_font("bold 18px Arial");
        ctx.set_stroke_style_str("rgba(0, 0, 0, 0.8)");
        ctx.set_line_width(4.0);
        ctx.stroke_text(&opt.label, radius - LABEL_INSET, 6.0).ok();
        ctx.set_fill_style_str("#ffffff");
        ctx.set_shadow_color("rgba(0, 0, 0, 0.8)");
        ctx.set_shadow_blur(4.0);
        ctx.set_shadow_offset_x(2.0);
        ctx.set_shadow_offset_y(2.0);
        ctx.fill_text(&opt.label, radius - LABEL_INSET, 6.0).ok();
        ctx.restore();
    }

    // hub
    ctx.begin_path();
    ctx.arc(cx, cy, HUB_RADIUS, 0.0, TAU).ok();
    if let Ok(hub) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, HUB_RADIUS) {
        hub.add_color_stop(0.0, "#ffffff").ok();
        hub.add_color_stop(1.0, "#e0e0e0").ok();
        ctx.set_fill_style_canvas_gradient(&hub);
    }
    ctx.fill();
    ctx.set_stroke_style_str("#999");
    ctx.set_line_width(2.0);
    ctx.stroke();

    // pointer at 12 o'clock
    ctx.save();
    ctx.translate(cx, cy - radius + 15.0).ok();
    ctx.set_shadow_color("rgba(0, 0, 0, 0.5)");
    ctx.set_shadow_blur(5.0);
    ctx.set_shadow_offset_x(2.0);
    ctx.set_shadow_offset_y(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, -10.0);
    ctx.line_to(-10.0, 10.0);
    ctx.line_to(10.0, 10.0);
    ctx.close_path();
    ctx.set_fill_style_str("#ff4444");
    ctx.set_stroke_style_str("#cc0000");
    ctx.set_line_width(2.0);
    ctx.fill();
    ctx.stroke();
    ctx.restore();
}
