use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

use super::number_input::NumberInput;
use super::wheel::{draw_wheel, WHEEL_SIZE_PX};
use crate::presenter::Presentation;
use crate::rng::GameRng;
use crate::roulette::{default_option_label, Frame, Roulette, MAX_OPTIONS, MIN_OPTIONS};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct RoulettePanelProps {
    pub on_result: Callback<Presentation>,
}

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn paint(canvas_ref: &NodeRef, roulette: &RefCell<Roulette>) {
    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
        draw_wheel(&canvas, &roulette.borrow());
    }
}

fn request_frame(frame_cb: &FrameCell, raf_id: &RefCell<Option<i32>>) {
    let Some(window) = web_sys::window() else { return };
    if let Some(cb) = frame_cb.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *raf_id.borrow_mut() = Some(id);
        }
    }
}

#[function_component(RoulettePanel)]
pub fn roulette_panel(props: &RoulettePanelProps) -> Html {
    let canvas_ref = use_node_ref();
    let roulette = use_mut_ref(|| Roulette::new(GameRng::from_browser()));
    let raf_id = use_mut_ref(|| None::<i32>);
    let frame_cb: FrameCell = use_mut_ref(|| None);
    let redraw = use_force_update();

    // Mount: size the canvas, paint once and build the spin frame loop
    {
        let canvas_ref = canvas_ref.clone();
        let roulette = roulette.clone();
        let raf_id = raf_id.clone();
        let frame_cb = frame_cb.clone();
        let redraw = redraw.clone();
        let on_result = props.on_result.clone();
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(WHEEL_SIZE_PX);
                canvas.set_height(WHEEL_SIZE_PX);
            }
            paint(&canvas_ref, &roulette);
            clog("roulette: panel mounted");

            {
                let canvas_ref = canvas_ref.clone();
                let roulette = roulette.clone();
                let raf_id_loop = raf_id.clone();
                let frame_cb_loop = frame_cb.clone();
                *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    let frame = roulette.borrow_mut().frame(ts);
                    paint(&canvas_ref, &roulette);
                    match frame {
                        Frame::Turning { .. } => request_frame(&frame_cb_loop, &raf_id_loop),
                        Frame::Stopped(result) => {
                            *raf_id_loop.borrow_mut() = None;
                            redraw.force_update();
                            let shown = Presentation::Roulette(result.label.clone());
                            clog(&format!(
                                "roulette: stopped at {:.3} rad, sector {} {}",
                                result.rotation,
                                result.index,
                                shown.to_log_line()
                            ));
                            on_result.emit(shown);
                        }
                        Frame::Idle => *raf_id_loop.borrow_mut() = None,
                    }
                }) as Box<dyn FnMut(f64)>));
            }

            move || {
                if let (Some(window), Some(id)) = (web_sys::window(), raf_id.borrow_mut().take()) {
                    let _ = window.cancel_animation_frame(id);
                }
                frame_cb.borrow_mut().take();
                clog("roulette: panel torn down");
            }
        });
    }

    let on_count = {
        let roulette = roulette.clone();
        let canvas_ref = canvas_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |n: usize| {
            if let Err(e) = roulette.borrow_mut().set_option_count(n) {
                clog(&format!("roulette: count ignored: {e}"));
            }
            paint(&canvas_ref, &roulette);
            redraw.force_update();
        })
    };
    let on_spin = {
        let roulette = roulette.clone();
        let raf_id = raf_id.clone();
        let frame_cb = frame_cb.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            let spun = roulette.borrow_mut().spin();
            match spun {
                Ok(_) => {
                    request_frame(&frame_cb, &raf_id);
                    redraw.force_update();
                }
                Err(e) => clog(&format!("roulette: spin ignored: {e}")),
            }
        })
    };

    let r = roulette.borrow();
    let spinning = r.is_spinning();

    let option_inputs: Html = r
        .options()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let oninput = {
                let roulette = roulette.clone();
                let canvas_ref = canvas_ref.clone();
                let redraw = redraw.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Err(e) = roulette.borrow_mut().set_label(i, &input.value()) {
                        clog(&format!("roulette: label ignored: {e}"));
                    }
                    paint(&canvas_ref, &roulette);
                    redraw.force_update();
                })
            };
            let placeholder = default_option_label(i);
            let caption = format!("{}:", placeholder);
            html! {<div key={i} style="display:flex; align-items:center; gap:8px;">
                <label style="min-width:72px;">{ caption }</label>
                <input type="text" value={opt.text.clone()} {placeholder} {oninput}
                    style={format!("flex:1; background:#0e1116; color:inherit; border:1px solid #30363d; border-left:4px solid hsl({}, 75%, 55%); border-radius:6px; padding:4px 6px;", opt.hue)} />
            </div>}
        })
        .collect();

    let result_line = match (spinning, r.last_result()) {
        (false, Some(label)) => html! {
            <div style="font-size:16px; font-weight:600; color:#d4af37;">{ format!("🎉 Result: {}", label) }</div>
        },
        _ => html! {},
    };

    html! {<div style="display:flex; gap:20px; flex-wrap:wrap;">
        <div style="flex:1 1 240px; display:flex; flex-direction:column; gap:10px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px;">
            <NumberInput label="Options:" value={r.option_count()} min={MIN_OPTIONS} max={MAX_OPTIONS}
                disabled={spinning} on_change={on_count} />
            <div style="display:flex; flex-direction:column; gap:6px; max-height:320px; overflow-y:auto;">{ option_inputs }</div>
        </div>
        <div style="flex:1 1 320px; display:flex; flex-direction:column; align-items:center; gap:12px;">
            <canvas ref={canvas_ref.clone()} style="max-width:100%; aspect-ratio:1 / 1;"></canvas>
            <button onclick={on_spin} disabled={spinning}>{ if spinning { "Spinning..." } else { "🎡 Spin" } }</button>
            { result_line }
        </div>
    </div>}
}
