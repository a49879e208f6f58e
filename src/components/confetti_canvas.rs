use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::state::ConfettiBurst;
use crate::state::confetti::CONFETTI_PIECES;
use crate::util::random_seed;

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiCanvasProps {
    /// Plays a burst every time this changes (0 = never played).
    pub bursts: u32,
}

#[function_component]
pub fn ConfettiCanvas(props: &ConfettiCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.bursts, move |&bursts| {
            let raf_id = Rc::new(Cell::new(None::<i32>));
            let frame_loop: FrameLoop = Rc::new(RefCell::new(None));
            if bursts > 0 {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(err) = play(canvas, raf_id.clone(), frame_loop.clone()) {
                            log::warn!("confetti skipped: {err:?}");
                        }
                    }
                    None => log::warn!("confetti skipped: canvas not mounted"),
                }
            }
            move || {
                if let (Some(id), Some(win)) = (raf_id.get(), web_sys::window()) {
                    let _ = win.cancel_animation_frame(id);
                }
                // Breaks the closure's self-reference.
                frame_loop.borrow_mut().take();
            }
        });
    }
    html! {
        <canvas
            id="confetti-canvas"
            ref={canvas_ref}
            style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none;"
        />
    }
}

fn play(canvas: HtmlCanvasElement, raf_id: Rc<Cell<Option<i32>>>, frame_loop: FrameLoop) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    if let Some(parent) = canvas.parent_element() {
        canvas.set_width(parent.client_width().max(0) as u32);
        canvas.set_height(parent.client_height().max(0) as u32);
    }
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let mut rng = Pcg32::seed_from_u64(random_seed());
    let mut burst = ConfettiBurst::new(&mut rng, w, h, CONFETTI_PIECES);

    let next = frame_loop.clone();
    let raf = raf_id.clone();
    let win = window.clone();
    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if burst.step() {
            draw(&ctx, &burst, w, h);
            if let Some(cb) = next.borrow().as_ref() {
                raf.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        } else {
            ctx.clear_rect(0.0, 0.0, w, h);
            raf.set(None);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = frame_loop.borrow().as_ref() {
        raf_id.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
    }
    Ok(())
}

fn draw(ctx: &CanvasRenderingContext2d, burst: &ConfettiBurst, w: f64, h: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in &burst.pieces {
        ctx.save();
        let _ = ctx.translate(p.x, p.y);
        let _ = ctx.rotate(p.rot.to_radians());
        ctx.set_fill_style_str(p.color);
        ctx.fill_rect(-p.w / 2.0, -p.h / 2.0, p.w, p.h);
        ctx.restore();
    }
}
