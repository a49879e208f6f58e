// Browser timer guards and small helpers shared by the components.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// `part / whole` as a whole percentage, rounded and capped at 100.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round().min(100.0) as u32
}

/// Seed for the round RNG, drawn from `Math.random`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// A `setInterval` registration that is cleared when dropped.
pub struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(id) => Some(Self { id, _tick: tick }),
            Err(err) => {
                log::warn!("setInterval({period_ms}) failed: {err:?}");
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// A one-shot `setTimeout` that is cancelled if dropped before firing.
pub struct Timeout {
    id: i32,
    _fire: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut f = Some(f);
        let fire = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => Some(Self { id, _fire: fire }),
            Err(err) => {
                log::warn!("setTimeout({delay_ms}) failed: {err:?}");
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
