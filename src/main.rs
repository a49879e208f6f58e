mod components;
mod config;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {err}").into());
        }
    }
    log::info!("Splash Grid starting");
    yew::Renderer::<App>::new().render();
}
