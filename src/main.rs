#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use almasu::{Cli, run_app};

/// Warn for dependencies, info for our own crate; errors only in release.
fn log_levels() -> (log::LevelFilter, log::LevelFilter) {
    if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("Panic: {}\n{}", info, backtrace);
    }));

    let (deps, ours) = log_levels();
    env_logger::Builder::new()
        .filter(None, deps)
        .filter(Some("almasu"), ours)
        .init();

    let args = Cli::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("ALMASU - обмен тенге на USDT"),
        ..Default::default()
    };
    eframe::run_native(
        "ALMASU",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_log() {
    let (deps, ours) = log_levels();
    let _ = fern::Dispatch::new()
        .level(deps)
        .level_for("almasu", ours)
        .chain(fern::Output::call(|record| {
            let msg = wasm_bindgen::JsValue::from(record.args().to_string());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg),
                log::Level::Warn => web_sys::console::warn_1(&msg),
                log::Level::Info => web_sys::console::info_1(&msg),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    init_web_log();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("the_canvas_id"))
        .ok_or("canvas 'the_canvas_id' not found")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "'the_canvas_id' is not a canvas")?;

    // The first screen comes from the browser location, not from flags.
    let args = Cli::default();
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}
