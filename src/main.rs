#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window on Windows release builds
use coin_chart::{Cli, run_app};
use log::LevelFilter;

/// Levels as (everything else, this crate). Debug builds hear about our own info logs.
fn log_levels() -> (LevelFilter, LevelFilter) {
    if cfg!(debug_assertions) {
        (LevelFilter::Warn, LevelFilter::Info)
    } else {
        (LevelFilter::Error, LevelFilter::Error)
    }
}

const CRATE_TARGET: &str = "coin_chart";
const WINDOW_TITLE: &str = "Coin Chart";

// ---------------------------------------------------------------------------
// Native
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
fn init_native_log() {
    let (others, ours) = log_levels();
    env_logger::Builder::new()
        .filter(None, others)
        .filter(Some(CRATE_TARGET), ours)
        .parse_default_env() // RUST_LOG overrides the defaults above
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("Panic: {}\n{}", info, backtrace);
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        persistence_path: Some(std::path::PathBuf::from(
            coin_chart::PERSISTENCE.app.state_path,
        )),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([720.0, 600.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;

    install_panic_hook();
    init_native_log();

    let args = Cli::parse();
    log::info!("Starting with {:?}", args);

    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

// ---------------------------------------------------------------------------
// Web
// ---------------------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_log() {
    let (others, ours) = log_levels();
    let _ = fern::Dispatch::new()
        .level(others)
        .level_for(CRATE_TARGET, ours)
        .chain(fern::Output::call(|record| {
            let line: JsValue = format!("[{}] {}", record.target(), record.args()).into();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line),
                log::Level::Warn => web_sys::console::warn_1(&line),
                log::Level::Info => web_sys::console::info_1(&line),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&line),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document to attach to")?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", id)))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_web_log();

    let canvas = find_canvas("the_canvas_id")?;
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, Cli::default())))),
        )
        .await
}
