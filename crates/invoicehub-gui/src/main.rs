#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;
mod ui_components;
mod views;

use logger::AppLogger;

const MAX_LOG_ENTRIES: usize = 500;

/// Log panel level from `INVOICEHUB_LOG` (e.g. `debug`), info otherwise.
#[cfg(not(target_arch = "wasm32"))]
fn log_level() -> log::LevelFilter {
    std::env::var("INVOICEHUB_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let logger = AppLogger::new(MAX_LOG_ENTRIES).with_level(log_level());
    logger.clone().init()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("InvoiceHub"),
        ..Default::default()
    };

    eframe::run_native(
        "InvoiceHub",
        options,
        Box::new(move |cc| Ok(Box::new(app::DashboardApp::new(cc, logger, tokio_handle)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run InvoiceHub: {e}"))?;

    drop(runtime);
    Ok(())
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let logger = AppLogger::new(MAX_LOG_ENTRIES);
    if let Err(e) = logger.clone().init() {
        log::warn!("Logger already set: {e}");
    }

    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("invoicehub_canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #invoicehub_canvas not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(app::DashboardApp::new(cc, logger)))),
            )
            .await;

        if let Err(e) = result {
            log::error!("Failed to start eframe: {e:?}");
        }
    });
}
