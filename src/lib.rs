//! Video Generator Web UI
//!
//! Browser-side glue for the server-rendered video generator pages: upload
//! previews, toasts, htmx request feedback, form validation, theme toggle,
//! auto-save and keyboard shortcuts. Compiled to WebAssembly; the behaviors
//! are written against small seams (`View`, `KeyValueStore`, `Scheduler`) so
//! they run natively under test.

pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod models;
pub mod platform;
pub mod store;
pub mod tasks;
pub mod view;

use wasm_bindgen::prelude::*;

/// Module entry point, run when the script is evaluated
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);
    tasks::init_browser_executor();

    let (ui, config_seen) = match bindings::boot() {
        Ok(booted) => booted,
        Err(e) => {
            log::error!("web ui not started: {}", e);
            return;
        }
    };
    log::set_max_level(ui.config().log_level().to_level_filter());

    // Theme goes on before the DOM is interactive
    ui.restore_theme();
    bindings::when_dom_ready(ui, config_seen);
}
