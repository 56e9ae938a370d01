// ============================================================================
// DOMKIT - Element builder + selector/ready dispatcher sobre el DOM del navegador
// ============================================================================
// - dom: helpers web-sys (elementos, eventos) y el builder declarativo
// - content / children: descriptores tipados de contenido e hijos
// - query: dispatcher ready / fragmento HTML / selector CSS
// - js_api: exportaciones #[wasm_bindgen] con argumentos sin tipo
// ============================================================================

pub mod children;
pub mod config;
pub mod content;
pub mod dom;
pub mod js_api;
pub mod query;

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::config::CONFIG;

pub use children::{Child, Children};
pub use content::{Content, PropValue, Props, Resolved};
pub use dom::{a, build, button, div, label, li, p, span, ul, ElementBuilder, Handler};
pub use query::{query, ready, ready_future, Query, ReadyCallback, Selector, SelectorKind};

thread_local! {
    static INITIALIZED: Cell<bool> = Cell::new(false);
}

/// Inicializar panic hook y logging (las llamadas repetidas se ignoran)
#[wasm_bindgen(js_name = initDomKit)]
pub fn init() {
    if INITIALIZED.with(|flag| flag.replace(true)) {
        return;
    }

    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.level()));
        log::info!("🚀 domkit initialized (log level: {})", CONFIG.log_level);
    }
}
