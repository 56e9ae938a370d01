// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Los closures Rust registrados como listeners se convierten con
//   `into_js_value()`, que equivale a `forget()`: viven tanto como el elemento.
//   Cuando el elemento se destruye, el navegador limpia sus listeners.
// - Los listeners de una sola vez (DOMContentLoaded) usan `Closure::once_into_js`,
//   que libera el closure después de la primera invocación.
// ============================================================================

use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Handler de evento: closure Rust o función JS
pub enum Handler {
    Rust(Box<dyn FnMut(Event)>),
    Js(js_sys::Function),
}

impl Handler {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Handler::Rust(Box::new(handler))
    }

    /// Convertir a valor JS invocable. Un closure Rust queda vivo (no se libera).
    pub fn into_js(self) -> JsValue {
        match self {
            Handler::Rust(handler) => Closure::wrap(handler).into_js_value(),
            Handler::Js(function) => function.into(),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Rust(_) => f.write_str("Handler::Rust(..)"),
            Handler::Js(function) => f.debug_tuple("Handler::Js").field(function).finish(),
        }
    }
}

impl From<js_sys::Function> for Handler {
    fn from(function: js_sys::Function) -> Self {
        Handler::Js(function)
    }
}

/// Registrar listener para `event_type` en `target`
pub fn add_listener(target: &EventTarget, event_type: &str, handler: Handler) -> Result<(), JsValue> {
    let callback = handler.into_js();
    target.add_event_listener_with_callback(event_type, callback.unchecked_ref())
}

/// Helper para registrar un closure Rust como listener
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    add_listener(target, event_type, Handler::new(handler))
}

/// Registrar un callback que se ejecuta una sola vez para `event_type`
pub fn add_listener_once<F>(target: &EventTarget, event_type: &str, callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once_into_js(callback);
    target.add_event_listener_with_callback(event_type, closure.unchecked_ref())
}
