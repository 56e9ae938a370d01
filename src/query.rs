// ============================================================================
// QUERY - Selector / ready dispatcher
// ============================================================================
// Tres ramas mutuamente excluyentes, elegidas una sola vez por `Selector`:
// - Ready: callback para cuando el DOM esté listo (siempre asíncrono)
// - Html: fragmento HTML ("<...") parseado en un contenedor desconectado
// - Css: querySelectorAll sobre el contexto o el document
// ============================================================================

use std::fmt;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlCollection, NodeList};

use crate::config::CONFIG;
use crate::dom::{add_listener_once, create_element, query_selector_all, ready_state, require_document};

/// Callback para la rama ready
pub enum ReadyCallback {
    Rust(Box<dyn FnOnce()>),
    Js(js_sys::Function),
}

impl ReadyCallback {
    fn invoke(self) {
        match self {
            ReadyCallback::Rust(callback) => callback(),
            ReadyCallback::Js(function) => {
                if let Err(e) = function.call0(&JsValue::UNDEFINED) {
                    log::error!("❌ ready callback failed: {:?}", e);
                }
            }
        }
    }
}

impl fmt::Debug for ReadyCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyCallback::Rust(_) => f.write_str("ReadyCallback::Rust(..)"),
            ReadyCallback::Js(function) => f.debug_tuple("ReadyCallback::Js").field(function).finish(),
        }
    }
}

/// Tipo de selector de texto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Html,
    Css,
}

impl SelectorKind {
    /// Un texto que empieza con `<` es un fragmento HTML
    pub fn of(selector: &str) -> Self {
        if selector.starts_with('<') {
            SelectorKind::Html
        } else {
            SelectorKind::Css
        }
    }
}

/// Argumento del dispatcher
#[derive(Debug)]
pub enum Selector {
    Ready(ReadyCallback),
    Html(String),
    Css(String),
}

impl Selector {
    pub fn ready<F>(callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Selector::Ready(ReadyCallback::Rust(Box::new(callback)))
    }

    pub fn kind(&self) -> Option<SelectorKind> {
        match self {
            Selector::Ready(_) => None,
            Selector::Html(_) => Some(SelectorKind::Html),
            Selector::Css(_) => Some(SelectorKind::Css),
        }
    }
}

impl From<String> for Selector {
    fn from(selector: String) -> Self {
        match SelectorKind::of(&selector) {
            SelectorKind::Html => Selector::Html(selector),
            SelectorKind::Css => Selector::Css(selector),
        }
    }
}

impl From<&str> for Selector {
    fn from(selector: &str) -> Self {
        selector.to_string().into()
    }
}

impl From<js_sys::Function> for Selector {
    fn from(function: js_sys::Function) -> Self {
        Selector::Ready(ReadyCallback::Js(function))
    }
}

/// Resultado del dispatcher
#[derive(Debug, Clone)]
pub enum Query {
    /// Callback programado (rama ready)
    Scheduled,
    /// Exactamente un elemento
    Element(Element),
    /// Hijos del fragmento HTML (colección viva)
    Collection(HtmlCollection),
    /// Resultado de querySelectorAll (posiblemente vacío)
    NodeList(NodeList),
}

impl Query {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Query::Scheduled)
    }

    pub fn len(&self) -> usize {
        match self {
            Query::Scheduled => 0,
            Query::Element(_) => 1,
            Query::Collection(collection) => collection.length() as usize,
            Query::NodeList(list) => list.length() as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elemento en la posición `index`
    pub fn get(&self, index: usize) -> Option<Element> {
        let index = u32::try_from(index).ok()?;
        match self {
            Query::Scheduled => None,
            Query::Element(element) => (index == 0).then(|| element.clone()),
            Query::Collection(collection) => collection.item(index),
            Query::NodeList(list) => list.item(index).and_then(|node| node.dyn_into::<Element>().ok()),
        }
    }

    pub fn first(&self) -> Option<Element> {
        self.get(0)
    }

    /// Todos los elementos, en orden de documento
    pub fn elements(&self) -> Vec<Element> {
        (0..self.len()).filter_map(|index| self.get(index)).collect()
    }

    /// El elemento único, si el resultado es exactamente uno
    pub fn into_element(self) -> Option<Element> {
        match self {
            Query::Element(element) => Some(element),
            _ => None,
        }
    }

    /// `undefined`, el elemento o la colección
    pub fn into_js(self) -> JsValue {
        match self {
            Query::Scheduled => JsValue::UNDEFINED,
            Query::Element(element) => element.into(),
            Query::Collection(collection) => collection.into(),
            Query::NodeList(list) => list.into(),
        }
    }
}

/// Dispatcher: ready callback, fragmento HTML o selector CSS
pub fn query(selector: impl Into<Selector>, context: Option<&Element>) -> Result<Query, JsValue> {
    match selector.into() {
        Selector::Ready(callback) => {
            schedule_ready(callback)?;
            Ok(Query::Scheduled)
        }
        Selector::Html(markup) => parse_html(&markup),
        Selector::Css(selector) => select(&selector, context),
    }
}

/// Ejecutar `callback` cuando el DOM esté listo
pub fn ready<F>(callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    schedule_ready(ReadyCallback::Rust(Box::new(callback)))
}

/// Variante async de `ready`
pub async fn ready_future() -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_ready = move || {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        };
        if let Err(e) = schedule_ready(ReadyCallback::Rust(Box::new(on_ready))) {
            let _ = reject.call1(&JsValue::UNDEFINED, &e);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

fn schedule_ready(callback: ReadyCallback) -> Result<(), JsValue> {
    let document = require_document()?;
    let state = ready_state(&document);

    if CONFIG.is_ready_state(&state) {
        // Aunque el DOM ya está listo, se difiere al siguiente turno del event loop
        log::debug!("⏱️ ready: readyState='{}', deferring callback", state);
        Timeout::new(CONFIG.ready_delay_ms, move || callback.invoke()).forget();
    } else {
        log::debug!("⏳ ready: readyState='{}', waiting for DOMContentLoaded", state);
        add_listener_once(&document, "DOMContentLoaded", move || callback.invoke())?;
    }

    Ok(())
}

fn parse_html(markup: &str) -> Result<Query, JsValue> {
    let outer = create_element("div")?;
    outer.set_inner_html(markup);

    let children = outer.children();
    if children.length() == 1 {
        if let Some(element) = children.item(0) {
            return Ok(Query::Element(element));
        }
    }

    Ok(Query::Collection(children))
}

fn select(selector: &str, context: Option<&Element>) -> Result<Query, JsValue> {
    let matches = query_selector_all(selector, context)?;
    log::debug!("🔎 query '{}': {} match(es)", selector, matches.length());

    if matches.length() == 1 {
        if let Some(element) = matches.item(0).and_then(|node| node.dyn_into::<Element>().ok()) {
            return Ok(Query::Element(element));
        }
    }

    Ok(Query::NodeList(matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_kind() {
        assert_eq!(SelectorKind::of("<p>hi</p>"), SelectorKind::Html);
        assert_eq!(SelectorKind::of(".missing-class"), SelectorKind::Css);
        assert_eq!(SelectorKind::of(" <p>"), SelectorKind::Css);
        assert_eq!(SelectorKind::of(""), SelectorKind::Css);
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!(Selector::from("<li>a</li><li>b</li>").kind(), Some(SelectorKind::Html));
        assert_eq!(Selector::from("div > span").kind(), Some(SelectorKind::Css));
        assert_eq!(Selector::ready(|| {}).kind(), None);
    }
}
