// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, NodeList, Text, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener document o error si no hay ninguno
pub fn require_document() -> Result<Document, JsValue> {
    document().ok_or_else(|| JsValue::from_str("No document"))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    require_document()?.create_element(tag)
}

/// Crear nodo de texto
pub fn create_text_node(text: &str) -> Result<Text, JsValue> {
    Ok(require_document()?.create_text_node(text))
}

/// Agregar hijo (cualquier nodo; un nodo ya insertado se mueve)
pub fn append_child(parent: &Element, child: &Node) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Agregar nodo de texto al final
pub fn append_text(parent: &Element, text: &str) -> Result<(), JsValue> {
    let node = create_text_node(text)?;
    append_child(parent, &node)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Verificar si `name in target` (propiedad propia o heredada).
/// Las claves de `Object.prototype` (`constructor`, `toString`, ...) no cuentan:
/// no son enumerables y `for (key in element)` nunca las visita.
pub fn has_property(target: &JsValue, name: &str) -> Result<bool, JsValue> {
    let key = JsValue::from_str(name);
    if js_sys::Reflect::has(&js_sys::Object::new(), &key)? {
        return Ok(false);
    }
    js_sys::Reflect::has(target, &key)
}

/// Asignar `target[name] = value`
pub fn set_property(target: &JsValue, name: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), value).map(|_| ())
}

/// Asignar `element.style[name] = value` (acepta claves camelCase).
/// Si el elemento no expone `style` se registra un warning y se ignora.
pub fn set_style(element: &Element, name: &str, value: &JsValue) -> Result<(), JsValue> {
    let style = js_sys::Reflect::get(element, &JsValue::from_str("style"))?;
    if !style.is_object() {
        log::warn!("⚠️ <{}> has no style object, skipping '{}'", element.tag_name(), name);
        return Ok(());
    }
    set_property(&style, name, value)
}

/// Conversión a texto de atributo, equivalente a `String(value)`.
/// Solo para valores truthy (`null.toString()` lanza).
pub fn attribute_text(value: &JsValue) -> String {
    match value.as_string() {
        Some(text) => text,
        None => String::from(value.unchecked_ref::<js_sys::Object>().to_string()),
    }
}

/// `document.readyState` ("loading" | "interactive" | "complete")
pub fn ready_state(document: &Document) -> String {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Query selector all, sobre el contexto dado o sobre el document completo
pub fn query_selector_all(selector: &str, context: Option<&Element>) -> Result<NodeList, JsValue> {
    match context {
        Some(element) => element.query_selector_all(selector),
        None => require_document()?.query_selector_all(selector),
    }
}
