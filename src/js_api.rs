// ============================================================================
// JS API - Funciones exportadas a JavaScript (argumentos sin tipo)
// ============================================================================
// Convierte los argumentos JsValue a los descriptores tipados y delega en
// `build` / `query`. El objeto de contenido del llamador no se modifica.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::children::{Child, Children};
use crate::content::{Content, PropValue, Props};
use crate::dom::{build, Handler};
use crate::query::{query, Selector};

/// Convertir el argumento `content` (string | objeto | vacío)
pub fn content_from_js(value: &JsValue) -> Result<Content, JsValue> {
    if let Some(text) = value.as_string() {
        return Ok(Content::Text(text));
    }
    if !value.is_truthy() {
        return Ok(Content::None);
    }
    if value.is_object() || value.is_function() {
        return Ok(Content::Props(props_from_object(value.unchecked_ref())?));
    }
    Ok(Content::None)
}

fn props_from_object(object: &js_sys::Object) -> Result<Props, JsValue> {
    let mut props = Props::new();

    let text = js_sys::Reflect::get(object, &JsValue::from_str("text"))?;
    let text_consumed = match text.as_string() {
        Some(text) => {
            props = props.text(text);
            true
        }
        None => false,
    };

    // typeof null === 'object': se consume sin efecto
    let style = js_sys::Reflect::get(object, &JsValue::from_str("style"))?;
    let style_consumed = style.is_null() || (style.is_object() && !style.is_function());
    if style.is_object() && !style.is_function() {
        let style = style.unchecked_ref::<js_sys::Object>();
        for key in js_sys::Object::keys(style).iter() {
            let Some(name) = key.as_string() else { continue };
            let value = js_sys::Reflect::get(style, &key)?;
            props = props.style(name, value);
        }
    }

    for key in js_sys::Object::keys(object).iter() {
        let Some(name) = key.as_string() else { continue };
        if (name == "text" && text_consumed) || (name == "style" && style_consumed) {
            continue;
        }

        let value = js_sys::Reflect::get(object, &key)?;
        let value = match value.dyn_into::<js_sys::Function>() {
            Ok(function) => PropValue::Handler(Handler::Js(function)),
            Err(value) => PropValue::Value(value),
        };
        props = props.insert(name, value);
    }

    Ok(props)
}

/// Convertir el argumento `children` (vacío | string | array | nodo)
pub fn children_from_js(value: &JsValue) -> Result<Children, JsValue> {
    if !value.is_truthy() {
        return Ok(Children::None);
    }
    if let Some(text) = value.as_string() {
        return Ok(Children::Text(text));
    }
    if js_sys::Array::is_array(value) {
        let entries = value.unchecked_ref::<js_sys::Array>();
        let children = entries
            .iter()
            .map(|entry| match entry.as_string() {
                Some(text) => Ok(Child::Text(text)),
                None => node_from_js(entry).map(Child::Node),
            })
            .collect::<Result<Vec<_>, JsValue>>()?;
        return Ok(Children::Nodes(children));
    }

    node_from_js(value.clone()).map(Children::Node)
}

fn node_from_js(value: JsValue) -> Result<Node, JsValue> {
    value
        .dyn_into::<Node>()
        .map_err(|_| JsValue::from_str("Child is not a Node"))
}

/// Convertir el argumento `selector` (función | string)
pub fn selector_from_js(value: JsValue) -> Result<Selector, JsValue> {
    if let Some(selector) = value.as_string() {
        return Ok(Selector::from(selector));
    }
    value
        .dyn_into::<js_sys::Function>()
        .map(Selector::from)
        .map_err(|_| JsValue::from_str("Selector must be a function or a string"))
}

/// `createElement(tag, content, children)`
#[wasm_bindgen(js_name = createElement)]
pub fn create_element_js(tag: &str, content: JsValue, children: JsValue) -> Result<Element, JsValue> {
    build(tag, content_from_js(&content)?, children_from_js(&children)?)
}

#[wasm_bindgen(js_name = div)]
pub fn div_js(content: JsValue, children: JsValue) -> Result<Element, JsValue> {
    create_element_js("div", content, children)
}

#[wasm_bindgen(js_name = span)]
pub fn span_js(content: JsValue, children: JsValue) -> Result<Element, JsValue> {
    create_element_js("span", content, children)
}

#[wasm_bindgen(js_name = button)]
pub fn button_js(content: JsValue, children: JsValue) -> Result<Element, JsValue> {
    create_element_js("button", content, children)
}

/// `query(selector, context)`: undefined, un elemento o la colección
#[wasm_bindgen(js_name = query)]
pub fn query_js(selector: JsValue, context: Option<Element>) -> Result<JsValue, JsValue> {
    let selector = selector_from_js(selector)?;
    Ok(query(selector, context.as_ref())?.into_js())
}
