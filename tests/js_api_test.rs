//! JS-facing API WASM tests (argumentos JsValue sin tipo)
//!
//! **Run with**: `wasm-pack test --chrome --headless`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use domkit::js_api::{button_js, children_from_js, create_element_js, div_js, query_js, span_js};
use domkit::Children;

wasm_bindgen_test_configure!(run_in_browser);

fn object(entries: &[(&str, JsValue)]) -> js_sys::Object {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object
}

fn get(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap()
}

fn counter_function(calls: &Rc<Cell<u32>>) -> JsValue {
    let calls = calls.clone();
    Closure::<dyn FnMut()>::new(move || calls.set(calls.get() + 1)).into_js_value()
}

#[wasm_bindgen_test]
fn test_create_element_with_string_content() {
    let element = create_element_js("div", "hello".into(), JsValue::UNDEFINED).unwrap();
    assert_eq!(element.tag_name(), "DIV");
    assert_eq!(element.child_nodes().length(), 1);
    assert_eq!(element.text_content().as_deref(), Some("hello"));
}

#[wasm_bindgen_test]
fn test_button_with_click_handler_and_text() {
    let calls = Rc::new(Cell::new(0));
    let content = object(&[("click", counter_function(&calls))]);

    let element = button_js(content.into(), "Go".into()).unwrap();
    assert_eq!(element.tag_name(), "BUTTON");
    assert_eq!(element.text_content().as_deref(), Some("Go"));

    element.dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn test_content_object_is_not_mutated() {
    let style = object(&[("color", "red".into())]);
    let content = object(&[
        ("text", "label".into()),
        ("style", style.into()),
        ("id", "kept".into()),
        ("customKey", 7.into()),
    ]);

    let element = div_js(content.clone().into(), JsValue::NULL).unwrap();

    assert_eq!(js_sys::Object::keys(&content).length(), 4);
    assert_eq!(element.text_content().as_deref(), Some("label"));
    assert_eq!(element.get_attribute("id").as_deref(), Some("kept"));
    assert_eq!(get(&element, "customKey").as_f64(), Some(7.0));
    let color = element.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("color").unwrap();
    assert_eq!(color, "red");

    // El mismo objeto se puede reutilizar
    let again = div_js(content.into(), JsValue::NULL).unwrap();
    assert_eq!(again.text_content().as_deref(), Some("label"));
}

#[wasm_bindgen_test]
fn test_null_style_is_ignored() {
    let content = object(&[("style", JsValue::NULL)]);
    let element = span_js(content.into(), JsValue::UNDEFINED).unwrap();
    assert!(!element.has_attribute("style"));
}

#[wasm_bindgen_test]
fn test_string_style_goes_through_attribute_routing() {
    let content = object(&[("style", "color: blue".into())]);
    let element = div_js(content.into(), JsValue::UNDEFINED).unwrap();
    assert_eq!(element.get_attribute("style").as_deref(), Some("color: blue"));
}

#[wasm_bindgen_test]
fn test_non_string_text_is_not_a_text_node() {
    let content = object(&[("text", 5.into())]);
    let element = div_js(content.into(), JsValue::UNDEFINED).unwrap();
    assert_eq!(element.child_nodes().length(), 0);
    assert_eq!(get(&element, "text").as_f64(), Some(5.0));
}

#[wasm_bindgen_test]
fn test_children_array_mixing_strings_and_nodes() {
    let inner = span_js("x".into(), JsValue::UNDEFINED).unwrap();
    let children = js_sys::Array::of3(&"a".into(), &inner, &"b".into());

    let element = div_js(JsValue::UNDEFINED, children.into()).unwrap();
    assert_eq!(element.child_nodes().length(), 3);
    assert_eq!(element.text_content().as_deref(), Some("axb"));
}

#[wasm_bindgen_test]
fn test_non_node_child_is_an_error() {
    let children = js_sys::Array::of1(&42.into());
    assert!(div_js(JsValue::UNDEFINED, children.into()).is_err());
    assert!(div_js(JsValue::UNDEFINED, js_sys::Object::new().into()).is_err());
}

#[wasm_bindgen_test]
fn test_falsy_children_are_empty() {
    for value in [JsValue::UNDEFINED, JsValue::NULL, JsValue::FALSE, "".into(), 0.into()] {
        assert!(matches!(children_from_js(&value).unwrap(), Children::None));
    }
}

#[wasm_bindgen_test]
fn test_query_html_and_selector() {
    let parsed = query_js("<p>hi</p>".into(), None).unwrap();
    let paragraph = parsed.dyn_into::<Element>().expect("single element");
    assert_eq!(paragraph.text_content().as_deref(), Some("hi"));

    let missing = query_js(".missing-class".into(), None).unwrap();
    assert!(missing.is_instance_of::<web_sys::NodeList>());
    assert_eq!(missing.unchecked_ref::<web_sys::NodeList>().length(), 0);
}

#[wasm_bindgen_test]
async fn test_query_with_function_runs_it_later() {
    let calls = Rc::new(Cell::new(0));
    let result = query_js(counter_function(&calls), None).unwrap();
    assert!(result.is_undefined());
    assert_eq!(calls.get(), 0);

    TimeoutFuture::new(10).await;
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn test_query_rejects_other_selectors() {
    assert!(query_js(3.into(), None).is_err());
}
