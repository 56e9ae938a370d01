// ============================================================================
// CONTENT DESCRIPTOR - Texto, estilos, eventos y atributos/propiedades
// ============================================================================
// La clasificación de cada entrada depende del elemento recién creado:
// - clave presente en el elemento (`key in element`) + función -> listener
// - clave presente en el elemento + valor truthy -> setAttribute
// - cualquier otra entrada -> asignación directa de propiedad JS
// El descriptor se consume por valor y se particiona una sola vez.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::{
    add_listener, append_text, attribute_text, has_property, set_attribute, set_property, set_style,
    Handler,
};

/// Valor de una entrada del descriptor
#[derive(Debug)]
pub enum PropValue {
    Handler(Handler),
    Value(JsValue),
}

/// Descriptor de contenido en forma de mapa
#[derive(Debug, Default)]
pub struct Props {
    text: Option<String>,
    style: Vec<(String, JsValue)>,
    entries: Vec<(String, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texto que se agrega como nodo hijo
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Propiedad de estilo, asignada como `element.style[name] = value`
    pub fn style(mut self, name: impl Into<String>, value: impl Into<JsValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.style.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.style.push((name, value)),
        }
        self
    }

    /// Handler Rust para la clave `name`
    pub fn on<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        self.handler(name, Handler::new(handler))
    }

    /// Handler (Rust o JS) para la clave `name`
    pub fn handler(self, name: impl Into<String>, handler: Handler) -> Self {
        self.insert(name.into(), PropValue::Handler(handler))
    }

    /// Valor arbitrario para la clave `name`
    pub fn set(self, name: impl Into<String>, value: impl Into<JsValue>) -> Self {
        self.insert(name.into(), PropValue::Value(value.into()))
    }

    /// Insertar o reemplazar una entrada (semántica de mapa)
    pub fn insert(mut self, name: String, value: PropValue) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.style.is_empty() && self.entries.is_empty()
    }

    /// Particionar las entradas contra el conjunto de propiedades de `element`
    pub fn partition(self, element: &Element) -> Result<Resolved, JsValue> {
        let mut resolved = Resolved {
            text: self.text,
            styles: self.style,
            ..Resolved::default()
        };

        for (name, value) in self.entries {
            let is_member = has_property(element, &name)?;
            match value {
                PropValue::Handler(handler) if is_member => resolved.listeners.push((name, handler)),
                PropValue::Handler(handler) => resolved.properties.push((name, handler.into_js())),
                PropValue::Value(value) if is_member && value.is_truthy() => {
                    resolved.attributes.push((name, attribute_text(&value)));
                }
                PropValue::Value(value) => resolved.properties.push((name, value)),
            }
        }

        Ok(resolved)
    }
}

/// Resultado de la partición: conjuntos disjuntos listos para aplicar
#[derive(Debug, Default)]
pub struct Resolved {
    pub text: Option<String>,
    pub styles: Vec<(String, JsValue)>,
    pub listeners: Vec<(String, Handler)>,
    pub attributes: Vec<(String, String)>,
    pub properties: Vec<(String, JsValue)>,
}

impl Resolved {
    /// Aplicar sobre el elemento: texto, estilos, listeners, atributos y por último propiedades
    pub fn apply(self, element: &Element) -> Result<(), JsValue> {
        if let Some(text) = &self.text {
            append_text(element, text)?;
        }

        for (name, value) in &self.styles {
            set_style(element, name, value)?;
        }

        for (name, handler) in self.listeners {
            add_listener(element, &name, handler)?;
        }

        for (name, value) in &self.attributes {
            set_attribute(element, name, value)?;
        }

        for (name, value) in &self.properties {
            set_property(element, name, value)?;
        }

        Ok(())
    }
}

/// Descriptor de contenido
#[derive(Debug, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Props(Props),
}

impl Content {
    /// Aplicar el contenido sobre un elemento recién creado
    pub fn apply(self, element: &Element) -> Result<(), JsValue> {
        match self {
            Content::None => Ok(()),
            Content::Text(text) => append_text(element, &text),
            Content::Props(props) => props.partition(element)?.apply(element),
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::None
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Props> for Content {
    fn from(props: Props) -> Self {
        Content::Props(props)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(content: Option<T>) -> Self {
        content.map(Into::into).unwrap_or_default()
    }
}
