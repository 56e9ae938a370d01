// ============================================================================
// ELEMENT BUILDER - Construcción declarativa de elementos
// ============================================================================
// build(tag, content, children):
// 1. Crea el elemento con el document actual
// 2. Aplica el contenido (texto o Props particionadas contra el elemento)
// 3. Agrega los hijos (texto, secuencia en orden o nodo único)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::children::{Child, Children};
use crate::content::{Content, Props};
use crate::dom::{create_element, set_property, Handler};

/// Crear un elemento `tag` con su contenido e hijos
pub fn build(
    tag: &str,
    content: impl Into<Content>,
    children: impl Into<Children>,
) -> Result<Element, JsValue> {
    let element = create_element(tag)?;
    log::debug!("🧱 build <{}>", tag);

    content.into().apply(&element)?;

    children.into().append_to(&element)?;

    Ok(element)
}

macro_rules! tag_shortcuts {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Atajo para `build(\"", stringify!($name), "\", content, children)`")]
            pub fn $name(
                content: impl Into<Content>,
                children: impl Into<Children>,
            ) -> Result<Element, JsValue> {
                build(stringify!($name), content, children)
            }
        )*
    };
}

tag_shortcuts!(div, span, button, p, a, ul, li, label);

/// Builder fluido sobre `build`
pub struct ElementBuilder {
    tag: String,
    content: Option<String>,
    props: Props,
    properties: Vec<(String, JsValue)>,
    children: Vec<Child>,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            content: None,
            props: Props::new(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Texto del elemento (se agrega antes que los hijos)
    pub fn text(mut self, text: &str) -> Self {
        self.content = Some(text.to_string());
        self
    }

    /// Propiedad de estilo
    pub fn style(mut self, name: &str, value: &str) -> Self {
        self.props = self.props.style(name, value);
        self
    }

    /// Listener para un evento
    pub fn on<F>(mut self, event_type: &str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        self.props = self.props.handler(event_type, Handler::new(handler));
        self
    }

    /// Entrada del descriptor (atributo o propiedad según el elemento)
    pub fn attr(mut self, name: &str, value: impl Into<JsValue>) -> Self {
        self.props = self.props.set(name, value);
        self
    }

    /// Propiedad JS asignada directamente, sin pasar por atributos
    pub fn prop(mut self, name: &str, value: impl Into<JsValue>) -> Self {
        self.properties.push((name.to_string(), value.into()));
        self
    }

    /// Agregar hijo
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Agregar varios hijos
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Result<Element, JsValue> {
        let mut props = self.props;
        if let Some(text) = self.content {
            props = props.text(text);
        }

        let children = if self.children.is_empty() {
            Children::None
        } else {
            Children::Nodes(self.children)
        };

        let element = build(&self.tag, props, children)?;
        for (name, value) in &self.properties {
            set_property(&element, name, value)?;
        }

        Ok(element)
    }
}
