// ============================================================================
// CHILDREN DESCRIPTOR - Hijos de un elemento construido
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use crate::dom::{append_child, append_text};

/// Un hijo dentro de una secuencia: texto o nodo existente
#[derive(Debug, Clone)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl Child {
    fn append_to(&self, parent: &Element) -> Result<(), JsValue> {
        match self {
            Child::Text(text) => append_text(parent, text),
            Child::Node(node) => append_child(parent, node),
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Node(element.into())
    }
}

impl From<&Element> for Child {
    fn from(element: &Element) -> Self {
        Child::Node(element.clone().into())
    }
}

/// Descriptor de hijos
#[derive(Debug, Clone, Default)]
pub enum Children {
    #[default]
    None,
    Text(String),
    Nodes(Vec<Child>),
    Node(Node),
}

impl Children {
    /// Sin hijos: `None` o texto vacío (una secuencia vacía no cuenta como vacía)
    pub fn is_empty(&self) -> bool {
        match self {
            Children::None => true,
            Children::Text(text) => text.is_empty(),
            Children::Nodes(_) | Children::Node(_) => false,
        }
    }

    /// Agregar los hijos al final de `parent`, en orden (sin efecto si está vacío)
    pub fn append_to(&self, parent: &Element) -> Result<(), JsValue> {
        match self {
            Children::None => Ok(()),
            Children::Text(text) if text.is_empty() => Ok(()),
            Children::Text(text) => append_text(parent, text),
            Children::Nodes(children) => {
                for child in children {
                    child.append_to(parent)?;
                }
                Ok(())
            }
            Children::Node(node) => append_child(parent, node),
        }
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::None
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Vec<Child>> for Children {
    fn from(children: Vec<Child>) -> Self {
        Children::Nodes(children)
    }
}

impl<const N: usize> From<[Child; N]> for Children {
    fn from(children: [Child; N]) -> Self {
        Children::Nodes(children.into())
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::Node(node)
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Children::Node(element.into())
    }
}

impl From<&Element> for Children {
    fn from(element: &Element) -> Self {
        Children::Node(element.clone().into())
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(children: Option<T>) -> Self {
        children.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_children() {
        assert!(Children::None.is_empty());
        assert!(Children::from("").is_empty());
        assert!(Children::from(None::<&str>).is_empty());
        assert!(!Children::from("Go").is_empty());
    }

    #[test]
    fn test_empty_sequence_is_not_empty() {
        assert!(!Children::from(Vec::<Child>::new()).is_empty());
        assert!(!Children::from([Child::from("a"), Child::from("b")]).is_empty());
    }
}
