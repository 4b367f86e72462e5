mod memory;

use std::fmt::Debug;

pub use memory::{MemoryDom, NodeId};

/// Window geometry at the time of a query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

/// Description of an element to create under a parent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementSpec {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// The document operations the page controller needs.
///
/// Mutations take `&self`: both the browser DOM and [`MemoryDom`] are
/// interior-mutable, and handlers never hold a node across an await point.
/// Failing mutations are absorbed by the implementation.
pub trait Dom {
    type Node: Clone + PartialEq + Debug;

    /// The `<html>` element.
    fn root(&self) -> Self::Node;
    fn body(&self) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node>;
    /// Elements whose class attribute contains `fragment` anywhere, like the
    /// CSS selector `[class*="fragment"]`.
    fn elements_by_class_fragment(&self, fragment: &str) -> Vec<Self::Node>;
    /// Descendants of `parent` carrying `class`, in document order.
    fn descendants_by_class(&self, parent: &Self::Node, class: &str) -> Vec<Self::Node>;
    /// First descendant of `parent` carrying `class`.
    fn descendant_by_class(&self, parent: &Self::Node, class: &str) -> Option<Self::Node> {
        self.descendants_by_class(parent, class).into_iter().next()
    }
    /// Nearest ancestor (or the node itself) carrying `class`.
    fn closest_by_class(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);

    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Current value of a form control. Non-controls read as empty.
    fn value(&self, node: &Self::Node) -> String;
    fn set_value(&self, node: &Self::Node, value: &str);

    fn clear_children(&self, node: &Self::Node);
    fn append_child(&self, parent: &Self::Node, spec: &ElementSpec) -> Option<Self::Node>;

    /// Distance from the top of the viewport to the node's top edge.
    fn viewport_top(&self, node: &Self::Node) -> f64;
    /// Distance from the top of the document to the node's top edge.
    fn document_top(&self, node: &Self::Node) -> f64 {
        self.viewport_top(node) + self.viewport().scroll_y
    }

    fn viewport(&self) -> Viewport;
    fn scroll_to(&self, top: f64, smooth: bool);

    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }
}
