use anyhow::Context;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCollection, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::{Dom, ElementSpec, Viewport};

/// [`Dom`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
    root: Element,
}

fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        tracing::warn!(?err, "{what} failed");
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

impl WebDom {
    pub fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().context("No global window")?;
        let document = window.document().context("Window has no document")?;
        let root = document
            .document_element()
            .context("Document has no root element")?;
        Ok(Self {
            window,
            document,
            root,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_class_name(class))
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_tag_name(tag))
    }

    fn elements_by_class_fragment(&self, fragment: &str) -> Vec<Element> {
        let selector = format!("[class*=\"{fragment}\"]");
        match self.document.query_selector_all(&selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(err) => {
                tracing::warn!(?err, %selector, "querySelectorAll failed");
                Vec::new()
            }
        }
    }

    fn descendants_by_class(&self, parent: &Element, class: &str) -> Vec<Element> {
        collect(parent.get_elements_by_class_name(class))
    }

    fn closest_by_class(&self, node: &Element, class: &str) -> Option<Element> {
        node.closest(&format!(".{class}")).ok().flatten()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_err(node.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_err(node.class_list().remove_1(class), "classList.remove");
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        warn_on_err(node.set_attribute(name, value), "setAttribute");
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        warn_on_err(node.remove_attribute(name), "removeAttribute");
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if value.is_empty() {
            warn_on_err(style.remove_property(property), "style.removeProperty");
        } else {
            warn_on_err(style.set_property(property, value), "style.setProperty");
        }
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn clear_children(&self, node: &Element) {
        node.set_inner_html("");
    }

    fn append_child(&self, parent: &Element, spec: &ElementSpec) -> Option<Element> {
        let element = match self.document.create_element(&spec.tag) {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!(?err, tag = %spec.tag, "createElement failed");
                return None;
            }
        };
        if !spec.classes.is_empty() {
            element.set_class_name(&spec.classes.join(" "));
        }
        for (name, value) in &spec.attributes {
            warn_on_err(element.set_attribute(name, value), "setAttribute");
        }
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        match parent.append_child(&element) {
            Ok(_) => Some(element),
            Err(err) => {
                tracing::warn!(?err, "appendChild failed");
                None
            }
        }
    }

    fn viewport_top(&self, node: &Element) -> f64 {
        node.get_bounding_client_rect().top()
    }

    fn viewport(&self) -> Viewport {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
        };
        Viewport {
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
            scroll_y: self.window.scroll_y().unwrap_or_default(),
        }
    }

    fn scroll_to(&self, top: f64, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
