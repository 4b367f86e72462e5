use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Dom, ElementSpec, Viewport};

/// Handle to a node owned by a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Offset of the top edge from the top of the document.
    top: f64,
}

#[derive(Debug)]
struct Inner {
    nodes: Vec<NodeData>,
    viewport: Viewport,
    last_scroll: Option<(f64, bool)>,
}

/// Arena-backed document used natively and in tests.
///
/// Layout is not computed: every node has an explicit document offset which
/// defaults to its parent's. Detached nodes stay in the arena but are
/// invisible to every query.
#[derive(Debug)]
pub struct MemoryDom {
    inner: RefCell<Inner>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    const ROOT: NodeId = NodeId(0);
    const BODY: NodeId = NodeId(1);

    /// An empty `<html><body></body></html>` document with a 1280x800 window.
    pub fn new() -> Self {
        let html = NodeData {
            tag: "html".to_string(),
            children: vec![Self::BODY],
            ..Default::default()
        };
        let body = NodeData {
            tag: "body".to_string(),
            parent: Some(Self::ROOT),
            ..Default::default()
        };
        Self {
            inner: RefCell::new(Inner {
                nodes: vec![html, body],
                viewport: Viewport {
                    width: 1280.0,
                    height: 800.0,
                    scroll_y: 0.0,
                },
                last_scroll: None,
            }),
        }
    }

    /// Append an element and return its handle.
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.nodes.len());
        let top = inner.nodes[parent.0].top;
        inner.nodes.push(NodeData {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes.into_iter().collect(),
            text: spec.text.unwrap_or_default(),
            parent: Some(parent),
            top,
            ..Default::default()
        });
        inner.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_document_top(&self, node: NodeId, top: f64) {
        self.inner.borrow_mut().nodes[node.0].top = top;
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.viewport.width = width;
        inner.viewport.height = height;
    }

    /// Move the window without recording a programmatic scroll.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.inner.borrow_mut().viewport.scroll_y = scroll_y;
    }

    /// Target and smoothness of the most recent [`Dom::scroll_to`] call.
    pub fn last_scroll(&self) -> Option<(f64, bool)> {
        self.inner.borrow().last_scroll
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.inner.borrow().nodes[node.0].tag.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.inner.borrow().nodes[node.0].text.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.inner.borrow().nodes[node.0].style.get(property).cloned()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner.borrow().nodes[node.0].children.clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.inner.borrow().nodes[node.0].classes.clone()
    }

    /// Attached nodes in document order, starting at `from` (inclusive).
    fn walk(&self, from: NodeId) -> Vec<NodeId> {
        let inner = self.inner.borrow();
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(inner.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn find_all(&self, from: NodeId, pred: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        let ids = self.walk(from);
        let inner = self.inner.borrow();
        ids.into_iter()
            .filter(|id| pred(&inner.nodes[id.0]))
            .collect()
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        Self::ROOT
    }

    fn body(&self) -> Option<NodeId> {
        Some(Self::BODY)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_all(Self::ROOT, |n| n.attributes.get("id").is_some_and(|v| v == id))
            .into_iter()
            .next()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(Self::ROOT, |n| n.classes.iter().any(|c| c == class))
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(Self::ROOT, |n| n.tag.eq_ignore_ascii_case(tag))
    }

    fn elements_by_class_fragment(&self, fragment: &str) -> Vec<NodeId> {
        self.find_all(Self::ROOT, |n| n.classes.join(" ").contains(fragment))
    }

    fn descendants_by_class(&self, parent: &NodeId, class: &str) -> Vec<NodeId> {
        self.find_all(*parent, |n| n.classes.iter().any(|c| c == class))
            .into_iter()
            .filter(|id| id != parent)
            .collect()
    }

    fn closest_by_class(&self, node: &NodeId, class: &str) -> Option<NodeId> {
        let inner = self.inner.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            let data = &inner.nodes[id.0];
            if data.classes.iter().any(|c| c == class) {
                return Some(id);
            }
            current = data.parent;
        }
        None
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.inner.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let classes = &mut inner.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.inner.borrow_mut().nodes[node.0]
            .classes
            .retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.inner.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.inner.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        self.inner.borrow_mut().nodes[node.0].attributes.remove(name);
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.inner.borrow_mut().nodes[node.0].text = text.to_string();
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        let style = &mut inner.nodes[node.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
    }

    fn value(&self, node: &NodeId) -> String {
        self.inner.borrow().nodes[node.0].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.inner.borrow_mut().nodes[node.0].value = value.to_string();
    }

    fn clear_children(&self, node: &NodeId) {
        let mut inner = self.inner.borrow_mut();
        let children = std::mem::take(&mut inner.nodes[node.0].children);
        for child in children {
            inner.nodes[child.0].parent = None;
        }
    }

    fn append_child(&self, parent: &NodeId, spec: &ElementSpec) -> Option<NodeId> {
        Some(self.append(*parent, spec.clone()))
    }

    fn viewport_top(&self, node: &NodeId) -> f64 {
        let inner = self.inner.borrow();
        inner.nodes[node.0].top - inner.viewport.scroll_y
    }

    fn viewport(&self) -> Viewport {
        self.inner.borrow().viewport
    }

    fn scroll_to(&self, top: f64, smooth: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.viewport.scroll_y = top.max(0.0);
        inner.last_scroll = Some((top, smooth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDom, NodeId, NodeId) {
        let dom = MemoryDom::new();
        let body = dom.body().unwrap();
        let list = dom.append(body, ElementSpec::new("ul").attr("id", "list").class("menu"));
        let item = dom.append(list, ElementSpec::new("li").class("entry").text("one"));
        (dom, list, item)
    }

    #[test]
    fn queries_follow_document_order() {
        let (dom, list, first) = sample();
        let second = dom.append(list, ElementSpec::new("li").class("entry"));
        assert_eq!(dom.elements_by_class("entry"), vec![first, second]);
        assert_eq!(dom.element_by_id("list"), Some(list));
        assert_eq!(dom.elements_by_tag("LI").len(), 2);
        assert_eq!(dom.descendant_by_class(&list, "entry"), Some(first));
        assert_eq!(dom.descendants_by_class(&list, "entry"), vec![first, second]);
        assert!(dom.descendants_by_class(&first, "entry").is_empty());
        assert_eq!(dom.closest_by_class(&first, "menu"), Some(list));
        assert_eq!(dom.closest_by_class(&first, "entry"), Some(first));
    }

    #[test]
    fn class_fragments_match_substrings() {
        let (dom, list, _) = sample();
        let card = dom.append(list, ElementSpec::new("div").class("card").class("slide-up-delay"));
        assert_eq!(dom.elements_by_class_fragment("slide-up"), vec![card]);
        assert_eq!(dom.elements_by_class_fragment("ard sli"), vec![card]);
        assert!(dom.elements_by_class_fragment("fade-in").is_empty());
    }

    #[test]
    fn cleared_children_are_detached() {
        let (dom, list, item) = sample();
        dom.clear_children(&list);
        assert!(dom.children(list).is_empty());
        assert!(dom.elements_by_class("entry").is_empty());
        assert_eq!(dom.closest_by_class(&item, "menu"), None);
    }

    #[test]
    fn classes_are_a_set() {
        let (dom, _, item) = sample();
        dom.add_class(&item, "open");
        dom.add_class(&item, "open");
        assert_eq!(dom.classes(item), vec!["entry", "open"]);
        dom.toggle_class(&item, "open", false);
        assert!(!dom.has_class(&item, "open"));
    }

    #[test]
    fn geometry_tracks_scroll() {
        let (dom, list, _) = sample();
        dom.set_document_top(list, 1000.0);
        assert_eq!(dom.viewport_top(&list), 1000.0);
        dom.scroll_to(400.0, true);
        assert_eq!(dom.viewport_top(&list), 600.0);
        assert_eq!(dom.document_top(&list), 1000.0);
        assert_eq!(dom.last_scroll(), Some((400.0, true)));
    }

    #[test]
    fn empty_style_value_removes_property() {
        let (dom, list, _) = sample();
        dom.set_style(&list, "display", "none");
        assert_eq!(dom.style(list, "display").as_deref(), Some("none"));
        dom.set_style(&list, "display", "");
        assert_eq!(dom.style(list, "display"), None);
    }
}
