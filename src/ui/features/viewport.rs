use crate::core::{Command, Dom};
use crate::ui::Page;

use super::Feature;

pub const NAVBAR_CLASS: &str = "navbar";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMessage {
    /// Re-evaluate after a scroll, a resize, or at startup.
    Refresh,
}

/// Adds the `visible` marker to elements the first time they come within
/// `reveal_margin` of the viewport bottom. Each element is tracked until it
/// is revealed and then forgotten, so the marker is never removed.
pub struct RevealWatcher<D: Dom> {
    pending: Vec<D::Node>,
}

impl<D: Dom> RevealWatcher<D> {
    /// Track elements carrying one of `classes`, or whose class attribute
    /// contains one of `patterns`.
    pub fn bind(dom: &D, classes: &[String], patterns: &[String]) -> Self {
        let candidates = classes
            .iter()
            .flat_map(|class| dom.elements_by_class(class))
            .chain(patterns.iter().flat_map(|p| dom.elements_by_class_fragment(p)));
        let mut pending: Vec<D::Node> = Vec::new();
        for node in candidates {
            if !dom.has_class(&node, VISIBLE_CLASS) && !pending.contains(&node) {
                pending.push(node);
            }
        }
        Self { pending }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Reveal everything now within range. Returns how many were revealed.
    pub fn check(&mut self, dom: &D, margin: f64) -> usize {
        let threshold = dom.viewport().height - margin;
        let before = self.pending.len();
        self.pending.retain(|node| {
            if dom.viewport_top(node) < threshold {
                dom.add_class(node, VISIBLE_CLASS);
                false
            } else {
                true
            }
        });
        before - self.pending.len()
    }
}

/// Navbar background and reveal-on-scroll, both driven by window geometry.
pub struct ScrollEffects<D: Dom> {
    navbar: Option<D::Node>,
    reveal: RevealWatcher<D>,
}

impl<D: Dom> ScrollEffects<D> {
    pub fn bind(page: &Page<D>) -> Self {
        let navbar = page.dom.elements_by_class(NAVBAR_CLASS).into_iter().next();
        if navbar.is_none() {
            tracing::debug!("No .{NAVBAR_CLASS} element, navbar background fixed");
        }
        let config = &page.config;
        let reveal = RevealWatcher::bind(&page.dom, &config.reveal_classes, &config.reveal_patterns);
        tracing::debug!(pending = reveal.pending(), "Reveal watcher bound");
        Self { navbar, reveal }
    }

    pub fn reveal(&self) -> &RevealWatcher<D> {
        &self.reveal
    }
}

impl<D: Dom> Feature<D> for ScrollEffects<D> {
    type Message = ViewportMessage;

    fn update(&mut self, message: ViewportMessage, page: &Page<D>) -> Command<ViewportMessage> {
        match message {
            ViewportMessage::Refresh => {
                let config = &page.config;
                if let Some(navbar) = &self.navbar {
                    let background = if page.dom.viewport().scroll_y > config.navbar_scroll_threshold
                    {
                        &config.navbar_background_scrolled
                    } else {
                        &config.navbar_background
                    };
                    page.dom.set_style(navbar, "background", background);
                }
                let revealed = self.reveal.check(&page.dom, config.reveal_margin);
                if revealed > 0 {
                    tracing::debug!(revealed, remaining = self.reveal.pending(), "Revealed elements");
                }
            }
        }
        Command::none()
    }
}
