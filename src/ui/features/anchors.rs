use crate::core::{Command, Dom};
use crate::ui::Page;

use super::Feature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMessage {
    Clicked(usize),
}

/// Smooth scrolling for same-page `#fragment` links.
///
/// The host prevents the browser's default jump for every bound anchor; this
/// feature then scrolls so the target sits just below the fixed header.
pub struct SmoothScroll<D: Dom> {
    anchors: Vec<D::Node>,
}

impl<D: Dom> SmoothScroll<D> {
    pub fn bind(dom: &D) -> Option<Self> {
        let anchors: Vec<_> = dom
            .elements_by_tag("a")
            .into_iter()
            .filter(|a| dom.attribute(a, "href").is_some_and(|h| h.starts_with('#')))
            .collect();
        if anchors.is_empty() {
            tracing::debug!("No same-page anchors, smooth scroll disabled");
            return None;
        }
        Some(Self { anchors })
    }

    pub fn anchors(&self) -> &[D::Node] {
        &self.anchors
    }

    /// Element the anchor at `index` points at, if it exists.
    pub fn target(&self, dom: &D, index: usize) -> Option<D::Node> {
        let href = dom.attribute(self.anchors.get(index)?, "href")?;
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        dom.element_by_id(id)
    }
}

impl<D: Dom> Feature<D> for SmoothScroll<D> {
    type Message = AnchorMessage;

    fn update(&mut self, message: AnchorMessage, page: &Page<D>) -> Command<AnchorMessage> {
        match message {
            AnchorMessage::Clicked(index) => match self.target(&page.dom, index) {
                Some(target) => {
                    let top = page.dom.document_top(&target) - page.config.header_offset;
                    page.dom.scroll_to(top, true);
                }
                None => tracing::debug!(index, "Anchor target not found"),
            },
        }
        Command::none()
    }
}
