use crate::core::{Command, Dom};
use crate::ui::Page;

use super::Feature;

pub const BUTTON_ID: &str = "mobileMenuBtn";
pub const NAV_CLASS: &str = "nav-menu";
pub const LINK_CLASS: &str = "nav-link";
pub const OPEN_CLASS: &str = "open";
pub const CLOSED_GLYPH: &str = "☰";
pub const OPEN_GLYPH: &str = "✕";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    ButtonClicked,
    LinkClicked(usize),
    ViewportResized,
}

/// Hamburger menu for narrow viewports.
pub struct MobileMenu<D: Dom> {
    button: D::Node,
    nav: D::Node,
    links: Vec<D::Node>,
}

impl<D: Dom> MobileMenu<D> {
    pub fn bind(dom: &D) -> Option<Self> {
        let nav = dom.elements_by_class(NAV_CLASS).into_iter().next();
        let (Some(button), Some(nav)) = (dom.element_by_id(BUTTON_ID), nav) else {
            tracing::debug!("Mobile menu markup missing, menu disabled");
            return None;
        };
        let links = dom.elements_by_class(LINK_CLASS);
        Some(Self { button, nav, links })
    }

    pub fn button(&self) -> &D::Node {
        &self.button
    }

    pub fn links(&self) -> &[D::Node] {
        &self.links
    }

    pub fn is_open(&self, dom: &D) -> bool {
        dom.has_class(&self.nav, OPEN_CLASS)
    }

    fn set_open(&self, dom: &D, open: bool) {
        dom.toggle_class(&self.nav, OPEN_CLASS, open);
        dom.set_text(&self.button, if open { OPEN_GLYPH } else { CLOSED_GLYPH });
    }
}

impl<D: Dom> Feature<D> for MobileMenu<D> {
    type Message = MenuMessage;

    fn update(&mut self, message: MenuMessage, page: &Page<D>) -> Command<MenuMessage> {
        match message {
            MenuMessage::ButtonClicked => {
                let open = !self.is_open(&page.dom);
                self.set_open(&page.dom, open);
            }
            MenuMessage::LinkClicked(_) => self.set_open(&page.dom, false),
            MenuMessage::ViewportResized => {
                if page.dom.viewport().width > page.config.mobile_breakpoint {
                    self.set_open(&page.dom, false);
                }
            }
        }
        Command::none()
    }
}
