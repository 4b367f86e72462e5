use crate::catalog;
use crate::core::{Command, Dom, ElementSpec};
use crate::models::ProjectRecord;
use crate::ui::Page;

use super::Feature;
use super::filter::CARD_CLASS;

pub const MODAL_ID: &str = "projectModal";
pub const CLOSE_ID: &str = "modalClose";
pub const PROJECT_ATTRIBUTE: &str = "data-project";
pub const ACTIVE_CLASS: &str = "active";
pub const TECH_TAG_CLASS: &str = "tech-tag";
pub const CANCEL_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    CardClicked(usize),
    CloseClicked,
    /// Click that landed on the modal backdrop itself, not its content.
    BackdropClicked,
    KeyPressed(String),
}

struct ModalFields<N> {
    image: N,
    title: N,
    description: N,
    tech: N,
    links: N,
}

/// Project detail dialog populated from the static catalog.
pub struct ProjectModal<D: Dom> {
    modal: D::Node,
    close: D::Node,
    body: Option<D::Node>,
    fields: ModalFields<D::Node>,
    cards: Vec<D::Node>,
}

impl<D: Dom> ProjectModal<D> {
    /// The dialog and its close control are required, as are the fields
    /// it populates.
    pub fn bind(dom: &D) -> Option<Self> {
        let lookup = |id: &str| {
            let node = dom.element_by_id(id);
            if node.is_none() {
                tracing::debug!("No #{id} element, project modal disabled");
            }
            node
        };
        let modal = lookup(MODAL_ID)?;
        let close = lookup(CLOSE_ID)?;
        let fields = ModalFields {
            image: lookup("modalImage")?,
            title: lookup("modalTitle")?,
            description: lookup("modalDescription")?,
            tech: lookup("modalTechList")?,
            links: lookup("modalLinks")?,
        };
        Some(Self {
            close,
            body: dom.body(),
            cards: dom.elements_by_class(CARD_CLASS),
            modal,
            fields,
        })
    }

    pub fn modal(&self) -> &D::Node {
        &self.modal
    }

    pub fn close_control(&self) -> &D::Node {
        &self.close
    }

    pub fn cards(&self) -> &[D::Node] {
        &self.cards
    }

    pub fn is_open(&self, dom: &D) -> bool {
        dom.has_class(&self.modal, ACTIVE_CLASS)
    }

    /// Populate and show the modal for `project_id`. Unknown ids leave the
    /// modal untouched and return `false`.
    pub fn open(&self, dom: &D, project_id: &str) -> bool {
        let Some(record) = catalog::lookup(project_id) else {
            tracing::debug!(project_id, "Unknown project, modal stays closed");
            return false;
        };
        self.populate(dom, record);
        dom.add_class(&self.modal, ACTIVE_CLASS);
        if let Some(body) = &self.body {
            dom.set_style(body, "overflow", "hidden");
        }
        true
    }

    pub fn close(&self, dom: &D) {
        dom.remove_class(&self.modal, ACTIVE_CLASS);
        if let Some(body) = &self.body {
            dom.set_style(body, "overflow", "");
        }
    }

    fn populate(&self, dom: &D, record: &ProjectRecord) {
        let fields = &self.fields;
        dom.set_text(&fields.image, record.glyph);
        dom.set_text(&fields.title, record.title);
        dom.set_text(&fields.description, record.description);

        dom.clear_children(&fields.tech);
        for tech in record.technologies {
            dom.append_child(
                &fields.tech,
                &ElementSpec::new("span").class(TECH_TAG_CLASS).text(*tech),
            );
        }

        dom.clear_children(&fields.links);
        for link in record.links {
            let anchor = link
                .classes()
                .iter()
                .fold(ElementSpec::new("a"), |spec, class| spec.class(*class))
                .attr("href", link.url)
                .text(link.label);
            dom.append_child(&fields.links, &anchor);
        }
    }
}

impl<D: Dom> Feature<D> for ProjectModal<D> {
    type Message = ModalMessage;

    fn update(&mut self, message: ModalMessage, page: &Page<D>) -> Command<ModalMessage> {
        let dom = &page.dom;
        match message {
            ModalMessage::CardClicked(index) => {
                if let Some(id) = self
                    .cards
                    .get(index)
                    .and_then(|card| dom.attribute(card, PROJECT_ATTRIBUTE))
                {
                    self.open(dom, &id);
                }
            }
            ModalMessage::CloseClicked | ModalMessage::BackdropClicked => self.close(dom),
            ModalMessage::KeyPressed(key) => {
                if key == CANCEL_KEY && self.is_open(dom) {
                    self.close(dom);
                }
            }
        }
        Command::none()
    }
}
