use crate::core::{Command, Dom};
use crate::ui::Page;

use super::Feature;

pub const ITEM_CLASS: &str = "faq-item";
pub const QUESTION_CLASS: &str = "faq-question";
pub const ANSWER_CLASS: &str = "faq-answer";
pub const ICON_CLASS: &str = "question-icon";
pub const ACTIVE_CLASS: &str = "active";
pub const CLOSED_GLYPH: &str = "+";
pub const OPEN_GLYPH: &str = "×";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqMessage {
    QuestionClicked(usize),
}

pub struct FaqItem<N> {
    pub question: N,
    pub answer: Option<N>,
    pub icon: Option<N>,
}

/// Accordion where at most one answer is open. An item is open when its
/// question (and answer) carry `active`.
pub struct FaqAccordion<D: Dom> {
    items: Vec<FaqItem<D::Node>>,
}

impl<D: Dom> FaqAccordion<D> {
    /// Items without a `.faq-question` cannot be clicked and are skipped.
    pub fn bind(dom: &D) -> Option<Self> {
        let items: Vec<_> = dom
            .elements_by_class(ITEM_CLASS)
            .into_iter()
            .filter_map(|item| {
                Some(FaqItem {
                    question: dom.descendant_by_class(&item, QUESTION_CLASS)?,
                    answer: dom.descendant_by_class(&item, ANSWER_CLASS),
                    icon: dom.descendant_by_class(&item, ICON_CLASS),
                })
            })
            .collect();
        if items.is_empty() {
            tracing::debug!("No FAQ items, accordion disabled");
            return None;
        }
        Some(Self { items })
    }

    pub fn items(&self) -> &[FaqItem<D::Node>] {
        &self.items
    }

    pub fn active_items(&self, dom: &D) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, faq)| dom.has_class(&faq.question, ACTIVE_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    fn set_open(dom: &D, faq: &FaqItem<D::Node>, open: bool) {
        dom.toggle_class(&faq.question, ACTIVE_CLASS, open);
        if let Some(answer) = &faq.answer {
            dom.toggle_class(answer, ACTIVE_CLASS, open);
        }
        if let Some(icon) = &faq.icon {
            dom.set_text(icon, if open { OPEN_GLYPH } else { CLOSED_GLYPH });
        }
    }
}

impl<D: Dom> Feature<D> for FaqAccordion<D> {
    type Message = FaqMessage;

    fn update(&mut self, message: FaqMessage, page: &Page<D>) -> Command<FaqMessage> {
        match message {
            FaqMessage::QuestionClicked(index) => {
                let Some(clicked) = self.items.get(index) else {
                    return Command::none();
                };
                let was_open = page.dom.has_class(&clicked.question, ACTIVE_CLASS);
                for faq in &self.items {
                    Self::set_open(&page.dom, faq, false);
                }
                if !was_open {
                    Self::set_open(&page.dom, clicked, true);
                }
            }
        }
        Command::none()
    }
}
