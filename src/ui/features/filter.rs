use crate::core::{Command, Dom, TimerSlot};
use crate::ui::Page;

use super::Feature;

pub const BUTTON_CLASS: &str = "filter-btn";
pub const CARD_CLASS: &str = "project-card";
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const CATEGORY_ATTRIBUTE: &str = "data-category";
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMessage {
    ButtonClicked(usize),
    /// Second half of showing a card: fade and slide into place.
    CardSettle(usize),
    /// Second half of hiding a card: drop it from layout.
    CardCollapse(usize),
}

/// Category filter over the portfolio grid.
pub struct PortfolioFilter<D: Dom> {
    buttons: Vec<D::Node>,
    cards: Vec<D::Node>,
}

impl<D: Dom> PortfolioFilter<D> {
    /// Bind the filter buttons and cards; both must be present. Exactly one
    /// button ends up active: the one already marked in the markup, else the
    /// `all` button, else the first.
    pub fn bind(dom: &D) -> Option<Self> {
        let buttons = dom.elements_by_class(BUTTON_CLASS);
        let cards = dom.elements_by_class(CARD_CLASS);
        if buttons.is_empty() || cards.is_empty() {
            tracing::debug!(
                buttons = buttons.len(),
                cards = cards.len(),
                "Filter markup incomplete, portfolio filter disabled"
            );
            return None;
        }
        let filter = Self { buttons, cards };

        let initial = filter
            .buttons
            .iter()
            .position(|b| dom.has_class(b, ACTIVE_CLASS))
            .or_else(|| {
                filter
                    .buttons
                    .iter()
                    .position(|b| dom.attribute(b, FILTER_ATTRIBUTE).as_deref() == Some(ALL))
            })
            .unwrap_or(0);
        filter.activate(dom, initial);
        Some(filter)
    }

    pub fn buttons(&self) -> &[D::Node] {
        &self.buttons
    }

    pub fn cards(&self) -> &[D::Node] {
        &self.cards
    }

    /// Category of the active button.
    pub fn active_filter(&self, dom: &D) -> Option<String> {
        self.buttons
            .iter()
            .find(|b| dom.has_class(b, ACTIVE_CLASS))
            .map(|b| Self::button_filter(dom, b))
    }

    fn button_filter(dom: &D, button: &D::Node) -> String {
        dom.attribute(button, FILTER_ATTRIBUTE)
            .unwrap_or_else(|| ALL.to_string())
    }

    fn activate(&self, dom: &D, index: usize) {
        for (i, button) in self.buttons.iter().enumerate() {
            dom.toggle_class(button, ACTIVE_CLASS, i == index);
        }
    }

    fn matches(dom: &D, card: &D::Node, filter: &str) -> bool {
        filter == ALL || dom.attribute(card, CATEGORY_ATTRIBUTE).as_deref() == Some(filter)
    }
}

impl<D: Dom> Feature<D> for PortfolioFilter<D> {
    type Message = FilterMessage;

    fn update(&mut self, message: FilterMessage, page: &Page<D>) -> Command<FilterMessage> {
        let dom = &page.dom;
        match message {
            FilterMessage::ButtonClicked(index) => {
                let Some(button) = self.buttons.get(index) else {
                    return Command::none();
                };
                let filter = Self::button_filter(dom, button);
                self.activate(dom, index);
                tracing::debug!(%filter, "Filtering portfolio");

                Command::batch(self.cards.iter().enumerate().map(|(i, card)| {
                    let slot = TimerSlot::CardTransition(i);
                    if Self::matches(dom, card, &filter) {
                        dom.set_style(card, "display", "block");
                        Command::after(
                            slot,
                            page.config.card_show_delay(),
                            FilterMessage::CardSettle(i),
                        )
                    } else {
                        dom.set_style(card, "opacity", "0");
                        dom.set_style(card, "transform", "translateY(20px)");
                        Command::after(
                            slot,
                            page.config.card_hide_delay(),
                            FilterMessage::CardCollapse(i),
                        )
                    }
                }))
            }
            FilterMessage::CardSettle(i) => {
                if let Some(card) = self.cards.get(i) {
                    dom.set_style(card, "opacity", "1");
                    dom.set_style(card, "transform", "translateY(0)");
                }
                Command::none()
            }
            FilterMessage::CardCollapse(i) => {
                if let Some(card) = self.cards.get(i) {
                    dom.set_style(card, "display", "none");
                }
                Command::none()
            }
        }
    }
}
