pub mod anchors;
pub mod contact;
pub mod faq;
pub mod filter;
pub mod menu;
pub mod modal;
pub mod theme;
pub mod viewport;

use std::fmt::Debug;

use crate::core::{Command, Dom};
use crate::ui::Page;

pub use anchors::{AnchorMessage, SmoothScroll};
pub use contact::{ContactForm, ContactMessage, FieldElements};
pub use faq::{FaqAccordion, FaqItem, FaqMessage};
pub use filter::{FilterMessage, PortfolioFilter};
pub use menu::{MenuMessage, MobileMenu};
pub use modal::{ModalMessage, ProjectModal};
pub use theme::{ThemeMessage, ThemeToggle};
pub use viewport::{RevealWatcher, ScrollEffects, ViewportMessage};

/// One independently bound piece of page behavior.
///
/// A feature owns the element handles it was bound to and reacts to its own
/// messages by mutating the document. Delayed follow-ups are returned as a
/// [`Command`] carrying more of the feature's messages.
pub trait Feature<D: Dom> {
    type Message: Debug;

    fn update(&mut self, message: Self::Message, page: &Page<D>) -> Command<Self::Message>;
}
