#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio_page for tests
pub use folio_page::core::{Dom, MemoryDom, MemoryStore, NodeId, TimerSlot};
pub use folio_page::ui::Message;
pub use folio_page::ui::features::{
    AnchorMessage, ContactMessage, FaqMessage, FilterMessage, MenuMessage, ModalMessage,
    ThemeMessage,
};
pub use folio_page::{FormField, PageConfig, PageController};
