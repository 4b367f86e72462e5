pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod ui;
pub mod validation;

#[cfg(not(target_arch = "wasm32"))]
pub mod runtime;

#[cfg(feature = "web")]
pub mod web;

pub use config::PageConfig;
pub use core::{Command, Dom, ElementSpec, MemoryDom, MemoryStore, PreferenceStore, TimerSlot};
pub use models::{FormField, ProjectLink, ProjectRecord, ThemePreference};
pub use ui::{Message, PageController};
pub use validation::{ValidationError, validate};

#[cfg(not(target_arch = "wasm32"))]
pub use runtime::Runtime;
