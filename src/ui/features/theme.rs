use crate::core::{Command, Dom, PreferenceStore};
use crate::models::ThemePreference;
use crate::ui::Page;

use super::Feature;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const TOGGLE_ID: &str = "themeToggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMessage {
    Toggle,
}

/// Light/dark switch persisted in a [`PreferenceStore`].
pub struct ThemeToggle<D: Dom, S> {
    root: D::Node,
    button: D::Node,
    store: S,
    storage_key: String,
}

impl<D: Dom, S: PreferenceStore> ThemeToggle<D, S> {
    /// Bind to the toggle control and apply the persisted preference to the
    /// document root. Without the control the page keeps whatever theme its
    /// markup declares.
    pub fn bind(page: &Page<D>, store: S) -> Option<Self> {
        let Some(button) = page.dom.element_by_id(TOGGLE_ID) else {
            tracing::debug!("No #{TOGGLE_ID} element, theme toggle disabled");
            return None;
        };
        let toggle = Self {
            root: page.dom.root(),
            button,
            store,
            storage_key: page.config.theme_storage_key.clone(),
        };
        let stored = toggle.store.get(&toggle.storage_key);
        let theme = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, %theme, "Applying initial theme");
        toggle.apply(&page.dom, theme);
        Some(toggle)
    }

    pub fn button(&self) -> &D::Node {
        &self.button
    }

    /// Theme currently applied to the document.
    pub fn current(&self, dom: &D) -> ThemePreference {
        ThemePreference::from_stored(dom.attribute(&self.root, THEME_ATTRIBUTE).as_deref())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&self, dom: &D, theme: ThemePreference) {
        dom.set_attribute(&self.root, THEME_ATTRIBUTE, theme.as_str());
        dom.set_text(&self.button, theme.toggle_glyph());
    }
}

impl<D: Dom, S: PreferenceStore> Feature<D> for ThemeToggle<D, S> {
    type Message = ThemeMessage;

    fn update(&mut self, message: ThemeMessage, page: &Page<D>) -> Command<ThemeMessage> {
        match message {
            ThemeMessage::Toggle => {
                let next = self.current(&page.dom).toggled();
                self.apply(&page.dom, next);
                self.store.set(&self.storage_key, next.as_str());
                tracing::debug!(theme = %next, "Theme toggled");
                Command::none()
            }
        }
    }
}
