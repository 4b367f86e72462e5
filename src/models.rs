use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color scheme applied to the document root as `data-theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Glyph shown on the toggle control.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemePreference::Dark => "🌙",
            ThemePreference::Light => "☀️",
        }
    }

    /// Parse a persisted value, falling back to the default for anything
    /// outside `{"dark", "light"}`.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(anyhow::anyhow!("Unknown theme preference: {other:?}")),
        }
    }
}

/// A link rendered in the project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
    pub is_primary: bool,
}

impl ProjectLink {
    /// Classes of the rendered anchor. Secondary links add `secondary`.
    pub fn classes(&self) -> &'static [&'static str] {
        if self.is_primary {
            &["modal-link"]
        } else {
            &["modal-link", "secondary"]
        }
    }
}

/// Static catalog entry describing one portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub glyph: &'static str,
    pub links: &'static [ProjectLink],
}

/// The three validated inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// `name` attribute of the input control.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    /// Element id of the inline error message.
    pub fn error_id(self) -> &'static str {
        match self {
            FormField::Name => "nameError",
            FormField::Email => "emailError",
            FormField::Message => "messageError",
        }
    }
}

impl FromStr for FormField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(anyhow::anyhow!("Unknown form field: {other:?}")),
        }
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub field: FormField,
    pub error: Option<String>,
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_falls_back_to_dark() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn dark_theme_shows_moon() {
        assert_eq!(ThemePreference::Dark.toggle_glyph(), "🌙");
        assert_eq!(ThemePreference::Light.toggle_glyph(), "☀️");
    }

    #[test]
    fn secondary_links_add_marker() {
        let link = |is_primary| ProjectLink {
            label: "Live Demo",
            url: "#",
            is_primary,
        };
        assert_eq!(link(true).classes(), ["modal-link"]);
        assert_eq!(link(false).classes(), ["modal-link", "secondary"]);
    }

    #[test]
    fn form_field_parses_names() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert!("phone".parse::<FormField>().is_err());
    }
}
