use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Tunables for the page controller.
///
/// Every field has a default, so a partial JSON object (for example the
/// `data-page-config` attribute on `<body>`) only needs to name what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Viewport width above which the mobile menu is forced closed.
    pub mobile_breakpoint: f64,
    /// Height of the fixed header subtracted from anchor scroll targets.
    pub header_offset: f64,
    /// Scroll position past which the navbar switches background.
    pub navbar_scroll_threshold: f64,
    pub navbar_background: String,
    pub navbar_background_scrolled: String,
    /// Distance from the viewport bottom at which elements are revealed.
    pub reveal_margin: f64,
    /// Elements carrying one of these classes are revealed.
    pub reveal_classes: Vec<String>,
    /// Elements whose class attribute contains one of these fragments are
    /// revealed too (`slide-up-delay`, `fade-in-left`, ...).
    pub reveal_patterns: Vec<String>,
    pub card_show_delay_ms: u64,
    pub card_hide_delay_ms: u64,
    pub submit_latency_ms: u64,
    pub success_banner_ms: u64,
    pub theme_storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            header_offset: 80.0,
            navbar_scroll_threshold: 100.0,
            navbar_background: "rgba(10, 10, 10, 0.95)".to_string(),
            navbar_background_scrolled: "rgba(10, 10, 10, 0.98)".to_string(),
            reveal_margin: 150.0,
            reveal_classes: [
                "project-card",
                "service-card",
                "skill-category",
                "timeline-item",
                "process-step",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            reveal_patterns: ["slide-up", "fade-in"].into_iter().map(String::from).collect(),
            card_show_delay_ms: 100,
            card_hide_delay_ms: 300,
            submit_latency_ms: 2000,
            success_banner_ms: 5000,
            theme_storage_key: "theme".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse page config")
    }

    pub fn card_show_delay(&self) -> Duration {
        Duration::from_millis(self.card_show_delay_ms)
    }

    pub fn card_hide_delay(&self) -> Duration {
        Duration::from_millis(self.card_hide_delay_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn success_banner(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }
}
