//! Integration tests for controller startup on incomplete pages.
//!
//! Tests cover:
//! - Pages with no recognised markup
//! - Partially present features
//! - Configuration overrides

mod common;

use std::rc::Rc;

use folio_page::Runtime;
use folio_page::core::ElementSpec;

use common::*;

fn start(dom: MemoryDom, config: PageConfig) -> TestRuntime {
    let controller = PageController::new(dom, Rc::new(MemoryStore::new()), config);
    Runtime::new(controller)
}

#[test]
fn test_empty_page_binds_nothing() {
    let mut runtime = start(MemoryDom::new(), PageConfig::default());
    assert!(runtime.controller().bound_features().is_empty());

    let messages = [
        Message::Theme(ThemeMessage::Toggle),
        Message::Menu(MenuMessage::ButtonClicked),
        Message::Anchor(AnchorMessage::Clicked(0)),
        Message::Filter(FilterMessage::ButtonClicked(0)),
        Message::Modal(ModalMessage::CardClicked(0)),
        Message::Contact(ContactMessage::Submitted),
        Message::Faq(FaqMessage::QuestionClicked(0)),
        Message::WindowScrolled,
        Message::WindowResized,
    ];
    for message in messages {
        runtime.dispatch(message);
    }
    assert!(runtime.pending_timers().is_empty());
    let dom = runtime.dom();
    assert_eq!(dom.attribute(&dom.root(), "data-theme"), None);
}

#[test]
fn test_full_page_binds_everything() {
    let (runtime, _nodes, _store) = start_page();
    assert_eq!(
        runtime.controller().bound_features(),
        vec![
            "theme-toggle",
            "mobile-menu",
            "smooth-scroll",
            "portfolio-filter",
            "project-modal",
            "contact-form",
            "faq",
        ]
    );
}

#[test]
fn test_missing_modal_part_disables_only_modal() {
    let dom = MemoryDom::new();
    let body = dom.body().unwrap();
    // Complete modal except for #modalClose.
    let modal = dom.append(body, ElementSpec::new("div").attr("id", "projectModal"));
    for id in ["modalImage", "modalTitle", "modalDescription", "modalTechList", "modalLinks"] {
        dom.append(modal, ElementSpec::new("div").attr("id", id));
    }
    let faq = dom.append(body, ElementSpec::new("div").class("faq-item"));
    let question = dom.append(faq, ElementSpec::new("button").class("faq-question"));

    let mut runtime = start(dom, PageConfig::default());
    assert_eq!(runtime.controller().bound_features(), vec!["faq"]);

    runtime.dispatch(Message::Faq(FaqMessage::QuestionClicked(0)));
    assert!(runtime.dom().has_class(&question, "active"));
}

#[tokio::test(start_paused = true)]
async fn test_contact_form_binds_inputs_by_name() {
    let dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let form = dom.append(body, ElementSpec::new("form").attr("id", "contactForm"));
    let name = dom.append(form, ElementSpec::new("input").class("form-input").attr("name", "name"));
    dom.append(form, ElementSpec::new("input").class("form-input").attr("name", "phone"));
    // Outside the form, so not part of it.
    dom.append(body, ElementSpec::new("input").class("form-input").attr("name", "email"));

    let mut runtime = start(dom, PageConfig::default());
    let fields: Vec<FormField> = runtime
        .controller()
        .contact()
        .expect("form bound")
        .fields()
        .iter()
        .map(|f| f.field)
        .collect();
    assert_eq!(fields, vec![FormField::Name]);

    runtime.dispatch(Message::Contact(ContactMessage::Submitted));
    assert!(runtime.dom().has_class(&name, "error"));
    assert!(runtime.pending_timers().is_empty());

    runtime.dom().set_value(&name, "Ada");
    runtime.dispatch(Message::Contact(ContactMessage::Submitted));
    assert_eq!(runtime.pending_timers(), vec![TimerSlot::FormSubmit]);
    assert!(runtime.dom().has_class(&form, "loading"), "No #submitBtn, the form shows loading");
}

#[test]
fn test_config_overrides_apply() {
    let config = PageConfig::from_json(r#"{"headerOffset": 40, "mobileBreakpoint": 1024}"#).unwrap();
    assert_eq!(config.reveal_margin, 150.0, "Unset keys keep their defaults");

    let (dom, nodes) = build_page();
    let mut runtime = start(dom, config);

    let index = anchor_index(&runtime, "#contact");
    runtime.dispatch(Message::Anchor(AnchorMessage::Clicked(index)));
    assert_eq!(runtime.dom().last_scroll(), Some((2960.0, true)));

    runtime.dispatch(Message::Menu(MenuMessage::ButtonClicked));
    runtime.dom().resize(1000.0, 800.0);
    runtime.dispatch(Message::WindowResized);
    assert!(
        runtime.dom().has_class(&nodes.nav_menu, "open"),
        "1000px is below the configured breakpoint"
    );
}

#[test]
fn test_malformed_config_is_rejected() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse page config"));
}
