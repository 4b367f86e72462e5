//! Contact form with inline validation and a simulated submission.
//!
//! Validity lives on the page: a field is in the error state exactly when its
//! input carries `error`. Its error label, when present, shows the message and
//! carries `show`.
//! Submission is stubbed by a timer on [`TimerSlot::FormSubmit`]; a real
//! backend call would take its place.

use crate::core::{Command, Dom, TimerSlot};
use crate::models::FormField;
use crate::ui::Page;
use crate::validation;

use super::Feature;

pub const FORM_ID: &str = "contactForm";
pub const INPUT_CLASSES: [&str; 2] = ["form-input", "form-textarea"];
pub const SUBMIT_ID: &str = "submitBtn";
pub const SUCCESS_ID: &str = "formSuccess";
pub const ERROR_CLASS: &str = "error";
pub const LOADING_CLASS: &str = "loading";
pub const SHOW_CLASS: &str = "show";
pub const NAME_ATTRIBUTE: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMessage {
    FieldBlurred(FormField),
    FieldEdited(FormField),
    Submitted,
    SubmissionFinished,
    BannerExpired,
}

/// Handles for one validated input.
pub struct FieldElements<N> {
    pub field: FormField,
    pub input: N,
    pub error: Option<N>,
}

pub struct ContactForm<D: Dom> {
    form: D::Node,
    fields: Vec<FieldElements<D::Node>>,
    submit: Option<D::Node>,
    success: Option<D::Node>,
}

impl<D: Dom> ContactForm<D> {
    /// Bind the form and every `.form-input` / `.form-textarea` inside it
    /// whose `name` is a known field. The submit button and success banner
    /// are optional.
    pub fn bind(dom: &D) -> Option<Self> {
        let Some(form) = dom.element_by_id(FORM_ID) else {
            tracing::debug!("No #{FORM_ID} element, contact form disabled");
            return None;
        };
        let mut fields: Vec<FieldElements<D::Node>> = Vec::new();
        for input in INPUT_CLASSES
            .iter()
            .flat_map(|class| dom.descendants_by_class(&form, class))
        {
            let name = dom.attribute(&input, NAME_ATTRIBUTE).unwrap_or_default();
            let field = match name.parse::<FormField>() {
                Ok(field) => field,
                Err(err) => {
                    tracing::debug!(%err, "Contact form input skipped");
                    continue;
                }
            };
            if fields.iter().any(|f| f.field == field) {
                continue;
            }
            fields.push(FieldElements {
                field,
                error: dom.element_by_id(field.error_id()),
                input,
            });
        }
        tracing::debug!(fields = fields.len(), "Contact form bound");
        Some(Self {
            submit: dom.element_by_id(SUBMIT_ID),
            success: dom.element_by_id(SUCCESS_ID),
            form,
            fields,
        })
    }

    pub fn form(&self) -> &D::Node {
        &self.form
    }

    pub fn fields(&self) -> &[FieldElements<D::Node>] {
        &self.fields
    }

    fn field(&self, field: FormField) -> Option<&FieldElements<D::Node>> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Whether a simulated submission is in flight.
    pub fn is_submitting(&self, dom: &D) -> bool {
        dom.has_class(self.busy_marker(), LOADING_CLASS)
    }

    pub fn has_error(&self, dom: &D, field: FormField) -> bool {
        self.field(field)
            .is_some_and(|f| dom.has_class(&f.input, ERROR_CLASS))
    }

    fn busy_marker(&self) -> &D::Node {
        self.submit.as_ref().unwrap_or(&self.form)
    }

    /// Validate one field against its current value and render the outcome.
    pub fn validate_field(&self, dom: &D, field: FormField) -> bool {
        let Some(elements) = self.field(field) else {
            return true;
        };
        let state = validation::field_state(field, &dom.value(&elements.input));
        self.render(dom, elements, state.error.as_deref());
        state.is_valid()
    }

    fn render(&self, dom: &D, elements: &FieldElements<D::Node>, error: Option<&str>) {
        dom.toggle_class(&elements.input, ERROR_CLASS, error.is_some());
        if let Some(label) = &elements.error {
            dom.set_text(label, error.unwrap_or(""));
            dom.toggle_class(label, SHOW_CLASS, error.is_some());
        }
    }

    fn set_loading(&self, dom: &D, loading: bool) {
        dom.toggle_class(self.busy_marker(), LOADING_CLASS, loading);
        if let Some(submit) = &self.submit {
            if loading {
                dom.set_attribute(submit, "disabled", "");
            } else {
                dom.remove_attribute(submit, "disabled");
            }
        }
    }

    fn reset(&self, dom: &D) {
        for elements in &self.fields {
            dom.set_value(&elements.input, "");
            self.render(dom, elements, None);
        }
    }
}

impl<D: Dom> Feature<D> for ContactForm<D> {
    type Message = ContactMessage;

    fn update(&mut self, message: ContactMessage, page: &Page<D>) -> Command<ContactMessage> {
        let dom = &page.dom;
        match message {
            ContactMessage::FieldBlurred(field) => {
                self.validate_field(dom, field);
                Command::none()
            }
            ContactMessage::FieldEdited(field) => {
                if self.has_error(dom, field) {
                    self.validate_field(dom, field);
                }
                Command::none()
            }
            ContactMessage::Submitted => {
                if self.is_submitting(dom) {
                    tracing::debug!("Submission already pending, ignoring submit");
                    return Command::none();
                }
                // Every field is validated so each one shows its own error.
                let valid = self
                    .fields
                    .iter()
                    .fold(true, |ok, f| self.validate_field(dom, f.field) && ok);
                if !valid {
                    tracing::debug!("Contact form invalid, submission aborted");
                    return Command::none();
                }
                self.set_loading(dom, true);
                tracing::info!("Submitting contact form");
                Command::after(
                    TimerSlot::FormSubmit,
                    page.config.submit_latency(),
                    ContactMessage::SubmissionFinished,
                )
            }
            ContactMessage::SubmissionFinished => {
                self.set_loading(dom, false);
                self.reset(dom);
                match &self.success {
                    Some(banner) => {
                        dom.add_class(banner, SHOW_CLASS);
                        Command::after(
                            TimerSlot::SuccessBanner,
                            page.config.success_banner(),
                            ContactMessage::BannerExpired,
                        )
                    }
                    None => Command::none(),
                }
            }
            ContactMessage::BannerExpired => {
                if let Some(banner) = &self.success {
                    dom.remove_class(banner, SHOW_CLASS);
                }
                Command::none()
            }
        }
    }
}
