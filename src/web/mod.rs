//! Browser host: binds the page controller to the live document.
//!
//! Every DOM event becomes a [`Message`] for the controller. Scheduled
//! commands become `gloo-timers` timeouts, one per [`TimerSlot`]. A timeout
//! only delivers its message while it is still the current occupant of its
//! slot, which makes cancellation immediate even though the replaced
//! `Timeout` handle is dropped later, outside any timer callback.

mod dom;
mod storage;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

pub use dom::WebDom;
pub use storage::LocalStorage;

use crate::config::PageConfig;
use crate::core::{Action, Dom, TimerSlot};
use crate::ui::features::{
    AnchorMessage, ContactMessage, FaqMessage, FilterMessage, MenuMessage, ModalMessage,
    ThemeMessage,
};
use crate::ui::{Message, PageController};

/// Attribute on `<body>` holding an optional JSON [`PageConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

struct WebRuntime {
    controller: RefCell<PageController<WebDom, LocalStorage>>,
    timers: RefCell<HashMap<TimerSlot, (u64, Timeout)>>,
    retired: RefCell<Vec<Timeout>>,
    next_generation: Cell<u64>,
}

impl WebRuntime {
    fn dispatch(self: &Rc<Self>, message: Message) {
        let command = self.controller.borrow_mut().update(message);
        for action in command.into_actions() {
            match action {
                Action::Schedule {
                    slot,
                    delay,
                    message,
                } => {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    self.schedule(slot, millis, message);
                }
                Action::Cancel(slot) => self.cancel(slot),
            }
        }
    }

    /// Entry point for DOM events. Handles retired by earlier dispatches are
    /// dropped here, where no timer callback can be on the stack.
    fn handle_event(self: &Rc<Self>, message: Message) {
        self.retired.borrow_mut().clear();
        self.dispatch(message);
    }

    fn schedule(self: &Rc<Self>, slot: TimerSlot, millis: u32, message: Message) {
        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);

        let runtime: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(millis, move || {
            let Some(runtime) = runtime.upgrade() else {
                return;
            };
            let current = runtime.timers.borrow().get(&slot).map(|(g, _)| *g);
            if current == Some(generation) {
                runtime.dispatch(message);
            }
        });
        if let Some((_, previous)) = self.timers.borrow_mut().insert(slot, (generation, timeout)) {
            self.retired.borrow_mut().push(previous);
        }
    }

    fn cancel(&self, slot: TimerSlot) {
        if let Some((_, previous)) = self.timers.borrow_mut().remove(&slot) {
            self.retired.borrow_mut().push(previous);
        }
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{err:?}")
}

/// Listen for `event` on `target` for the lifetime of the page.
fn on(
    runtime: &Rc<WebRuntime>,
    target: &EventTarget,
    event: &str,
    to_message: impl Fn(&Event) -> Option<Message> + 'static,
) -> anyhow::Result<()> {
    let runtime = Rc::clone(runtime);
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Some(message) = to_message(&ev) {
            runtime.handle_event(message);
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn bind_events(runtime: &Rc<WebRuntime>) -> anyhow::Result<()> {
    let controller = runtime.controller.borrow();
    let dom = controller.dom();

    on(runtime, dom.window(), "scroll", |_| Some(Message::WindowScrolled))?;
    on(runtime, dom.window(), "resize", |_| Some(Message::WindowResized))?;

    if let Some(theme) = controller.theme() {
        on(runtime, theme.button(), "click", |_| {
            Some(Message::Theme(ThemeMessage::Toggle))
        })?;
    }

    if let Some(menu) = controller.menu() {
        on(runtime, menu.button(), "click", |_| {
            Some(Message::Menu(MenuMessage::ButtonClicked))
        })?;
        for (i, link) in menu.links().iter().enumerate() {
            on(runtime, link, "click", move |_| {
                Some(Message::Menu(MenuMessage::LinkClicked(i)))
            })?;
        }
    }

    if let Some(anchors) = controller.anchors() {
        for (i, anchor) in anchors.anchors().iter().enumerate() {
            on(runtime, anchor, "click", move |ev| {
                ev.prevent_default();
                Some(Message::Anchor(AnchorMessage::Clicked(i)))
            })?;
        }
    }

    if let Some(filter) = controller.filter() {
        for (i, button) in filter.buttons().iter().enumerate() {
            on(runtime, button, "click", move |_| {
                Some(Message::Filter(FilterMessage::ButtonClicked(i)))
            })?;
        }
    }

    if let Some(modal) = controller.modal() {
        for (i, card) in modal.cards().iter().enumerate() {
            on(runtime, card, "click", move |_| {
                Some(Message::Modal(ModalMessage::CardClicked(i)))
            })?;
        }
        on(runtime, modal.close_control(), "click", |_| {
            Some(Message::Modal(ModalMessage::CloseClicked))
        })?;
        let backdrop = modal.modal().clone();
        on(runtime, modal.modal(), "click", move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
            (target.as_ref() == Some(&backdrop))
                .then_some(Message::Modal(ModalMessage::BackdropClicked))
        })?;
        on(runtime, dom.document(), "keydown", |ev| {
            ev.dyn_ref::<KeyboardEvent>()
                .map(|key| Message::Modal(ModalMessage::KeyPressed(key.key())))
        })?;
    }

    if let Some(contact) = controller.contact() {
        on(runtime, contact.form(), "submit", |ev| {
            ev.prevent_default();
            Some(Message::Contact(ContactMessage::Submitted))
        })?;
        for elements in contact.fields() {
            let field = elements.field;
            on(runtime, &elements.input, "blur", move |_| {
                Some(Message::Contact(ContactMessage::FieldBlurred(field)))
            })?;
            on(runtime, &elements.input, "input", move |_| {
                Some(Message::Contact(ContactMessage::FieldEdited(field)))
            })?;
        }
    }

    if let Some(faq) = controller.faq() {
        for (i, item) in faq.items().iter().enumerate() {
            on(runtime, &item.question, "click", move |_| {
                Some(Message::Faq(FaqMessage::QuestionClicked(i)))
            })?;
        }
    }

    Ok(())
}

fn boot() -> anyhow::Result<()> {
    let dom = WebDom::new()?;
    let config = match dom.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE)) {
        Some(json) => PageConfig::from_json(&json)?,
        None => PageConfig::default(),
    };
    let store = LocalStorage::new(dom.window());
    let runtime = Rc::new(WebRuntime {
        controller: RefCell::new(PageController::new(dom, store, config)),
        timers: RefCell::new(HashMap::new()),
        retired: RefCell::new(Vec::new()),
        next_generation: Cell::new(0),
    });
    // The listeners hold the runtime alive from here on.
    bind_events(&runtime)
}

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    boot().map_err(|err| JsValue::from_str(&format!("{err:#}")))
}
