use crate::config::PageConfig;
use crate::core::{Command, Dom, PreferenceStore};
use crate::ui::features::{
    ContactForm, FaqAccordion, Feature, MenuMessage, MobileMenu, PortfolioFilter, ProjectModal,
    ScrollEffects, SmoothScroll, ThemeToggle, ViewportMessage,
};
use crate::ui::{Message, Page};

/// Owns the page and every bound feature, and routes messages between them.
pub struct PageController<D: Dom, S> {
    page: Page<D>,
    theme: Option<ThemeToggle<D, S>>,
    menu: Option<MobileMenu<D>>,
    anchors: Option<SmoothScroll<D>>,
    scroll: ScrollEffects<D>,
    filter: Option<PortfolioFilter<D>>,
    modal: Option<ProjectModal<D>>,
    contact: Option<ContactForm<D>>,
    faq: Option<FaqAccordion<D>>,
}

/// Run a feature update if the feature is bound, mapping its command back
/// into page messages.
fn route<D, F>(
    feature: Option<&mut F>,
    message: F::Message,
    page: &Page<D>,
    wrap: fn(F::Message) -> Message,
) -> Command<Message>
where
    D: Dom,
    F: Feature<D>,
{
    match feature {
        Some(feature) => feature.update(message, page).map(wrap),
        None => {
            tracing::debug!(?message, "Message for unbound feature dropped");
            Command::none()
        }
    }
}

impl<D: Dom, S: PreferenceStore> PageController<D, S> {
    /// Bind every feature against `dom` and apply the startup state: the
    /// persisted theme and an initial reveal/navbar pass.
    pub fn new(dom: D, store: S, config: PageConfig) -> Self {
        let page = Page::new(dom, config);
        let mut controller = Self {
            theme: ThemeToggle::bind(&page, store),
            menu: MobileMenu::bind(&page.dom),
            anchors: SmoothScroll::bind(&page.dom),
            scroll: ScrollEffects::bind(&page),
            filter: PortfolioFilter::bind(&page.dom),
            modal: ProjectModal::bind(&page.dom),
            contact: ContactForm::bind(&page.dom),
            faq: FaqAccordion::bind(&page.dom),
            page,
        };
        let _ = controller.scroll.update(ViewportMessage::Refresh, &controller.page);
        tracing::info!(features = ?controller.bound_features(), "Page controller ready");
        controller
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        let page = &self.page;
        match message {
            Message::Theme(msg) => route(self.theme.as_mut(), msg, page, Message::Theme),
            Message::Menu(msg) => route(self.menu.as_mut(), msg, page, Message::Menu),
            Message::Anchor(msg) => route(self.anchors.as_mut(), msg, page, Message::Anchor),
            Message::Filter(msg) => route(self.filter.as_mut(), msg, page, Message::Filter),
            Message::Modal(msg) => route(self.modal.as_mut(), msg, page, Message::Modal),
            Message::Contact(msg) => route(self.contact.as_mut(), msg, page, Message::Contact),
            Message::Faq(msg) => route(self.faq.as_mut(), msg, page, Message::Faq),
            Message::WindowScrolled => self
                .scroll
                .update(ViewportMessage::Refresh, page)
                .map(|_| Message::WindowScrolled),
            Message::WindowResized => {
                let menu = match self.menu.as_mut() {
                    Some(menu) => menu.update(MenuMessage::ViewportResized, page),
                    None => Command::none(),
                };
                let scroll = self.scroll.update(ViewportMessage::Refresh, page);
                Command::batch([menu.map(Message::Menu), scroll.map(|_| Message::WindowResized)])
            }
        }
    }

    pub fn page(&self) -> &Page<D> {
        &self.page
    }

    pub fn dom(&self) -> &D {
        &self.page.dom
    }

    pub fn config(&self) -> &PageConfig {
        &self.page.config
    }

    pub fn theme(&self) -> Option<&ThemeToggle<D, S>> {
        self.theme.as_ref()
    }

    pub fn menu(&self) -> Option<&MobileMenu<D>> {
        self.menu.as_ref()
    }

    pub fn anchors(&self) -> Option<&SmoothScroll<D>> {
        self.anchors.as_ref()
    }

    pub fn scroll_effects(&self) -> &ScrollEffects<D> {
        &self.scroll
    }

    pub fn filter(&self) -> Option<&PortfolioFilter<D>> {
        self.filter.as_ref()
    }

    pub fn modal(&self) -> Option<&ProjectModal<D>> {
        self.modal.as_ref()
    }

    pub fn contact(&self) -> Option<&ContactForm<D>> {
        self.contact.as_ref()
    }

    pub fn faq(&self) -> Option<&FaqAccordion<D>> {
        self.faq.as_ref()
    }

    /// Names of the optional features that found their markup.
    pub fn bound_features(&self) -> Vec<&'static str> {
        [
            ("theme-toggle", self.theme.is_some()),
            ("mobile-menu", self.menu.is_some()),
            ("smooth-scroll", self.anchors.is_some()),
            ("portfolio-filter", self.filter.is_some()),
            ("project-modal", self.modal.is_some()),
            ("contact-form", self.contact.is_some()),
            ("faq", self.faq.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, bound)| bound.then_some(name))
        .collect()
    }
}
