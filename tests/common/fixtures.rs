use std::rc::Rc;

use folio_page::core::{Dom, ElementSpec, MemoryDom, MemoryStore, NodeId};
use folio_page::{PageConfig, PageController, Runtime};

pub type TestRuntime = Runtime<MemoryDom, Rc<MemoryStore>>;

/// Handles to the interesting nodes of the sample page.
pub struct PageNodes {
    pub navbar: NodeId,
    pub theme_toggle: NodeId,
    pub menu_btn: NodeId,
    pub nav_menu: NodeId,
    pub contact_section: NodeId,
    pub service_card: NodeId,
    /// A `.skill-category` and a `slide-up-delay` element further down.
    pub skills: Vec<NodeId>,
    pub filter_buttons: Vec<NodeId>,
    pub cards: Vec<NodeId>,
    pub modal: NodeId,
    pub modal_close: NodeId,
    pub modal_image: NodeId,
    pub modal_title: NodeId,
    pub modal_description: NodeId,
    pub modal_tech: NodeId,
    pub modal_links: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
    pub name_error: NodeId,
    pub submit: NodeId,
    pub success: NodeId,
    pub faq_questions: Vec<NodeId>,
    pub faq_answers: Vec<NodeId>,
    pub faq_icons: Vec<NodeId>,
}

/// (filter category, project id) for each project card, in page order. The
/// last id is not in the catalog.
pub const CARDS: &[(&str, &str)] = &[
    ("web", "ecommerce"),
    ("mobile", "banking"),
    ("web", "dashboard"),
    ("design", "portfolio"),
    ("mobile", "retro-game"),
];

pub const FILTERS: &[&str] = &["all", "web", "mobile", "design"];

fn el(tag: &str) -> ElementSpec {
    ElementSpec::new(tag)
}

fn section(dom: &MemoryDom, id: &str, top: f64) -> NodeId {
    let node = dom.append(dom.body().unwrap(), el("section").attr("id", id));
    dom.set_document_top(node, top);
    node
}

fn form_group(dom: &MemoryDom, form: NodeId, input: ElementSpec, name: &str) -> (NodeId, NodeId) {
    let group = dom.append(form, el("div").class("form-group"));
    let input = dom.append(group, input.attr("id", name).attr("name", name));
    let error = dom.append(
        group,
        el("span").class("error-message").attr("id", format!("{name}Error")),
    );
    (input, error)
}

/// A complete portfolio page in a 1280x800 window scrolled to the top.
pub fn build_page() -> (MemoryDom, PageNodes) {
    let dom = MemoryDom::new();
    let body = dom.body().unwrap();

    let navbar = dom.append(body, el("nav").class("navbar"));
    dom.append(navbar, el("a").class("logo").attr("href", "#"));
    let theme_toggle = dom.append(navbar, el("button").attr("id", "themeToggle"));
    let menu_btn = dom.append(navbar, el("button").attr("id", "mobileMenuBtn").text("☰"));
    let nav_menu = dom.append(navbar, el("ul").class("nav-menu"));
    for target in ["#about", "#portfolio", "#contact"] {
        let item = dom.append(nav_menu, el("li"));
        dom.append(item, el("a").class("nav-link").attr("href", target));
    }
    dom.append(body, el("a").attr("href", "#missing"));
    dom.append(body, el("a").attr("href", "https://example.com/cv.pdf"));

    let about = section(&dom, "about", 900.0);
    let service_card = dom.append(body, el("div").class("service-card"));
    dom.set_document_top(service_card, 300.0);
    let skills: Vec<_> = [(1000.0, "skill-category"), (1400.0, "slide-up-delay")]
        .into_iter()
        .map(|(top, class)| {
            let skill = dom.append(about, el("div").class(class));
            dom.set_document_top(skill, top);
            skill
        })
        .collect();

    let portfolio = section(&dom, "portfolio", 2000.0);
    let filter_buttons = FILTERS
        .iter()
        .map(|filter| {
            let button = el("button").class("filter-btn").attr("data-filter", *filter);
            let button = if *filter == "all" { button.class("active") } else { button };
            dom.append(portfolio, button)
        })
        .collect();
    let cards = CARDS
        .iter()
        .map(|(category, project)| {
            dom.append(
                portfolio,
                el("div")
                    .class("project-card")
                    .attr("data-category", *category)
                    .attr("data-project", *project),
            )
        })
        .collect();

    let modal = dom.append(body, el("div").class("modal").attr("id", "projectModal"));
    let content = dom.append(modal, el("div").class("modal-content"));
    let modal_close = dom.append(content, el("span").attr("id", "modalClose").text("×"));
    let modal_image = dom.append(content, el("div").attr("id", "modalImage"));
    let modal_title = dom.append(content, el("h2").attr("id", "modalTitle"));
    let modal_description = dom.append(content, el("p").attr("id", "modalDescription"));
    let modal_tech = dom.append(content, el("div").attr("id", "modalTechList"));
    let modal_links = dom.append(content, el("div").attr("id", "modalLinks"));

    let contact_section = section(&dom, "contact", 3000.0);
    let form = dom.append(contact_section, el("form").attr("id", "contactForm"));
    let (name, name_error) = form_group(&dom, form, el("input").class("form-input"), "name");
    let (email, _) = form_group(&dom, form, el("input").class("form-input"), "email");
    let (message, _) = form_group(&dom, form, el("textarea").class("form-textarea"), "message");
    let submit = dom.append(form, el("button").attr("id", "submitBtn").attr("type", "submit"));
    let success = dom.append(contact_section, el("div").attr("id", "formSuccess"));

    let faq = section(&dom, "faq", 4000.0);
    let mut faq_questions = Vec::new();
    let mut faq_answers = Vec::new();
    let mut faq_icons = Vec::new();
    for _ in 0..3 {
        let item = dom.append(faq, el("div").class("faq-item"));
        let question = dom.append(item, el("button").class("faq-question"));
        faq_icons.push(dom.append(question, el("span").class("question-icon").text("+")));
        faq_answers.push(dom.append(item, el("div").class("faq-answer")));
        faq_questions.push(question);
    }

    let nodes = PageNodes {
        navbar,
        theme_toggle,
        menu_btn,
        nav_menu,
        contact_section,
        service_card,
        skills,
        filter_buttons,
        cards,
        modal,
        modal_close,
        modal_image,
        modal_title,
        modal_description,
        modal_tech,
        modal_links,
        name,
        email,
        message,
        name_error,
        submit,
        success,
        faq_questions,
        faq_answers,
        faq_icons,
    };
    (dom, nodes)
}

/// Runtime over the sample page with a fresh store the test can inspect.
pub fn start_page() -> (TestRuntime, PageNodes, Rc<MemoryStore>) {
    start_page_with_store(MemoryStore::new())
}

pub fn start_page_with_store(store: MemoryStore) -> (TestRuntime, PageNodes, Rc<MemoryStore>) {
    let (dom, nodes) = build_page();
    let store = Rc::new(store);
    let controller = PageController::new(dom, Rc::clone(&store), PageConfig::default());
    (Runtime::new(controller), nodes, store)
}

/// Index of the bound anchor with the given `href`.
pub fn anchor_index(runtime: &TestRuntime, href: &str) -> usize {
    let dom = runtime.dom();
    runtime
        .controller()
        .anchors()
        .expect("anchors bound")
        .anchors()
        .iter()
        .position(|a| dom.attribute(a, "href").as_deref() == Some(href))
        .expect("anchor present")
}

/// Cards that are still part of the layout.
pub fn displayed_cards(runtime: &TestRuntime, nodes: &PageNodes) -> Vec<usize> {
    let dom = runtime.dom();
    nodes
        .cards
        .iter()
        .enumerate()
        .filter(|(_, card)| dom.style(**card, "display").as_deref() != Some("none"))
        .map(|(i, _)| i)
        .collect()
}
