use crate::ui::features::{
    AnchorMessage, ContactMessage, FaqMessage, FilterMessage, MenuMessage, ModalMessage,
    ThemeMessage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Theme(ThemeMessage),
    Menu(MenuMessage),
    Anchor(AnchorMessage),
    Filter(FilterMessage),
    Modal(ModalMessage),
    Contact(ContactMessage),
    Faq(FaqMessage),
    WindowScrolled,
    WindowResized,
}
