mod app;
mod message;
mod state;
pub mod features;

pub use app::PageController;
pub use message::Message;
pub use state::Page;
