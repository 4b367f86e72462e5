pub mod command;
pub mod dom;
pub mod storage;

pub use command::{Action, Command, TimerSlot};
pub use dom::{Dom, ElementSpec, MemoryDom, NodeId, Viewport};
pub use storage::{MemoryStore, PreferenceStore};
