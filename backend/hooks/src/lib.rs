pub mod listener;
pub mod registry;

pub use listener::{EventHook, EventListener};
pub use registry::EventRegistry;
