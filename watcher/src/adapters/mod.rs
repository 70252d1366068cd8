//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod console;
pub mod epic;

pub use console::ConsoleSink;
pub use epic::EpicStoreClient;
