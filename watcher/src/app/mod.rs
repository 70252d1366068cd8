//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod normalizer;
pub mod watch_service;

pub use normalizer::{NormalizeOutcome, PromotionNormalizer};
pub use watch_service::{CycleOutcome, WatchService};
