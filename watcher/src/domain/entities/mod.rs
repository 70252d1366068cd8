//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! The raw wire shapes returned by the storefront live with the store port;
//! everything here is already (or about to be) validated.

pub mod promotion;
pub mod rejection;
pub mod report;

pub use promotion::{Promotion, PromotionCandidate};
pub use rejection::{FieldError, Rejection};
pub use report::PromotionReport;
