//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod sink;
pub mod store;

pub use sink::PromotionSink;
pub use store::{
    RawDiscountSetting, RawOfferElement, RawOfferGroup, RawOfferWindow, RawPromotions, StoreClient,
};
