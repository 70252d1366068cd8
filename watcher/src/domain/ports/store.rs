//! Storefront client port trait
//!
//! Defines the interface for fetching the free-games promotion listing,
//! plus the raw wire shapes the storefront returns. The wire shapes are
//! externally controlled and loosely typed: every field tolerates absence
//! or null, and the normalizer decides what is actually usable.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::error::StoreError;

/// Helper to deserialize null as default (empty vec, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One element of the storefront's free-games listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOfferElement {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_slug: Option<String>,
    /// Null for catalog entries that are not currently promoted
    #[serde(default)]
    pub promotions: Option<RawPromotions>,
}

/// The two offer-window lists carried by a promoted element
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPromotions {
    /// Currently active offer window groups
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub promotional_offers: Vec<RawOfferGroup>,
    /// Future offer window groups
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub upcoming_promotional_offers: Vec<RawOfferGroup>,
}

/// A group of offer windows (the storefront nests windows one level deep)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOfferGroup {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub promotional_offers: Vec<RawOfferWindow>,
}

/// A single start/end offer window
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOfferWindow {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Present on the wire but not consumed by normalization
    #[serde(default)]
    #[allow(dead_code)]
    pub discount_setting: Option<RawDiscountSetting>,
}

/// Discount details attached to an offer window
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RawDiscountSetting {
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<i64>,
}

/// Port trait for the storefront API
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch the current free-games promotion listing.
    ///
    /// Transport failures, non-200 responses, and envelope-level schema
    /// mismatches all surface as `StoreError`; per-element problems do not,
    /// they are the normalizer's concern.
    async fn fetch_free_games(&self) -> Result<Vec<RawOfferElement>, StoreError>;
}
