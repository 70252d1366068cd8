//! Promotion normalizer
//!
//! The core of the watcher: transforms one cycle's raw storefront elements
//! into a validated promotion list plus a parallel rejection list. A
//! malformed element produces a rejection, never a panic, and never aborts
//! the batch.
//!
//! Per-element algorithm:
//! 1. URL resolution: missing/empty/placeholder slug falls back to the
//!    free-games page, otherwise the product-page template.
//! 2. Window resolution: the first active window group wins; upcoming
//!    windows are only consulted when no active group exists.
//! 3. Schema validation via the `Promotion` validating factory.

use crate::domain::entities::{FieldError, Promotion, PromotionCandidate, Rejection};
use crate::domain::ports::{RawOfferElement, RawOfferWindow, RawPromotions};

/// Landing page used when an element carries no usable product slug
pub const FREE_GAMES_URL: &str = "https://store.epicgames.com/en-US/free-games";

/// Placeholder slug the storefront emits for offers without a product page
const PLACEHOLDER_SLUG: &str = "[]";

/// Result of normalizing one batch of raw elements
#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    pub valid: Vec<Promotion>,
    pub rejected: Vec<Rejection>,
}

/// Pure, synchronous normalization of raw storefront elements
pub struct PromotionNormalizer;

impl PromotionNormalizer {
    /// Normalize a batch. Order of `valid` follows the order of the input
    /// elements; `rejected` likewise.
    pub fn normalize(elements: &[RawOfferElement]) -> NormalizeOutcome {
        let mut outcome = NormalizeOutcome::default();

        for element in elements {
            match Self::normalize_element(element) {
                Ok(promotion) => outcome.valid.push(promotion),
                Err(rejection) => outcome.rejected.push(rejection),
            }
        }

        outcome
    }

    fn normalize_element(element: &RawOfferElement) -> Result<Promotion, Rejection> {
        let url = resolve_url(element.product_slug.as_deref());

        let Some(window) = resolve_window(element.promotions.as_ref()) else {
            return Err(Rejection::new(
                element.product_slug.clone(),
                element.title.clone(),
                vec![FieldError::NoOfferWindow],
            ));
        };

        let candidate = PromotionCandidate {
            title: element.title.clone(),
            description: element.description.clone(),
            url,
            start_date: window.start_date.clone(),
            end_date: window.end_date.clone(),
        };

        Promotion::validate(candidate).map_err(|errors| {
            Rejection::new(
                element.product_slug.clone(),
                element.title.clone(),
                errors,
            )
        })
    }
}

/// Build the promotion URL from the product slug, falling back to the
/// free-games page for absent, empty, or placeholder slugs
fn resolve_url(slug: Option<&str>) -> String {
    match slug {
        Some(slug) if !slug.is_empty() && slug != PLACEHOLDER_SLUG => {
            format!("https://store.epicgames.com/en-US/p/{}", slug)
        }
        _ => FREE_GAMES_URL.to_string(),
    }
}

/// Pick the element's offer window: first entry of the first active group,
/// or of the first upcoming group when no active group exists. Any missing
/// index yields `None` rather than a panic.
fn resolve_window(promotions: Option<&RawPromotions>) -> Option<&RawOfferWindow> {
    let promotions = promotions?;
    let groups = if !promotions.promotional_offers.is_empty() {
        &promotions.promotional_offers
    } else {
        &promotions.upcoming_promotional_offers
    };
    groups.first().and_then(|group| group.promotional_offers.first())
}
