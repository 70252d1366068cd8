//! Test fixtures
//!
//! Factory functions for creating raw storefront elements with sensible
//! defaults. Each fixture creates a valid element that tests then distort
//! as needed.

use crate::domain::ports::{RawOfferElement, RawOfferGroup, RawOfferWindow, RawPromotions};

/// Create an offer window with the given ISO-8601 dates
pub fn raw_window(start: &str, end: &str) -> RawOfferWindow {
    RawOfferWindow {
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        discount_setting: None,
    }
}

/// Create a window group wrapping the given windows
pub fn raw_group(windows: Vec<RawOfferWindow>) -> RawOfferGroup {
    RawOfferGroup {
        promotional_offers: windows,
    }
}

/// Create a promotions structure from active and upcoming groups
pub fn raw_promotions(
    active: Vec<RawOfferGroup>,
    upcoming: Vec<RawOfferGroup>,
) -> RawPromotions {
    RawPromotions {
        promotional_offers: active,
        upcoming_promotional_offers: upcoming,
    }
}

/// Create a valid element with one active window in January 2024
pub fn raw_element(title: &str, slug: &str) -> RawOfferElement {
    raw_element_with_promotions(
        title,
        slug,
        raw_promotions(
            vec![raw_group(vec![raw_window(
                "2024-01-01T00:00:00.000Z",
                "2024-01-08T00:00:00.000Z",
            )])],
            vec![],
        ),
    )
}

/// Create an element with the given promotions structure
pub fn raw_element_with_promotions(
    title: &str,
    slug: &str,
    promotions: RawPromotions,
) -> RawOfferElement {
    RawOfferElement {
        title: Some(title.to_string()),
        description: Some("A description".to_string()),
        product_slug: Some(slug.to_string()),
        promotions: Some(promotions),
    }
}
