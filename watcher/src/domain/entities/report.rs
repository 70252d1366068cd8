//! Per-cycle promotion report
//!
//! The structure handed to the sink when a cycle produced at least one valid
//! promotion. Cycles with an empty result emit nothing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::promotion::Promotion;

/// One cycle's worth of valid promotions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionReport {
    pub updated_at: DateTime<Utc>,
    pub promotions: Vec<Promotion>,
}

impl PromotionReport {
    /// Build a report stamped with the current time.
    ///
    /// Callers are expected to only build a report from a non-empty
    /// promotion list; an empty cycle is represented by no report at all.
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Self {
            updated_at: Utc::now(),
            promotions,
        }
    }
}
