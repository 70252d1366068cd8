//! Rejection records for elements that failed normalization
//!
//! A rejection never aborts a batch; it is collected alongside the valid
//! promotions with enough detail to log which element and which field(s)
//! failed.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("title is missing or empty")]
    MissingTitle,

    #[error("description is missing")]
    MissingDescription,

    #[error("url '{url}' is not a valid absolute URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no active or upcoming offer window")]
    NoOfferWindow,

    #[error("{field} is missing")]
    MissingTimestamp { field: &'static str },

    #[error("{field} '{value}' is not a valid ISO-8601 timestamp")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("offer window starts at {start} but ends at {end}")]
    WindowInverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Why one raw offer element failed to normalize into a `Promotion`
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Product slug of the offending element, when the payload carried one
    pub slug: Option<String>,
    /// Title of the offending element, when the payload carried one
    pub title: Option<String>,
    pub errors: Vec<FieldError>,
}

impl Rejection {
    pub fn new(slug: Option<String>, title: Option<String>, errors: Vec<FieldError>) -> Self {
        Self {
            slug,
            title,
            errors,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self
            .title
            .as_deref()
            .or(self.slug.as_deref())
            .unwrap_or("<unidentified element>");
        let reasons: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}: {}", label, reasons.join("; "))
    }
}
