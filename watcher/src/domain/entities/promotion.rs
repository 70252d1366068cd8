//! Promotion domain entity
//!
//! A validated, normalized record describing one free-game offer. The only
//! way to obtain a `Promotion` is through [`Promotion::validate`], so no
//! partially-valid instance is ever observable.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::rejection::FieldError;

/// A validated free-game promotion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    title: String,
    description: String,
    url: Url,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

/// The loosely-typed assembly produced by URL and window resolution,
/// before schema validation
#[derive(Debug, Clone, Default)]
pub struct PromotionCandidate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Promotion {
    /// Validate a candidate against the promotion schema.
    ///
    /// All failing fields are collected, so a rejection carries every
    /// problem with the element rather than just the first one.
    pub fn validate(candidate: PromotionCandidate) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = match candidate.title {
            Some(t) if !t.trim().is_empty() => Some(t),
            _ => {
                errors.push(FieldError::MissingTitle);
                None
            }
        };

        let description = match candidate.description {
            Some(d) => Some(d),
            None => {
                errors.push(FieldError::MissingDescription);
                None
            }
        };

        let url = match Url::parse(&candidate.url) {
            Ok(u) => Some(u),
            Err(e) => {
                errors.push(FieldError::InvalidUrl {
                    url: candidate.url.clone(),
                    reason: e.to_string(),
                });
                None
            }
        };

        let start_date = parse_timestamp("startDate", candidate.start_date.as_deref(), &mut errors);
        let end_date = parse_timestamp("endDate", candidate.end_date.as_deref(), &mut errors);

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.push(FieldError::WindowInverted { start, end });
            }
        }

        match (title, description, url, start_date, end_date) {
            (Some(title), Some(description), Some(url), Some(start_date), Some(end_date))
                if errors.is_empty() =>
            {
                Ok(Self {
                    title,
                    description,
                    url,
                    start_date,
                    end_date,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[allow(dead_code)]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// Parse an ISO-8601 timestamp, recording a field error on failure
fn parse_timestamp(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    match value {
        None => {
            errors.push(FieldError::MissingTimestamp { field });
            None
        }
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(_) => {
                errors.push(FieldError::InvalidTimestamp {
                    field,
                    value: raw.to_string(),
                });
                None
            }
        },
    }
}
