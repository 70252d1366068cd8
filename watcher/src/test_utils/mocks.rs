//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test and inspected
//! afterwards.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::PromotionReport;
use crate::domain::ports::{PromotionSink, RawOfferElement, StoreClient};
use crate::error::{SinkError, StoreError};

// ============================================================================
// Mock Store Client
// ============================================================================

/// Storefront client that returns a fixed element list or a fixed failure
#[derive(Default)]
pub struct MockStoreClient {
    elements: Vec<RawOfferElement>,
    fail: bool,
}

impl MockStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the elements the next fetches will return
    pub fn with_elements(mut self, elements: Vec<RawOfferElement>) -> Self {
        self.elements = elements;
        self
    }

    /// Make every fetch fail with an API error
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl StoreClient for MockStoreClient {
    async fn fetch_free_games(&self) -> Result<Vec<RawOfferElement>, StoreError> {
        if self.fail {
            return Err(StoreError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(self.elements.clone())
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// Sink that records every published report for later inspection
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<PromotionReport>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every publish fail with an io error
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All reports published so far, in order
    pub fn published(&self) -> Vec<PromotionReport> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromotionSink for RecordingSink {
    async fn publish(&self, report: &PromotionReport) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "sink unavailable",
            )));
        }
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}
