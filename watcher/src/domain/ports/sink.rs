//! Promotion sink port trait
//!
//! Defines the interface for the downstream consumer of a cycle's report.

use async_trait::async_trait;

use crate::domain::entities::PromotionReport;
use crate::error::SinkError;

/// Port trait for the downstream report consumer
#[async_trait]
pub trait PromotionSink: Send + Sync {
    /// Publish one cycle's report. Only called when the report carries at
    /// least one valid promotion.
    async fn publish(&self, report: &PromotionReport) -> Result<(), SinkError>;
}
