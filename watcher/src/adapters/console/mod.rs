//! Console sink implementation
//!
//! Writes each cycle's report as one pretty-printed JSON document to stdout.

use std::io::Write;

use async_trait::async_trait;

use crate::domain::entities::PromotionReport;
use crate::domain::ports::PromotionSink;
use crate::error::SinkError;

/// Sink that prints reports to stdout
pub struct ConsoleSink;

#[async_trait]
impl PromotionSink for ConsoleSink {
    async fn publish(&self, report: &PromotionReport) -> Result<(), SinkError> {
        let body = serde_json::to_string_pretty(report)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", body)?;
        Ok(())
    }
}
