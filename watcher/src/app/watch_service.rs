//! Watch Service
//!
//! Orchestrates one fetch-normalize-report cycle and the recurring poll
//! loop. No failure mode escapes a cycle: transport errors, schema drift,
//! and per-element rejections all degrade to "no promotions this cycle"
//! plus a diagnostic log line.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::app::normalizer::PromotionNormalizer;
use crate::domain::entities::PromotionReport;
use crate::domain::ports::{PromotionSink, StoreClient};

/// What happened during one cycle, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Raw elements received from the storefront
    pub fetched: usize,
    /// Promotions published to the sink
    pub published: usize,
    /// Elements rejected during normalization
    pub rejected: usize,
}

/// Service driving the poll-normalize-report loop
pub struct WatchService<SC, PS>
where
    SC: StoreClient,
    PS: PromotionSink,
{
    store: Arc<SC>,
    sink: Arc<PS>,
}

impl<SC, PS> WatchService<SC, PS>
where
    SC: StoreClient,
    PS: PromotionSink,
{
    pub fn new(store: Arc<SC>, sink: Arc<PS>) -> Self {
        Self { store, sink }
    }

    /// Run one fetch-normalize-report cycle to completion.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let elements = match self.store.fetch_free_games().await {
            Ok(elements) => elements,
            Err(e) => {
                tracing::warn!("Fetch failed, skipping cycle: {}", e);
                return CycleOutcome::default();
            }
        };

        let fetched = elements.len();
        let outcome = PromotionNormalizer::normalize(&elements);

        for rejection in &outcome.rejected {
            tracing::warn!("Skipping malformed offer element: {}", rejection);
        }

        let rejected = outcome.rejected.len();
        if outcome.valid.is_empty() {
            tracing::info!("No valid promotions this cycle");
            return CycleOutcome {
                fetched,
                published: 0,
                rejected,
            };
        }

        let report = PromotionReport::new(outcome.valid);
        let published = match self.sink.publish(&report).await {
            Ok(()) => {
                for promotion in &report.promotions {
                    tracing::debug!(
                        "{}: {} ({} to {})",
                        promotion.title(),
                        promotion.url(),
                        promotion.start_date(),
                        promotion.end_date()
                    );
                }
                tracing::info!("Published {} promotion(s)", report.promotions.len());
                report.promotions.len()
            }
            Err(e) => {
                tracing::error!("Failed to publish report: {}", e);
                0
            }
        };

        CycleOutcome {
            fetched,
            published,
            rejected,
        }
    }

    /// Run cycles forever at a fixed period.
    ///
    /// The first tick fires immediately, giving one cycle at process start.
    /// Cycles never overlap: the loop awaits each cycle before taking the
    /// next tick.
    pub async fn run(&self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let outcome = self.run_cycle().await;
            tracing::debug!(
                "Cycle complete: fetched={} published={} rejected={}",
                outcome.fetched,
                outcome.published,
                outcome.rejected
            );
        }
    }
}
