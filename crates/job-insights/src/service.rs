use std::sync::Arc;

use tracing::{info, warn};

use crate::board::{BatchDocument, BoardError, BoardSource};
use crate::insights::{
    build_company_rollup, build_overall_summary, build_status_summary, BoardLists, CompanyRollup,
    OverallSummary, StatusSummary, WorkflowList,
};

/// Fetches the board and builds one view per call. Nothing is kept between
/// calls, so every view reflects the board as it is at request time.
pub struct InsightsService<S> {
    source: Arc<S>,
    lists: BoardLists,
}

impl<S> InsightsService<S>
where
    S: BoardSource + 'static,
{
    pub fn new(source: Arc<S>, lists: BoardLists) -> Self {
        Self { source, lists }
    }

    pub async fn overall(&self) -> Result<OverallSummary, BoardError> {
        let document = self.fetch("overall").await?;
        let summary = build_overall_summary(&document, &self.lists);
        info!(
            total_cards = summary.total_cards,
            industries = summary.industries.len(),
            outcomes = summary.outcomes.len(),
            "overall summary built"
        );
        Ok(summary)
    }

    pub async fn status(&self, list: WorkflowList) -> Result<StatusSummary, BoardError> {
        let document = self.fetch(list.label()).await?;
        let summary = build_status_summary(&document, &self.lists, list);
        info!(status = list.label(), total = summary.total, "status summary built");
        Ok(summary)
    }

    pub async fn companies(&self) -> Result<CompanyRollup, BoardError> {
        let document = self.fetch("companies").await?;
        let rollup = build_company_rollup(&document);
        info!(companies = rollup.total_companies, "company rollup built");
        Ok(rollup)
    }

    async fn fetch(&self, view: &str) -> Result<BatchDocument, BoardError> {
        self.source.fetch_batch().await.map_err(|err| {
            warn!(view, error = %err, "board unavailable");
            err
        })
    }
}
