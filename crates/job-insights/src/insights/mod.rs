//! Aggregation of board cards into status, label, and company views.

mod domain;
pub mod export;
mod summary;
mod views;

pub use domain::{BoardLists, LabelCategory, WorkflowList, APPLIED_OUTCOME, OUTCOME_LABELS};
pub use summary::{build_company_rollup, build_overall_summary, build_status_summary};
pub use views::{
    CompanyEntry, CompanyRollup, LabelCounts, OverallSummary, StatusCounts, StatusSummary,
};
