use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::WorkflowList;

/// Label name -> occurrences.
pub type LabelCounts = BTreeMap<String, usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub applied: usize,
    pub interviewing: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn get(&self, list: WorkflowList) -> usize {
        match list {
            WorkflowList::Applied => self.applied,
            WorkflowList::Interviewing => self.interviewing,
            WorkflowList::Closed => self.closed,
        }
    }

    pub(crate) fn bump(&mut self, list: WorkflowList) {
        match list {
            WorkflowList::Applied => self.applied += 1,
            WorkflowList::Interviewing => self.interviewing += 1,
            WorkflowList::Closed => self.closed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.interviewing + self.closed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub total_cards: usize,
    pub status_counts: StatusCounts,
    pub industries: LabelCounts,
    pub outcomes: LabelCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub status: WorkflowList,
    pub total: usize,
    pub industries: LabelCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<LabelCounts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyEntry {
    pub name: String,
    pub count: usize,
    pub outcomes: LabelCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRollup {
    pub companies: Vec<CompanyEntry>,
    pub total_companies: usize,
}
