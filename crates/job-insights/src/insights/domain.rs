use serde::{Deserialize, Serialize};

use crate::board::{Card, Label};

/// Label names that record where an application ended up. Everything else on
/// the board is an industry tag.
pub const OUTCOME_LABELS: [&str; 6] = [
    "Phone interview",
    "On-site interview",
    "No interview",
    "Offer",
    "Explore",
    "Exploring",
];

/// Outcome reported for a card that has not reached any outcome yet.
pub const APPLIED_OUTCOME: &str = "Applied";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowList {
    Applied,
    Interviewing,
    Closed,
}

impl WorkflowList {
    pub const fn ordered() -> [Self; 3] {
        [Self::Applied, Self::Interviewing, Self::Closed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Closed => "Closed",
        }
    }

    /// Applied cards have not reached an outcome, so their views skip outcome tags.
    pub const fn tracks_outcomes(self) -> bool {
        !matches!(self, Self::Applied)
    }
}

/// Board list identifiers for each workflow stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLists {
    pub applied: String,
    pub interviewing: String,
    pub closed: String,
}

impl BoardLists {
    pub fn id(&self, list: WorkflowList) -> &str {
        match list {
            WorkflowList::Applied => &self.applied,
            WorkflowList::Interviewing => &self.interviewing,
            WorkflowList::Closed => &self.closed,
        }
    }

    pub fn status_of(&self, card: &Card) -> Option<WorkflowList> {
        WorkflowList::ordered()
            .into_iter()
            .find(|list| self.id(*list) == card.id_list)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCategory {
    Outcome,
    Industry,
}

impl LabelCategory {
    pub fn of(label: &Label) -> Self {
        if OUTCOME_LABELS.contains(&label.name.as_str()) {
            Self::Outcome
        } else {
            Self::Industry
        }
    }
}
