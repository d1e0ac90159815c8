use std::collections::BTreeMap;

use super::domain::{BoardLists, LabelCategory, WorkflowList, APPLIED_OUTCOME};
use super::views::{
    CompanyEntry, CompanyRollup, LabelCounts, OverallSummary, StatusCounts, StatusSummary,
};
use crate::board::{BatchDocument, Card};

/// Industry and outcome counts for a set of cards.
#[derive(Debug, Default)]
struct LabelTally {
    industries: LabelCounts,
    outcomes: LabelCounts,
}

impl LabelTally {
    fn record(&mut self, card: &Card) {
        for label in &card.labels {
            let bucket = match LabelCategory::of(label) {
                LabelCategory::Outcome => &mut self.outcomes,
                LabelCategory::Industry => &mut self.industries,
            };
            *bucket.entry(label.name.clone()).or_insert(0) += 1;
        }
    }
}

/// Whole-board view: every card, per-status counts, and label tallies for
/// cards sitting in one of the three tracked lists.
pub fn build_overall_summary(document: &BatchDocument, lists: &BoardLists) -> OverallSummary {
    let mut status_counts = StatusCounts::default();
    let mut tally = LabelTally::default();
    let mut total_cards = 0;

    for card in document.cards() {
        total_cards += 1;
        if let Some(list) = lists.status_of(card) {
            status_counts.bump(list);
            tally.record(card);
        }
    }

    OverallSummary {
        total_cards,
        status_counts,
        industries: tally.industries,
        outcomes: tally.outcomes,
    }
}

/// View of a single workflow list. Outcomes are left out for `Applied`.
pub fn build_status_summary(
    document: &BatchDocument,
    lists: &BoardLists,
    target: WorkflowList,
) -> StatusSummary {
    let target_id = lists.id(target);
    let mut tally = LabelTally::default();
    let mut total = 0;

    for card in document.cards().filter(|card| card.id_list == target_id) {
        total += 1;
        tally.record(card);
    }

    StatusSummary {
        status: target,
        total,
        industries: tally.industries,
        outcomes: target.tracks_outcomes().then_some(tally.outcomes),
    }
}

/// Per-company counts across every card in the document, sorted by name.
pub fn build_company_rollup(document: &BatchDocument) -> CompanyRollup {
    let mut companies: BTreeMap<String, CompanyEntry> = BTreeMap::new();

    for card in document.cards() {
        let name = card.company();
        let entry = companies
            .entry(name.to_string())
            .or_insert_with(|| CompanyEntry {
                name: name.to_string(),
                count: 0,
                outcomes: LabelCounts::new(),
            });
        entry.count += 1;

        let mut reached_outcome = false;
        for label in &card.labels {
            if LabelCategory::of(label) == LabelCategory::Outcome {
                reached_outcome = true;
                *entry.outcomes.entry(label.name.clone()).or_insert(0) += 1;
            }
        }

        if !reached_outcome && card.labels.len() < 2 {
            *entry
                .outcomes
                .entry(APPLIED_OUTCOME.to_string())
                .or_insert(0) += 1;
        }
    }

    let companies: Vec<CompanyEntry> = companies.into_values().collect();
    CompanyRollup {
        total_companies: companies.len(),
        companies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BatchGroup, Label};

    fn lists() -> BoardLists {
        BoardLists {
            applied: "applied".to_string(),
            interviewing: "interviewing".to_string(),
            closed: "closed".to_string(),
        }
    }

    fn card(name: &str, list: &str, labels: &[&str]) -> Card {
        Card {
            id: format!("{name}@{list}"),
            name: name.to_string(),
            id_list: list.to_string(),
            labels: labels
                .iter()
                .map(|name| Label {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    fn document(groups: Vec<Vec<Card>>) -> BatchDocument {
        BatchDocument {
            groups: groups
                .into_iter()
                .map(|cards| BatchGroup { cards })
                .collect(),
        }
    }

    fn board() -> BatchDocument {
        document(vec![
            vec![
                card("Acme - Backend Engineer", "applied", &["Fintech"]),
                card("Globex - SRE", "applied", &[]),
            ],
            vec![
                card("Acme - Platform", "interviewing", &["Fintech", "Phone interview"]),
                card("Initech - Data", "interviewing", &["Health", "On-site interview"]),
            ],
            vec![
                card("Globex - Tools", "closed", &["Offer"]),
                card("Hooli - ML", "closed", &["Fintech", "Health", "No interview"]),
            ],
        ])
    }

    #[test]
    fn overall_summary_counts_every_list() {
        let summary = build_overall_summary(&board(), &lists());

        assert_eq!(summary.total_cards, 6);
        assert_eq!(
            summary.status_counts,
            StatusCounts {
                applied: 2,
                interviewing: 2,
                closed: 2
            }
        );
        assert_eq!(summary.industries.get("Fintech"), Some(&3));
        assert_eq!(summary.industries.get("Health"), Some(&2));
        assert_eq!(summary.outcomes.get("Offer"), Some(&1));
        assert_eq!(summary.outcomes.get("Phone interview"), Some(&1));
        assert!(!summary.industries.contains_key("Offer"));
    }

    #[test]
    fn status_totals_add_up_to_overall_total() {
        let document = board();
        let overall = build_overall_summary(&document, &lists());
        let per_status: usize = WorkflowList::ordered()
            .into_iter()
            .map(|list| build_status_summary(&document, &lists(), list).total)
            .sum();

        assert_eq!(per_status, overall.total_cards);
        assert_eq!(overall.status_counts.total(), overall.total_cards);
    }

    #[test]
    fn every_label_lands_in_exactly_one_bucket() {
        let document = board();
        let summary = build_overall_summary(&document, &lists());
        let labels: usize = document.cards().map(|card| card.labels.len()).sum();
        let counted: usize =
            summary.industries.values().sum::<usize>() + summary.outcomes.values().sum::<usize>();

        assert_eq!(counted, labels);
    }

    #[test]
    fn counts_start_from_zero() {
        let document = document(vec![vec![card("Acme - Eng", "closed", &["Offer"])]]);
        let summary = build_overall_summary(&document, &lists());

        assert_eq!(summary.outcomes.get("Offer"), Some(&1));
        assert!(summary.industries.is_empty());
    }

    #[test]
    fn unknown_lists_only_count_toward_total() {
        let document = document(vec![vec![
            card("Acme - Eng", "archived", &["Fintech", "Offer"]),
            card("Globex - Eng", "applied", &["Retail"]),
        ]]);
        let summary = build_overall_summary(&document, &lists());

        assert_eq!(summary.total_cards, 2);
        assert_eq!(summary.status_counts.total(), 1);
        assert_eq!(summary.industries.len(), 1);
        assert!(summary.outcomes.is_empty());
    }

    #[test]
    fn applied_summary_omits_outcomes() {
        let document = document(vec![vec![card("Acme - Eng", "applied", &["Explore"])]]);

        let applied = build_status_summary(&document, &lists(), WorkflowList::Applied);
        assert_eq!(applied.total, 1);
        assert!(applied.outcomes.is_none());
        assert!(applied.industries.is_empty());

        let closed = build_status_summary(&document, &lists(), WorkflowList::Closed);
        assert_eq!(closed.total, 0);
        assert_eq!(closed.outcomes, Some(LabelCounts::new()));
    }

    #[test]
    fn interviewing_summary_is_scoped_to_its_list() {
        let summary = build_status_summary(&board(), &lists(), WorkflowList::Interviewing);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.industries.get("Fintech"), Some(&1));
        let outcomes = summary.outcomes.expect("interviewing tracks outcomes");
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes.get("On-site interview"), Some(&1));
    }

    #[test]
    fn company_rollup_groups_and_sorts_by_name() {
        let rollup = build_company_rollup(&board());
        let names: Vec<&str> = rollup
            .companies
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(names, vec!["Acme", "Globex", "Hooli", "Initech"]);
        assert_eq!(rollup.total_companies, 4);

        let acme = &rollup.companies[0];
        assert_eq!(acme.count, 2);
        assert_eq!(acme.outcomes.get("Applied"), Some(&1));
        assert_eq!(acme.outcomes.get("Phone interview"), Some(&1));

        let globex = &rollup.companies[1];
        assert_eq!(globex.outcomes.get("Applied"), Some(&1));
        assert_eq!(globex.outcomes.get("Offer"), Some(&1));
    }

    #[test]
    fn company_rollup_keeps_casing_distinct() {
        let document = document(vec![vec![
            card("acme - Eng", "applied", &[]),
            card("Acme - Eng", "applied", &[]),
            card("Acme- Ops", "applied", &[]),
        ]]);
        let rollup = build_company_rollup(&document);

        assert_eq!(rollup.total_companies, 2);
        assert_eq!(rollup.companies[0].name, "Acme");
        assert_eq!(rollup.companies[0].count, 2);
        assert_eq!(rollup.companies[1].name, "acme");
    }

    #[test]
    fn multi_label_cards_without_outcome_are_not_marked_applied() {
        let document = document(vec![vec![card(
            "Acme - Eng",
            "interviewing",
            &["Fintech", "Remote"],
        )]]);
        let rollup = build_company_rollup(&document);

        assert_eq!(rollup.companies[0].count, 1);
        assert!(rollup.companies[0].outcomes.is_empty());
    }

    #[test]
    fn empty_document_yields_zeroed_views() {
        let document = document(vec![Vec::new(), Vec::new(), Vec::new()]);

        assert_eq!(
            build_overall_summary(&document, &lists()),
            OverallSummary::default()
        );
        let closed = build_status_summary(&document, &lists(), WorkflowList::Closed);
        assert_eq!(closed.total, 0);
        assert!(closed.industries.is_empty());
        assert_eq!(build_company_rollup(&document), CompanyRollup::default());
    }
}
