use std::io::Write;

use super::views::{CompanyRollup, LabelCounts, OverallSummary, StatusSummary};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}

/// `category,key,count` rows: one `total`, one `status` row per list, then tags.
pub fn write_overall_csv<W: Write>(summary: &OverallSummary, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["category", "key", "count"])?;
    csv.write_record(["total", "cards", summary.total_cards.to_string().as_str()])?;

    for list in super::WorkflowList::ordered() {
        csv.write_record([
            "status",
            list.label(),
            summary.status_counts.get(list).to_string().as_str(),
        ])?;
    }

    write_tags(&mut csv, "industry", &summary.industries)?;
    write_tags(&mut csv, "outcome", &summary.outcomes)?;
    csv.flush()?;
    Ok(())
}

pub fn write_status_csv<W: Write>(summary: &StatusSummary, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["category", "key", "count"])?;
    csv.write_record(["total", summary.status.label(), summary.total.to_string().as_str()])?;

    write_tags(&mut csv, "industry", &summary.industries)?;
    if let Some(outcomes) = &summary.outcomes {
        write_tags(&mut csv, "outcome", outcomes)?;
    }
    csv.flush()?;
    Ok(())
}

/// One row per company outcome; companies without outcomes get a single row
/// with the outcome columns left empty.
pub fn write_companies_csv<W: Write>(rollup: &CompanyRollup, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["company", "count", "outcome", "outcome_count"])?;

    for company in &rollup.companies {
        let count = company.count.to_string();
        if company.outcomes.is_empty() {
            csv.write_record([company.name.as_str(), count.as_str(), "", ""])?;
            continue;
        }
        for (outcome, hits) in &company.outcomes {
            csv.write_record([
                company.name.as_str(),
                count.as_str(),
                outcome.as_str(),
                hits.to_string().as_str(),
            ])?;
        }
    }
    csv.flush()?;
    Ok(())
}

fn write_tags<W: Write>(
    csv: &mut csv::Writer<W>,
    category: &str,
    counts: &LabelCounts,
) -> Result<(), csv::Error> {
    for (name, count) in counts {
        csv.write_record([category, name.as_str(), count.to_string().as_str()])?;
    }
    Ok(())
}
