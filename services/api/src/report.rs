use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use job_insights::board::{BoardSource, StaticBoard, TrelloClient};
use job_insights::config::AppConfig;
use job_insights::error::AppError;
use job_insights::insights::{export, WorkflowList};
use job_insights::telemetry;
use job_insights::InsightsService;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportView {
    Overall,
    Applications,
    Interviews,
    Closed,
    Companies,
}

impl ReportView {
    fn name(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Applications => "applications",
            Self::Interviews => "interviews",
            Self::Closed => "closed",
            Self::Companies => "companies",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Summary view to print
    #[arg(value_enum)]
    pub(crate) view: ReportView,
    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub(crate) format: ReportFormat,
    /// Read a saved batch response instead of calling Trello
    #[arg(long)]
    pub(crate) from_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportEnvelope<T> {
    view: &'static str,
    generated_at: DateTime<Utc>,
    data: T,
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let lists = config.trello.lists.clone();
    let mut buffer = Vec::new();

    match &args.from_file {
        Some(path) => {
            info!(path = %path.display(), "reading saved board export");
            let board = StaticBoard::from_path(path)?;
            let service = InsightsService::new(Arc::new(board), lists);
            write_report(&service, args.view, args.format, &mut buffer).await?;
        }
        None => {
            let client = TrelloClient::new(config.trello)?;
            let service = InsightsService::new(Arc::new(client), lists);
            write_report(&service, args.view, args.format, &mut buffer).await?;
        }
    }

    std::io::stdout().lock().write_all(&buffer)?;
    Ok(())
}

pub(crate) async fn write_report<S, W>(
    service: &InsightsService<S>,
    view: ReportView,
    format: ReportFormat,
    mut out: W,
) -> Result<(), AppError>
where
    S: BoardSource + 'static,
    W: Write,
{
    let list = match view {
        ReportView::Overall => {
            let summary = service.overall().await?;
            return match format {
                ReportFormat::Json => write_json(&mut out, view, &summary),
                ReportFormat::Csv => Ok(export::write_overall_csv(&summary, out)?),
            };
        }
        ReportView::Companies => {
            let rollup = service.companies().await?;
            return match format {
                ReportFormat::Json => write_json(&mut out, view, &rollup),
                ReportFormat::Csv => Ok(export::write_companies_csv(&rollup, out)?),
            };
        }
        ReportView::Applications => WorkflowList::Applied,
        ReportView::Interviews => WorkflowList::Interviewing,
        ReportView::Closed => WorkflowList::Closed,
    };

    let summary = service.status(list).await?;
    match format {
        ReportFormat::Json => write_json(&mut out, view, &summary),
        ReportFormat::Csv => Ok(export::write_status_csv(&summary, out)?),
    }
}

fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    view: ReportView,
    data: T,
) -> Result<(), AppError> {
    let envelope = ReportEnvelope {
        view: view.name(),
        generated_at: Utc::now(),
        data,
    };
    serde_json::to_writer_pretty(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}
