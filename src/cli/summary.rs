//! CLI command for a terminal summary of a record

use clap::Args;

use crate::config::Settings;
use crate::display::format_record_summary;
use crate::error::ReportResult;
use crate::format::Formatters;
use crate::models::RecordId;
use crate::storage::RecordSource;

/// Arguments for `tripreport summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Record id
    pub record: String,
}

/// Handle the summary command
pub fn handle_summary_command(
    source: &dyn RecordSource,
    settings: &Settings,
    args: &SummaryArgs,
) -> ReportResult<()> {
    let record = source.fetch(&RecordId::new(args.record.trim()))?;
    let formatters = Formatters::new(&record.budget.currency, settings);

    print!("{}", format_record_summary(&record, &formatters));
    Ok(())
}
