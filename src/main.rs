use anyhow::Result;
use clap::{Parser, Subcommand};

use tripreport::cli::{
    handle_export_command, handle_markup_command, handle_summary_command, ExportArgs, MarkupArgs,
    SummaryArgs,
};
use tripreport::config::{paths::ReportPaths, settings::Settings};
use tripreport::services::Exporter;
use tripreport::storage::{initialize_storage, FileRecordStore, SAMPLE_RECORD_ID};

/// Environment variable holding the log filter (e.g. "debug", "tripreport=info")
const LOG_ENV_VAR: &str = "TRIPREPORT_LOG";

#[derive(Parser)]
#[command(
    name = "tripreport",
    author = "Kaylee Beyene",
    version,
    about = "Budget, timeline and full-trip reports for travel plans",
    long_about = "tripreport turns a stored travel plan into a printable PDF report \
                  (budget, timeline or the combined experience document) or a CSV \
                  of budget line items."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a record as PDF or CSV
    Export(ExportArgs),

    /// Print a budget and progress summary for a record
    Summary(SummaryArgs),

    /// Print the printable markup for a record without rendering it
    Markup(MarkupArgs),

    /// Create the data directories, settings file and a sample record
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "warn".to_string());
    let mut builder = pretty_env_logger::formatted_builder();
    builder.parse_filters(&filter);
    // A second init (e.g. from a test harness) is harmless
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = FileRecordStore::new(paths.records_dir());

    match cli.command {
        Some(Commands::Export(args)) => {
            let exporter = Exporter::new(store, settings, &paths);
            handle_export_command(&exporter, &args)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&store, &settings, &args)?;
        }
        Some(Commands::Markup(args)) => {
            let exporter = Exporter::new(store, settings, &paths);
            handle_markup_command(&exporter, &args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tripreport at: {}", paths.base_dir().display());
            let wrote_sample = initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if wrote_sample {
                println!();
                println!("A sample record has been created. Try:");
                println!("  tripreport summary {}", SAMPLE_RECORD_ID);
                println!(
                    "  tripreport export {} --kind budget --format csv",
                    SAMPLE_RECORD_ID
                );
            }
        }
        Some(Commands::Config) => {
            println!("tripreport Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Records directory: {}", paths.records_dir().display());
            println!("Work directory:    {}", paths.work_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!(
                "  Renderer:        {} {}",
                settings.renderer.program,
                settings.renderer.args.join(" ")
            );
            println!("  Render timeout:  {}s", settings.renderer.timeout_secs);
            println!("  Max concurrent:  {}", settings.renderer.max_concurrent);
            println!("  Queue timeout:   {}s", settings.renderer.queue_timeout_secs);
            println!("  Date format:     {}", settings.date_format);
            println!("  Timestamp format: {}", settings.timestamp_format);
        }
        None => {
            println!("tripreport - travel plan reports");
            println!();
            println!("Run 'tripreport --help' for usage information.");
            println!("Run 'tripreport init' to create a sample record.");
        }
    }

    Ok(())
}
