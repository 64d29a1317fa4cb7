mod calc;
mod cmd;
mod data;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "workdays", about = "count working days between dates")]
struct Cli {
    /// Path to the data directory containing config.yaml and holidays.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default region config and holiday list
    Init,
    /// Count working days in an inclusive date range (either order)
    Count {
        start: String,
        end: String,
        /// chrono format of START and END (default: region date_format)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Show how each day of a date or range is classified
    Check {
        date: String,
        /// Optional end of the range
        end: Option<String>,
    },
    /// Add a Working_Days column to every row of a JSON or YAML row file
    Batch {
        /// Row file with Start_Date and End_Date columns
        input: PathBuf,
        /// Where to write results (.json or .yaml); stdout as JSON if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Preferred chrono format of the date cells (default: region date_format)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Write a sample row file
    Sample {
        #[arg(default_value = "sample_dates.json")]
        output: PathBuf,
    },
    /// List weekend days and holidays
    Holidays,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "workdays=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Commands::Init);
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Count { start, end, format } => cmd::count::run(&start, &end, format.as_deref()),
        Commands::Check { date, end } => cmd::check::run(&date, end.as_deref()),
        Commands::Batch {
            input,
            output,
            format,
        } => cmd::batch::run(&input, output.as_deref(), format.as_deref()),
        Commands::Sample { output } => cmd::sample::run(&output),
        Commands::Holidays => cmd::holidays::run(),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
