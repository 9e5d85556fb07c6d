use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oncostaging::models::CancerType;
use oncostaging::{config, guidelines, ReportProcessor};

#[derive(Parser)]
#[command(name = "oncostaging", version, about = "TNM staging estimates from PET/CT and pathology reports")]
struct Cli {
    /// Verbose logging (equivalent to ONCOSTAGING_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a report file and print its staging estimate
    Analyze {
        /// Report file: PDF, DOCX, JPEG/PNG/TIFF scan, or plain text
        file: PathBuf,

        /// Emit the full report as JSON instead of prose
        #[arg(long)]
        json: bool,
    },
    /// List supported cancer types and their guideline references
    Types {
        /// Re-check guideline metadata against nccn.org if stale
        #[arg(long)]
        refresh: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "oncostaging=debug".to_string()
    } else {
        config::default_log_filter()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ONCOSTAGING_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Analyze { file, json } => {
            let processor = ReportProcessor::new();
            let report = processor.process_with_progress(&file, |stage| {
                tracing::info!(stage = stage.as_str(), "pipeline stage");
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.summary());
            }
            Ok(())
        }
        Command::Types { refresh } => {
            if refresh {
                let mut cache = guidelines::GuidelinesCache::load(&config::guidelines_cache_path());
                let refreshed = cache.refresh_stale(&reqwest::blocking::Client::new());
                tracing::info!(refreshed, "guidelines cache refresh finished");
            }

            println!("Supported cancer types:");
            for ct in CancerType::ALL {
                let g = guidelines::guideline_for(ct);
                println!("  {:<14} {} ({})", ct.as_str(), g.title, g.url);
            }
            Ok(())
        }
    }
}
