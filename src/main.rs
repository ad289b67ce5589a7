use clap::Parser;
use main_error::MainError;
use quake_log_parser::report::Report;
use quake_log_parser::{parse_file, Error};
use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Summarize the kills of every match in a Quake 3 Arena server log
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Server log to parse
    log: PathBuf,
    /// Write the json report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also print an overview of the first N matches
    #[arg(short = 'n', long)]
    display: Option<NonZeroUsize>,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(stderr)
        .init();
}

fn main() -> Result<(), MainError> {
    init_logging();
    let args = Args::parse();

    let log = parse_file(&args.log)?;
    if log.is_empty() {
        info!(log = %args.log.display(), "no matches found");
    } else {
        info!(
            matches = log.len(),
            malformed = log.diagnostics.len(),
            "parsed log"
        );
    }

    let report = Report::new(&log);
    let summary = args.display.map(|limit| report.summary(limit.get()));

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(Error::Write)?;
            report.write_json(BufWriter::new(file))?;
            info!(output = %path.display(), "report written");
            if let Some(summary) = summary {
                print!("{}", summary);
            }
        }
        None => {
            report.write_json(stdout().lock())?;
            if let Some(summary) = summary {
                write!(stderr(), "{}", summary)?;
            }
        }
    }

    Ok(())
}
