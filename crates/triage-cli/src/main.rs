//! `triage` - plan a remediation roadmap from the latest health analysis.

use clap::{Arg, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triage_cli::run::run;
use triage_report::{LatestFileProvider, ReportProvider, SingleFileProvider};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("triage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scoring-driven remediation planner")
        .arg(
            Arg::new("dir")
                .long("dir")
                .default_value(".")
                .help("Directory scanned for analysis reports and used for output"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Plan from an explicit report file instead of the latest one"),
        );

    let matches = cli.get_matches();
    let dir = PathBuf::from(matches.get_one::<String>("dir").expect("has default"));

    let provider: Box<dyn ReportProvider> = match matches.get_one::<String>("report") {
        Some(path) => Box::new(SingleFileProvider::new(path)),
        None => Box::new(LatestFileProvider::new(&dir)),
    };

    match run(provider.as_ref(), &dir) {
        Ok(summary) => {
            println!("Remediation roadmap: {} tasks", summary.total_tasks);
            for (name, count) in &summary.phase_counts {
                println!("  {name}: {count} tasks");
            }
            println!("Next action: {}", summary.next_action);
            println!("Saved to {}", summary.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Missing input, malformed input, empty report and export
            // failure all land here; all are non-zero for automation.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
