//! Command-line entry point: run the pipeline over one FASTA file
//!
//! Thin orchestration only: parse arguments, invoke the pipeline, print the
//! text report, optionally write the HTML report. All failures go to stderr
//! with a non-zero exit status.

use clap::Parser;
use seqdogma::pipeline::run_pipeline;
use seqdogma::report::{render_html, render_text};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the FASTA file to analyze
    file: PathBuf,

    /// Write an HTML report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let results = match run_pipeline(&args.file) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render_text(&results));

    if let Some(output) = &args.output {
        if let Err(e) = std::fs::write(output, render_html(&results)) {
            eprintln!("Error writing report to {}: {}", output.display(), e);
            return ExitCode::FAILURE;
        }
        println!("Report written to {}", output.display());
    }

    ExitCode::SUCCESS
}
