use anyhow::{Context, Result};
use clap::Parser;
use filedump::{ConcatBuilder, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Write every file in the current directory into one text file")]
struct Args {
    /// Output file, created or truncated
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let summary = ConcatBuilder::new()
        .output(args.output.clone())
        .build()
        .run()
        .with_context(|| format!("Could not collect files into {}", args.output.display()))?;

    println!("✅ File contents saved in '{}'", summary.output.display());

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the confirmation line
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
