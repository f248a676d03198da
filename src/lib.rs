pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

pub use error::{LoadError, TransformError};
pub use processor::{Transformer, transform};

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init_logging(args.verbose).with_context(|| "Initialising logging")?;

    // 1. ── Load ───────────────────────────────────────────────────────
    let lines = parser::load_lines(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;

    // 2. ── Transform ──────────────────────────────────────────────────
    let report = processor::run(&lines)
        .with_context(|| format!("Transforming {}", args.input.display()))?;

    // 3. ── Write output ───────────────────────────────────────────────
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        cli::Format::Text => {
            writer::text::emit(&report, &mut out).with_context(|| "Writing document")?
        }
        cli::Format::Json => {
            writer::json::emit(&report, &mut out).with_context(|| "Writing JSON report")?
        }
    }

    Ok(())
}
