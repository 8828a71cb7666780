//! Command-line interface for rehead-sq.
//!
//! A single-purpose filter: SAM text on stdin, rewritten SAM text on stdout.
//!
//! ## Usage
//!
//! ```text
//! # Normalize the header of an existing alignment
//! samtools view -h sample.bam | rehead-sq --dict genome.fa.dict | samtools view -b -o fixed.bam
//!
//! # Straight from an aligner
//! bwa mem genome.fa reads.fq | rehead-sq -d genome.fa.dict > aligned.sam
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::parsing::dict::parse_dict_file;
use crate::rewrite::rewrite;

#[derive(Parser)]
#[command(name = "rehead-sq")]
#[command(version)]
#[command(about = "Replace @SQ lines in a streamed SAM header with sequence dictionary entries")]
#[command(
    long_about = "Takes SAM format on stdin and prints it to stdout with every @SQ header line \
replaced by the matching entry from a sequence dictionary file (as generated by 'samtools dict'). \
All other header lines and the entire alignment body pass through unchanged."
)]
pub struct Cli {
    /// Path to the sequence dictionary (.dict) file
    #[arg(short, long, value_name = "FILE")]
    pub dict: PathBuf,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Execute the rewrite, stdin to stdout.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or the stream cannot
/// be rewritten; the caller terminates the process.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let dict = parse_dict_file(&cli.dict)
        .with_context(|| format!("failed to load sequence dictionary {}", cli.dict.display()))?;

    debug!(
        "loaded {} @SQ entries from {}",
        dict.len(),
        cli.dict.display()
    );

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    rewrite(&dict, stdin, stdout)?;

    Ok(())
}
