use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{debug, info, LevelFilter};

use phrasefinder::PhraseMatcher;

/// Report every dictionary phrase found on each line of a text file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dictionary file, one phrase per line ('#' starts a comment)
    dictionary: PathBuf,

    /// Text file to scan line by line
    input: PathBuf,

    /// Also print lines without any match
    #[arg(long)]
    show_all: bool,

    /// Report each phrase at most once per line
    #[arg(long, short = 'u')]
    unique: bool,

    /// Verbose/info output (default: warnings only)
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("phrasefinder: {error:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let matcher = PhraseMatcher::from_file(&args.dictionary)
        .context("Failed to load the phrase dictionary")?;
    info!(
        "dictionary {} compiled to {} automaton states",
        args.dictionary.display(),
        matcher.automaton().trie().node_count()
    );

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut matched_lines = 0usize;
    for (index, line) in BufReader::new(input).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", args.input.display()))?;
        let found = matcher.find_in(&line);
        debug!("line {}: {} matches", index + 1, found.len());
        if found.is_empty() && !args.show_all {
            continue;
        }
        matched_lines += usize::from(!found.is_empty());
        let phrases = if args.unique {
            found.into_iter().unique().join("; ")
        } else {
            found.join("; ")
        };
        writeln!(out, "{}: {}", index + 1, phrases)?;
    }
    out.flush()?;
    info!("{matched_lines} lines contained at least one phrase");
    Ok(())
}
