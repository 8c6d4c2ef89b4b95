use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::doublets::Strategy;
use crate::graph::MAXIMUM;

/// Word pairs the program solves when none are given on the command line.
pub const DEMO_PAIRS: [(&str, &str); 7] = [
    ("black", "white"),
    ("tears", "smile"),
    ("small", "giant"),
    ("stone", "money"),
    ("angel", "devil"),
    ("amino", "rights"),
    ("amigo", "signs"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Csv,
}

/// Solve doublet puzzles (word ladders) over a dictionary of equal-length words
#[derive(Parser, Debug)]
#[command(name = "doublets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word list, one or more words per line
    #[arg(long, env = "DOUBLETS_WORDS", default_value = "knuth.txt")]
    pub words: PathBuf,

    /// Letters per word; words of other lengths are skipped
    #[arg(long, default_value_t = 5)]
    pub length: usize,

    /// Which ladder to report
    #[arg(long, value_enum, default_value_t = Strategy::Shortest)]
    pub strategy: Strategy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Maximum number of words kept in the graph
    #[arg(long, default_value_t = MAXIMUM)]
    pub capacity: usize,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Puzzles as FROM:TO; defaults to the built-in demo pairs
    #[arg(value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,
}

impl Cli {
    pub fn pairs(&self) -> Vec<(String, String)> {
        if self.pairs.is_empty() {
            DEMO_PAIRS
                .iter()
                .map(|&(a, b)| (a.to_string(), b.to_string()))
                .collect()
        } else {
            self.pairs.clone()
        }
    }
}

pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_lowercase(), to.trim().to_lowercase()))
        }
        _ => Err(format!("expected FROM:TO, got {s:?}")),
    }
}
