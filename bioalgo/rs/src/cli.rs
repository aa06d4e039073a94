use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bioalgo")]
#[command(about = "Hamming and edit distances, exhaustive optimal alignments, FASTA and Clustal parsing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A pair of sequences given literally or as IDs in a FASTA file.
#[derive(Args, Debug, Clone)]
pub struct Pair {
    /// First sequence, or its ID with --fasta
    pub first: String,

    /// Second sequence, or its ID with --fasta
    pub second: String,

    /// Look up both sequences by ID in this FASTA file (plain or gzip)
    #[arg(short, long)]
    pub fasta: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hamming distance, -1 for sequences of different length
    Hamming {
        #[command(flatten)]
        pair: Pair,
    },

    /// Levenshtein distance with unit costs
    Edit {
        #[command(flatten)]
        pair: Pair,
    },

    /// Print every optimal global alignment
    Align {
        #[command(flatten)]
        pair: Pair,

        /// Follow the diagonal whenever the DP values allow it, regardless of the symbols.
        /// Also reports some suboptimal alignments.
        #[arg(long)]
        relaxed: bool,

        /// Worker threads for the enumeration; 0 or negative values are relative to all cores
        #[arg(short, long, allow_negative_numbers = true)]
        threads: Option<isize>,
    },

    /// List records of a FASTA file
    Fasta {
        /// Input FASTA file (plain or gzip)
        path: PathBuf,
    },

    /// List sequences of a Clustal alignment
    Clustal {
        /// Input Clustal file (plain or gzip)
        path: PathBuf,

        /// Print a single alignment column instead
        #[arg(short, long)]
        column: Option<usize>,
    },
}
