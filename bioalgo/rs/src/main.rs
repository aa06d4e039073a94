use std::io::Write;

use clap::Parser;
use eyre::{OptionExt, Result};

use bioalgo_alignment_rs::pairwise::edit::{self, EngineBuilder, Traceback};
use bioalgo_io_rs::{clustal, fasta};

mod cli;

use cli::{Cli, Commands, Pair};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_fasta(path: &std::path::Path) -> Result<Vec<fasta::Record>> {
    let mut records = Vec::new();
    fasta::Reader::from_path(path)?.read_to_end(&mut records)?;
    log::info!("Loaded {} FASTA record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Resolves the pair to uppercase byte sequences.
fn resolve(pair: &Pair) -> Result<(Vec<u8>, Vec<u8>)> {
    match &pair.fasta {
        None => Ok((
            pair.first.to_ascii_uppercase().into_bytes(),
            pair.second.to_ascii_uppercase().into_bytes(),
        )),
        Some(path) => {
            let mut index = fasta::index(read_fasta(path)?)?;
            let first = index
                .get(&pair.first)
                .cloned()
                .ok_or_eyre(format!("ID {:?} is not present in {}", pair.first, path.display()))?;
            let second = index
                .remove(&pair.second)
                .ok_or_eyre(format!("ID {:?} is not present in {}", pair.second, path.display()))?;
            Ok((first, second))
        }
    }
}

fn align(
    out: &mut impl Write,
    pair: &Pair,
    relaxed: bool,
    threads: Option<isize>,
) -> Result<()> {
    let (seq1, seq2) = resolve(pair)?;

    let traceback = if relaxed {
        Traceback::Relaxed
    } else {
        Traceback::Exact
    };
    let mut builder = EngineBuilder::new().with_traceback(traceback);
    if let Some(threads) = threads {
        builder = builder.with_threads(threads);
    }
    let engine = builder.build()?;

    let distance = engine.edit_distance(&seq1, &seq2)?;
    let alignments = engine.alignments(&seq1, &seq2)?;
    writeln!(out, "Edit distance: {distance}")?;
    for alignment in &alignments {
        writeln!(out)?;
        writeln!(out, "{alignment}")?;
        writeln!(out, "score={} rle={}", alignment.score(), alignment.rle())?;
    }
    writeln!(out)?;
    writeln!(out, "{} alignment(s)", alignments.len())?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Hamming { pair } => {
            let (seq1, seq2) = resolve(&pair)?;
            writeln!(out, "{}", edit::hamming_distance(&seq1, &seq2))?;
        }
        Commands::Edit { pair } => {
            let (seq1, seq2) = resolve(&pair)?;
            let (distance, _) = edit::edit_distance(&seq1, &seq2);
            writeln!(out, "{distance}")?;
        }
        Commands::Align {
            pair,
            relaxed,
            threads,
        } => align(out, &pair, relaxed, threads)?,
        Commands::Fasta { path } => {
            for record in read_fasta(&path)? {
                writeln!(out, ">{}", record.id())?;
                writeln!(out, "{}", record.seq_str())?;
            }
        }
        Commands::Clustal { path, column } => {
            let msa = clustal::read_path(&path)?;
            log::info!(
                "Loaded {} aligned sequence(s) with {} column(s)",
                msa.len(),
                msa.columns()
            );
            match column {
                Some(column) => {
                    writeln!(out, "{}", String::from_utf8_lossy(&msa.column(column)?))?;
                }
                None => {
                    for (id, row) in msa.iter() {
                        writeln!(out, "{id}\t{}", String::from_utf8_lossy(row))?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
