use std::io::BufRead;
use std::path::Path;

use eyre::{bail, ensure, Result, WrapErr};

use super::msa::Msa;
use crate::compression;

// Conservation lines only hold '*', ':', '.' and whitespace
fn is_conservation(line: &str) -> bool {
    line.chars()
        .all(|x| matches!(x, '*' | ':' | '.') || x.is_ascii_whitespace())
}

/// Parses a Clustal alignment. Chunks of the same sequence are concatenated in the order of their
/// first appearance and stored uppercase. Header lines, empty lines, and conservation lines are
/// skipped. Any other line must be `<id> <residues> [count]`.
pub fn read(reader: impl BufRead) -> Result<Msa> {
    let mut rows: Vec<(String, Vec<u8>)> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with("CLUSTAL") || is_conservation(line) {
            continue;
        }

        let mut parts = line.split_ascii_whitespace();
        let (Some(id), Some(residues)) = (parts.next(), parts.next()) else {
            bail!("Line {}: expected '<id> <residues>', got {line:?}", lineno + 1);
        };
        if let Some(count) = parts.next() {
            ensure!(
                count.bytes().all(|x| x.is_ascii_digit()),
                "Line {}: invalid residue count {count:?}",
                lineno + 1
            );
        }
        ensure!(
            parts.next().is_none(),
            "Line {}: unexpected trailing fields in {line:?}",
            lineno + 1
        );
        ensure!(
            residues.bytes().all(|x| x.is_ascii_alphabetic() || x == b'-'),
            "Line {}: residues must be letters or '-': {residues:?}",
            lineno + 1
        );

        let chunk = residues.to_ascii_uppercase().into_bytes();
        match rows.iter_mut().find(|(x, _)| x == id) {
            Some((_, row)) => row.extend_from_slice(&chunk),
            None => rows.push((id.to_string(), chunk)),
        }
    }

    log::debug!("Parsed {} Clustal sequence(s)", rows.len());
    Msa::new(rows)
}

/// Same as [read], for a possibly gzip-compressed file.
pub fn read_path(path: impl AsRef<Path>) -> Result<Msa> {
    let path = path.as_ref();
    read(compression::read_file(path)?)
        .wrap_err_with(|| format!("Failed to parse the Clustal file {}", path.display()))
}
