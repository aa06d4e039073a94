pub use cache::Cache;
pub use engine::{Engine, EngineBuilder};
pub use hamming::{hamming, hamming_distance, LENGTH_MISMATCH};
pub use table::Table;
pub use traceback::{Move, Traceback};

use bioalgo_core_rs::Alignable;

mod cache;
mod engine;
mod hamming;
mod table;
mod traceback;

/// Levenshtein distance between two sequences together with the full DP table.
pub fn edit_distance<S1, S2>(seq1: &S1, seq2: &S2) -> (usize, Table)
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    let table = Table::build(seq1, seq2);
    (table.distance(), table)
}
