use std::sync::Arc;

use bioalgo_core_rs::Alignable;

use super::table::Table;

#[derive(Clone, Debug)]
struct Entry<Symbol> {
    seq1: Vec<Symbol>,
    seq2: Vec<Symbol>,
    table: Arc<Table>,
}

/// Single-slot memo of the last computed edit distance table.
///
/// Sequences are compared by value. Building a table for a different pair replaces the entry.
#[derive(Clone, Debug)]
pub struct Cache<Symbol> {
    entry: Option<Entry<Symbol>>,
}

impl<Symbol> Default for Cache<Symbol> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<Symbol: Copy + PartialEq> Cache<Symbol> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Returns the cached table if it was built for exactly this pair of sequences.
    pub fn lookup<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Option<Arc<Table>>
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        self.entry
            .as_ref()
            .filter(|x| seq1.same_as(&x.seq1) && seq2.same_as(&x.seq2))
            .map(|x| x.table.clone())
    }

    /// Stores the table for the given pair, evicting the previous entry.
    pub fn insert<S1, S2>(&mut self, seq1: &S1, seq2: &S2, table: Arc<Table>)
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        if self.entry.is_some() {
            log::debug!(
                "Replacing the cached edit distance table with a {}x{} one",
                table.rows(),
                table.cols()
            );
        }
        self.entry = Some(Entry {
            seq1: seq1.to_symbols(),
            seq2: seq2.to_symbols(),
            table,
        });
    }

    /// Returns the table for the pair, building and caching it on a miss. The flag is `true` for
    /// a cache hit.
    pub fn get_or_build<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> (Arc<Table>, bool)
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        if let Some(table) = self.lookup(seq1, seq2) {
            log::debug!("Edit distance table cache hit");
            return (table, true);
        }

        log::debug!(
            "Edit distance table cache miss for sequences of length {} and {}",
            seq1.len(),
            seq2.len()
        );
        let table = Arc::new(Table::build(seq1, seq2));
        self.insert(seq1, seq2, table.clone());
        (table, false)
    }
}
