use std::sync::{Arc, Mutex, MutexGuard};

use eyre::{eyre, Result};
use rayon::ThreadPool;

use bioalgo_core_rs::parallelism;
use bioalgo_core_rs::Alignable;

use super::cache::Cache;
use super::hamming;
use super::table::Table;
use super::traceback::Traceback;
use crate::pairwise::Alignment;

/// Pairwise edit distance engine.
///
/// Keeps the last computed DP table, so repeated queries for the same pair of sequences (e.g.
/// the distance followed by the alignments) fill the table only once. The engine is `Sync` and
/// can be shared between threads; the cache is guarded by a mutex.
pub struct Engine<Symbol> {
    cache: Mutex<Cache<Symbol>>,
    traceback: Traceback,
    pool: Option<ThreadPool>,
}

pub struct EngineBuilder {
    traceback: Traceback,
    threads: Option<isize>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            traceback: Traceback::default(),
            threads: None,
        }
    }
}

impl EngineBuilder {
    /// The symbol type of the resulting engine is fixed by [EngineBuilder::build].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_traceback(mut self, traceback: Traceback) -> Self {
        self.traceback = traceback;
        self
    }

    /// Enumerate alignments on a dedicated thread pool. Non-positive values are relative to the
    /// number of available cores, see [parallelism::available].
    pub fn with_threads(mut self, threads: isize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build<Symbol>(self) -> Result<Engine<Symbol>> {
        let pool = match self.threads {
            Some(threads) => Some(parallelism::pool(threads)?),
            None => None,
        };
        Ok(Engine {
            cache: Mutex::new(Cache::default()),
            traceback: self.traceback,
            pool,
        })
    }
}

impl<Symbol> Default for Engine<Symbol> {
    fn default() -> Self {
        Self {
            cache: Mutex::new(Cache::default()),
            traceback: Traceback::default(),
            pool: None,
        }
    }
}

impl<Symbol> Engine<Symbol> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn traceback(&self) -> Traceback {
        self.traceback
    }

    /// Number of worker threads used for the enumeration, 1 if there is no dedicated pool.
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map(|x| x.current_num_threads())
            .unwrap_or(1)
    }

    fn cache(&self) -> Result<MutexGuard<'_, Cache<Symbol>>> {
        self.cache
            .lock()
            .map_err(|_| eyre!("Edit distance cache is poisoned"))
    }
}

impl<Symbol: Copy + PartialEq> Engine<Symbol> {
    /// See [hamming::hamming].
    pub fn hamming<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Option<usize>
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        hamming::hamming(seq1, seq2)
    }

    /// See [hamming::hamming_distance].
    pub fn hamming_distance<S1, S2>(&self, seq1: &S1, seq2: &S2) -> isize
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        hamming::hamming_distance(seq1, seq2)
    }

    /// DP table for the pair, taken from the cache when possible.
    pub fn table<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Arc<Table>>
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        let (table, _) = self.cache()?.get_or_build(seq1, seq2);
        Ok(table)
    }

    /// Levenshtein distance with unit costs.
    pub fn edit_distance<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<usize>
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        Ok(self.table(seq1, seq2)?.distance())
    }

    /// All alignments accepted by the engine's traceback rule, in tie-break order.
    pub fn alignments<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Vec<Alignment<Symbol>>>
    where
        S1: Alignable<Symbol = Symbol> + Sync + ?Sized,
        S2: Alignable<Symbol = Symbol> + Sync + ?Sized,
        Symbol: Send + Sync,
    {
        let table = self.table(seq1, seq2)?;
        match &self.pool {
            Some(pool) => pool.install(|| self.traceback.enumerate_par(&table, seq1, seq2)),
            None => self.traceback.enumerate(&table, seq1, seq2),
        }
    }

    /// Drops the cached table.
    pub fn reset(&self) -> Result<()> {
        self.cache()?.clear();
        Ok(())
    }
}
