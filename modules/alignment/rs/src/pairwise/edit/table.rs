use std::ops::Index;

use derive_getters::Getters;

use bioalgo_core_rs::Alignable;

/// Dense DP table of prefix edit distances.
///
/// `table[(i, j)]` is the minimum number of insertions, deletions and substitutions that turn the
/// first `i` symbols of the first sequence into the first `j` symbols of the second one. The table
/// has `m + 1` rows and `n + 1` columns and is never modified after [Table::build].
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Table {
    rows: usize,
    cols: usize,
    #[getter(skip)]
    cells: Vec<usize>,
}

impl Table {
    /// Fills the table row by row. Row 0 and column 0 hold the distances to the empty prefix.
    pub fn build<S1, S2>(seq1: &S1, seq2: &S2) -> Self
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        S1::Symbol: PartialEq,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        log::trace!("Building a {rows}x{cols} edit distance table");

        let mut cells = vec![0; rows * cols];
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            cells[i * cols] = i;
            let symbol = seq1.at(i - 1);
            for j in 1..cols {
                let delta = usize::from(symbol != seq2.at(j - 1));
                let up = cells[(i - 1) * cols + j] + 1;
                let left = cells[i * cols + j - 1] + 1;
                let diagonal = cells[(i - 1) * cols + j - 1] + delta;
                cells[i * cols + j] = up.min(left).min(diagonal);
            }
        }

        Self { rows, cols, cells }
    }

    /// Value of the cell `(i, j)`, `None` outside the table.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// The edit distance between the full sequences, i.e. the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Returns true if the table dimensions correspond to the given pair of sequences.
    pub fn fits<S1, S2>(&self, seq1: &S1, seq2: &S2) -> bool
    where
        S1: Alignable + ?Sized,
        S2: Alignable + ?Sized,
    {
        self.rows == seq1.len() + 1 && self.cols == seq2.len() + 1
    }

    /// Rows of the table, from the empty prefix of the first sequence onwards.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks_exact(self.cols)
    }
}

impl Index<(usize, usize)> for Table {
    type Output = usize;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}
