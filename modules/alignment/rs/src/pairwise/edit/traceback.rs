use std::sync::Arc;

use eyre::{bail, ensure, Result};
use rayon::prelude::*;

use bioalgo_core_rs::Alignable;

use super::table::Table;
use crate::pairwise::{Alignment, Column};

/// A backward move from the cell `(i, j)` to one of its predecessors.
///
/// The declaration order is the tie-break order: when several predecessors are optimal, they are
/// explored up first, then left, then diagonal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Move {
    /// To `(i - 1, j)`: the symbol of the first sequence is aligned against a gap.
    Up,
    /// To `(i, j - 1)`: a gap is aligned against the symbol of the second sequence.
    Left,
    /// To `(i - 1, j - 1)`: a match or a substitution.
    Diagonal,
}

impl Move {
    pub const ORDER: [Move; 3] = [Move::Up, Move::Left, Move::Diagonal];

    /// The predecessor cell, `None` if the move leaves the table.
    pub fn origin(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            Move::Up => Some((i.checked_sub(1)?, j)),
            Move::Left => Some((i, j.checked_sub(1)?)),
            Move::Diagonal => Some((i.checked_sub(1)?, j.checked_sub(1)?)),
        }
    }
}

/// Rule deciding which predecessors of a DP cell are followed during the traceback.
///
/// Gap moves are identical for both rules: `(i - 1, j)` and `(i, j - 1)` are followed iff their
/// value plus one equals the current cell. The rules differ on the diagonal only.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Traceback {
    /// The diagonal is followed iff `table[i-1][j-1] + delta(i, j) == table[i][j]`, where delta is
    /// 0 for identical symbols and 1 otherwise. Every enumerated alignment is optimal.
    #[default]
    Exact,
    /// The diagonal is followed whenever `table[i-1][j-1]` equals `table[i][j]` or
    /// `table[i][j] - 1`, regardless of the symbols. Yields a superset of [Traceback::Exact]
    /// whose extra members may cost more than the edit distance.
    Relaxed,
}

impl Traceback {
    /// Returns true if `mv` leads from `(i, j)` to a predecessor under this rule.
    pub fn follows<S1, S2>(
        &self,
        table: &Table,
        seq1: &S1,
        seq2: &S2,
        (i, j): (usize, usize),
        mv: Move,
    ) -> bool
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        S1::Symbol: PartialEq,
    {
        let Some(origin) = mv.origin(i, j) else {
            return false;
        };
        let (current, previous) = (table[(i, j)], table[origin]);

        match (mv, self) {
            (Move::Up | Move::Left, _) => previous + 1 == current,
            (Move::Diagonal, Traceback::Exact) => {
                let delta = usize::from(seq1.at(i - 1) != seq2.at(j - 1));
                previous + delta == current
            }
            (Move::Diagonal, Traceback::Relaxed) => {
                previous == current || previous + 1 == current
            }
        }
    }

    /// Predecessors of the cell `(i, j)` in tie-break order.
    pub fn predecessors<'a, S1, S2>(
        &'a self,
        table: &'a Table,
        seq1: &'a S1,
        seq2: &'a S2,
        cell: (usize, usize),
    ) -> impl Iterator<Item = Move> + 'a
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        S1::Symbol: PartialEq,
    {
        Move::ORDER
            .into_iter()
            .filter(move |mv| self.follows(table, seq1, seq2, cell, *mv))
    }

    /// Enumerates every alignment reachable from the bottom-right cell back to `(0, 0)`.
    ///
    /// Alignments are produced in depth-first order with predecessors visited in [Move::ORDER],
    /// so repeated calls return identical vectors. Fails if the table was not built for the given
    /// pair of sequences.
    pub fn enumerate<S1, S2>(
        &self,
        table: &Table,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Vec<Alignment<S1::Symbol>>>
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        S1::Symbol: Copy + PartialEq,
    {
        let walker = Walker::new(*self, table, seq1, seq2)?;
        let mut alignments = Vec::new();
        walker.walk(seq1.len(), seq2.len(), None, &mut alignments)?;

        self.report(table, &alignments);
        Ok(alignments)
    }

    /// Same as [Traceback::enumerate], but the branches leaving the bottom-right cell are explored
    /// in parallel on the current rayon thread pool. Results are merged in tie-break order, so the
    /// output is identical to the sequential one.
    pub fn enumerate_par<S1, S2>(
        &self,
        table: &Table,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Vec<Alignment<S1::Symbol>>>
    where
        S1: Alignable + Sync + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + Sync + ?Sized,
        S1::Symbol: Copy + PartialEq + Send + Sync,
    {
        let walker = Walker::new(*self, table, seq1, seq2)?;
        let cell = (seq1.len(), seq2.len());
        if cell == (0, 0) {
            return Ok(vec![Alignment::new(Vec::new())]);
        }

        let branches: Vec<Move> = self.predecessors(table, seq1, seq2, cell).collect();
        ensure!(
            !branches.is_empty(),
            "Inconsistent DP table: no predecessors for the cell {cell:?}"
        );

        let branches: Vec<Vec<Alignment<S1::Symbol>>> = branches
            .into_par_iter()
            .map(|mv| {
                let mut local = Vec::new();
                walker.descend(cell, mv, &None, &mut local)?;
                Ok(local)
            })
            .collect::<Result<_>>()?;

        let alignments: Vec<_> = branches.into_iter().flatten().collect();
        self.report(table, &alignments);
        Ok(alignments)
    }

    fn report<Symbol>(&self, table: &Table, alignments: &[Alignment<Symbol>]) {
        log::debug!(
            "Enumerated {} alignment(s) at edit distance {} ({:?} traceback)",
            alignments.len(),
            table.distance(),
            self
        );

        let suboptimal = alignments
            .iter()
            .filter(|x| *x.score() > table.distance())
            .count();
        if suboptimal > 0 {
            log::warn!(
                "{suboptimal} of {} alignment(s) cost more than the edit distance {}",
                alignments.len(),
                table.distance()
            );
        }
    }
}

// Persistent partial alignment. Walking backwards prepends columns, so sibling branches share the
// already visited suffix and never see each other's columns. Following the links from the head
// yields the columns in forward order.
type Trail<Symbol> = Option<Arc<Link<Symbol>>>;

struct Link<Symbol> {
    column: Column<Symbol>,
    next: Trail<Symbol>,
}

fn prepend<Symbol>(trail: &Trail<Symbol>, column: Column<Symbol>) -> Trail<Symbol> {
    Some(Arc::new(Link {
        column,
        next: trail.clone(),
    }))
}

fn materialize<Symbol: Copy>(trail: &Trail<Symbol>) -> Vec<Column<Symbol>> {
    let mut columns = Vec::new();
    let mut cursor = trail.as_deref();
    while let Some(link) = cursor {
        columns.push(link.column);
        cursor = link.next.as_deref();
    }
    columns
}

struct Walker<'a, S1: ?Sized, S2: ?Sized> {
    rule: Traceback,
    table: &'a Table,
    seq1: &'a S1,
    seq2: &'a S2,
}

impl<'a, S1, S2> Walker<'a, S1, S2>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Copy + PartialEq,
{
    fn new(rule: Traceback, table: &'a Table, seq1: &'a S1, seq2: &'a S2) -> Result<Self> {
        if !table.fits(seq1, seq2) {
            bail!(
                "Precondition violated: a {}x{} table can't be traced back for sequences of length {} and {}",
                table.rows(),
                table.cols(),
                seq1.len(),
                seq2.len()
            );
        }
        Ok(Self {
            rule,
            table,
            seq1,
            seq2,
        })
    }

    // Column produced by leaving (i, j) through the given move
    fn column(&self, (i, j): (usize, usize), mv: Move) -> Column<S1::Symbol> {
        match mv {
            Move::Up => Column::GapSecond(*self.seq1.at(i - 1)),
            Move::Left => Column::GapFirst(*self.seq2.at(j - 1)),
            Move::Diagonal => Column::Aligned(*self.seq1.at(i - 1), *self.seq2.at(j - 1)),
        }
    }

    fn walk(
        &self,
        i: usize,
        j: usize,
        trail: Trail<S1::Symbol>,
        saveto: &mut Vec<Alignment<S1::Symbol>>,
    ) -> Result<()> {
        if i == 0 && j == 0 {
            saveto.push(Alignment::new(materialize(&trail)));
            return Ok(());
        }

        let mut explored = false;
        for mv in self
            .rule
            .predecessors(self.table, self.seq1, self.seq2, (i, j))
        {
            self.descend((i, j), mv, &trail, saveto)?;
            explored = true;
        }
        ensure!(
            explored,
            "Inconsistent DP table: no predecessors for the cell {:?}",
            (i, j)
        );
        Ok(())
    }

    fn descend(
        &self,
        cell: (usize, usize),
        mv: Move,
        trail: &Trail<S1::Symbol>,
        saveto: &mut Vec<Alignment<S1::Symbol>>,
    ) -> Result<()> {
        let Some((i, j)) = mv.origin(cell.0, cell.1) else {
            bail!("Move {mv:?} leaves the table at the cell {cell:?}");
        };
        let trail = prepend(trail, self.column(cell, mv));
        self.walk(i, j, trail, saveto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(alignments: &[Alignment<u8>]) -> Vec<(String, String)> {
        alignments.iter().map(|x| x.rows()).collect()
    }

    #[test]
    fn test_move_origin() {
        assert_eq!(Move::Up.origin(0, 3), None);
        assert_eq!(Move::Left.origin(2, 0), None);
        assert_eq!(Move::Diagonal.origin(1, 0), None);
        assert_eq!(Move::Diagonal.origin(1, 1), Some((0, 0)));
        assert_eq!(Move::Up.origin(2, 1), Some((1, 1)));
        assert_eq!(Move::Left.origin(2, 1), Some((2, 0)));
    }

    #[test]
    fn test_predecessors() {
        let table = Table::build("AB", "BA");
        // 2 = substitution from (1, 1) or a gap from either neighbour
        let moves: Vec<_> = Traceback::Exact
            .predecessors(&table, "AB", "BA", (2, 2))
            .collect();
        assert_eq!(moves, [Move::Up, Move::Left, Move::Diagonal]);

        // Matching symbols at (1, 2): only the diagonal is consistent
        let moves: Vec<_> = Traceback::Exact
            .predecessors(&table, "AB", "BA", (1, 2))
            .collect();
        assert_eq!(moves, [Move::Diagonal]);

        // Borders only have one way back
        let moves: Vec<_> = Traceback::Exact
            .predecessors(&table, "AB", "BA", (0, 2))
            .collect();
        assert_eq!(moves, [Move::Left]);
    }

    #[test]
    fn test_tie_break_order() -> Result<()> {
        let table = Table::build("AB", "BA");
        let alignments = Traceback::Exact.enumerate(&table, "AB", "BA")?;
        assert_eq!(
            rows(&alignments),
            [
                ("-AB".to_string(), "BA-".to_string()),
                ("AB-".to_string(), "-BA".to_string()),
                ("AB".to_string(), "BA".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_sequences() -> Result<()> {
        let table = Table::build("", "");
        let alignments = Traceback::Exact.enumerate(&table, "", "")?;
        assert_eq!(alignments.len(), 1);
        assert!(alignments[0].is_empty());

        let table = Table::build("", "ACG");
        let alignments = Traceback::Exact.enumerate(&table, "", "ACG")?;
        assert_eq!(rows(&alignments), [("---".to_string(), "ACG".to_string())]);
        Ok(())
    }

    #[test]
    fn test_table_mismatch_fails() {
        let table = Table::build("ACGT", "ACG");
        assert!(Traceback::Exact.enumerate(&table, "ACG", "ACGT").is_err());
        assert!(Traceback::Relaxed.enumerate_par(&table, "ACGT", "AC").is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() -> Result<()> {
        for (seq1, seq2) in [
            ("WRITERS", "VITNERS"),
            ("AGTACGCA", "TATGC"),
            ("", "A"),
            ("", ""),
        ] {
            let table = Table::build(seq1, seq2);
            for rule in [Traceback::Exact, Traceback::Relaxed] {
                assert_eq!(
                    rule.enumerate(&table, seq1, seq2)?,
                    rule.enumerate_par(&table, seq1, seq2)?
                );
            }
        }
        Ok(())
    }
}
