use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use bioalgo_core_rs::num::PrimUInt;

use super::column::Column;
use super::op::Op;
use super::step::Step;

/// Gap symbol used to render byte alignments.
pub const GAP: u8 = b'-';

/// A global alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Getters, Dissolve)]
pub struct Alignment<Symbol> {
    /// Number of columns that cost an edit (mismatches and gaps).
    score: usize,
    columns: Vec<Column<Symbol>>,
}

impl<Symbol: PartialEq> Alignment<Symbol> {
    pub fn new(columns: Vec<Column<Symbol>>) -> Self {
        let score = columns.iter().filter(|x| x.is_difference()).count();
        Self { score, columns }
    }

    /// Column operations in order.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.columns.iter().map(|x| x.op())
    }

    /// Run-length encoded alignment steps.
    pub fn steps<Len: PrimUInt>(&self) -> Vec<Step<Len>> {
        Step::from_ops(self.ops())
    }

    /// Returns the RLE representation of the alignment, e.g. `1X1^2=1v3=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps::<usize>().iter())
    }
}

impl<Symbol> Alignment<Symbol> {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<Symbol: Copy> Alignment<Symbol> {
    /// The first sequence with gaps removed.
    pub fn first(&self) -> Vec<Symbol> {
        self.columns.iter().filter_map(|x| x.first().copied()).collect()
    }

    /// The second sequence with gaps removed.
    pub fn second(&self) -> Vec<Symbol> {
        self.columns.iter().filter_map(|x| x.second().copied()).collect()
    }

    /// Both rows of the alignment with gaps rendered as `gap`.
    pub fn gapped(&self, gap: Symbol) -> (Vec<Symbol>, Vec<Symbol>) {
        self.columns
            .iter()
            .map(|x| (*x.first().unwrap_or(&gap), *x.second().unwrap_or(&gap)))
            .unzip()
    }
}

impl Alignment<u8> {
    /// Parses an alignment from two gapped rows of equal length, using [GAP] as the gap symbol.
    pub fn from_rows(first: impl AsRef<[u8]>, second: impl AsRef<[u8]>) -> Result<Self> {
        let (first, second) = (first.as_ref(), second.as_ref());
        ensure!(
            first.len() == second.len(),
            "Alignment rows must have equal length: {} != {}",
            first.len(),
            second.len()
        );

        let mut columns = Vec::with_capacity(first.len());
        for (pos, (&a, &b)) in first.iter().zip(second).enumerate() {
            let column = match (a, b) {
                (GAP, GAP) => eyre::bail!("Gap-only column at position {pos}"),
                (GAP, b) => Column::GapFirst(b),
                (a, GAP) => Column::GapSecond(a),
                (a, b) => Column::Aligned(a, b),
            };
            columns.push(column);
        }
        Ok(Self::new(columns))
    }

    /// Both rows of the alignment as strings with [GAP] for gaps.
    pub fn rows(&self) -> (String, String) {
        let (first, second) = self.gapped(GAP);
        (
            first.into_iter().map(char::from).collect(),
            second.into_iter().map(char::from).collect(),
        )
    }
}

impl Display for Alignment<u8> {
    /// Three lines: the first row, the match line (`|` match, `*` mismatch, blank for gaps), the
    /// second row.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (first, second) = self.rows();
        let markup: String = self
            .ops()
            .map(|op| match op {
                Op::Match => '|',
                Op::Mismatch => '*',
                Op::GapFirst | Op::GapSecond => ' ',
            })
            .collect();
        writeln!(f, "{first}")?;
        writeln!(f, "{markup}")?;
        write!(f, "{second}")
    }
}
