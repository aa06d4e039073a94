use super::op::Op;

/// A single alignment column. Gaps are encoded by the variant, so the gap symbol can never collide
/// with the sequence alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Column<Symbol> {
    /// A symbol of the first sequence aligned against a symbol of the second one.
    Aligned(Symbol, Symbol),
    /// A gap in the first sequence against a symbol of the second one.
    GapFirst(Symbol),
    /// A symbol of the first sequence against a gap in the second one.
    GapSecond(Symbol),
}

impl<Symbol> Column<Symbol> {
    /// Symbol contributed by the first sequence, `None` for a gap.
    pub fn first(&self) -> Option<&Symbol> {
        match self {
            Column::Aligned(first, _) | Column::GapSecond(first) => Some(first),
            Column::GapFirst(_) => None,
        }
    }

    /// Symbol contributed by the second sequence, `None` for a gap.
    pub fn second(&self) -> Option<&Symbol> {
        match self {
            Column::Aligned(_, second) | Column::GapFirst(second) => Some(second),
            Column::GapSecond(_) => None,
        }
    }

    pub fn op(&self) -> Op
    where
        Symbol: PartialEq,
    {
        match self {
            Column::Aligned(first, second) if first == second => Op::Match,
            Column::Aligned(..) => Op::Mismatch,
            Column::GapFirst(_) => Op::GapFirst,
            Column::GapSecond(_) => Op::GapSecond,
        }
    }

    /// Mismatches and gaps cost one edit, matches are free.
    pub fn is_difference(&self) -> bool
    where
        Symbol: PartialEq,
    {
        self.op().is_difference()
    }
}
