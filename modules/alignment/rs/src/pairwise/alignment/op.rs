use derive_more::Display;

/// `Op` represents a single column operation in a global alignment with unit edit costs.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Op {
    /// A gap in the first sequence, i.e. a symbol inserted from the second sequence (v)
    #[display("v")]
    GapFirst,
    /// A gap in the second sequence, i.e. a symbol deleted from the first sequence (^)
    #[display("^")]
    GapSecond,
    /// Identical symbols in both sequences (=)
    #[display("=")]
    Match,
    /// A substitution (X)
    #[display("X")]
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the DP table.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns `true` if the operation costs one edit.
    pub fn is_difference(&self) -> bool {
        !matches!(self, Op::Match)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
