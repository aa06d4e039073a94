// Sequences are compared symbol by symbol, so the only requirements are random access and a length.
// Byte strings, vectors, arrays and plain `str` all qualify.

/// Trait for sequences that can be compared and aligned.
pub trait Alignable {
    /// The type of individual symbols being aligned.
    type Symbol;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Iterates over all symbols in order.
    fn symbols(&self) -> impl Iterator<Item = &Self::Symbol> {
        (0..self.len()).map(move |pos| self.at(pos))
    }

    /// Copies the sequence into an owned vector of symbols.
    fn to_symbols(&self) -> Vec<Self::Symbol>
    where
        Self::Symbol: Copy,
    {
        self.symbols().copied().collect()
    }

    /// Symbol-wise equality with another sequence over the same alphabet.
    fn same_as<Other>(&self, other: &Other) -> bool
    where
        Other: Alignable<Symbol = Self::Symbol> + ?Sized,
        Self::Symbol: PartialEq,
    {
        self.len() == other.len() && self.symbols().eq(other.symbols())
    }
}

impl<T> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl Alignable for str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

impl Alignable for String {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_and_bytes_agree() {
        let text = "ACGT";
        let bytes: &[u8] = b"ACGT";
        assert_eq!(Alignable::len(text), 4);
        assert!(text.same_as(bytes));
        assert!(text.same_as(&vec![b'A', b'C', b'G', b'T']));
        assert!(!text.same_as(b"ACG"));
        assert!(!text.same_as(b"ACGA"));
    }

    #[test]
    fn test_empty() {
        assert!(Alignable::is_empty(""));
        assert!(Alignable::is_empty(&Vec::<u8>::new()));
        assert!(!Alignable::is_empty(&[1, 2, 3]));
    }

    #[test]
    fn test_to_symbols() {
        assert_eq!("WRITERS".to_symbols(), b"WRITERS".to_vec());
        assert_eq!([3, 2, 1].to_symbols(), vec![3, 2, 1]);
        assert_eq!(*"VITNERS".at(3), b'N');
    }
}
