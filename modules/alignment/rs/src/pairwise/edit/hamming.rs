use bioalgo_core_rs::Alignable;

/// Sentinel returned by [hamming_distance] for sequences of different length.
pub const LENGTH_MISMATCH: isize = -1;

/// Number of positions at which two equal-length sequences differ.
/// Returns `None` if the sequences have different lengths.
pub fn hamming<S1, S2>(seq1: &S1, seq2: &S2) -> Option<usize>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    if seq1.len() != seq2.len() {
        return None;
    }
    Some(
        seq1.symbols()
            .zip(seq2.symbols())
            .filter(|(a, b)| a != b)
            .count(),
    )
}

/// Same as [hamming], but incomparable sequences are reported with the [LENGTH_MISMATCH] sentinel
/// instead of `None`. Callers must check for it explicitly.
pub fn hamming_distance<S1, S2>(seq1: &S1, seq2: &S2) -> isize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    match hamming(seq1, seq2) {
        Some(distance) => distance as isize,
        None => LENGTH_MISMATCH,
    }
}
