use std::collections::HashSet;

use proptest::prelude::*;

use bioalgo_alignment_rs::pairwise::edit::{self, Table, Traceback};

// Short sequences over a small alphabet keep the number of co-optimal alignments manageable
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACG".to_vec()), 0..8)
}

proptest! {
    #[test]
    fn distance_is_symmetric(seq1 in sequence(), seq2 in sequence()) {
        prop_assert_eq!(
            edit::edit_distance(&seq1, &seq2).0,
            edit::edit_distance(&seq2, &seq1).0
        );
    }

    #[test]
    fn distance_is_bounded(seq1 in sequence(), seq2 in sequence()) {
        let (distance, _) = edit::edit_distance(&seq1, &seq2);
        prop_assert!(distance >= seq1.len().abs_diff(seq2.len()));
        prop_assert!(distance <= seq1.len().max(seq2.len()));
        prop_assert_eq!(distance == 0, seq1 == seq2);
    }

    #[test]
    fn triangle_inequality(seq1 in sequence(), seq2 in sequence(), seq3 in sequence()) {
        let d12 = edit::edit_distance(&seq1, &seq2).0;
        let d23 = edit::edit_distance(&seq2, &seq3).0;
        let d13 = edit::edit_distance(&seq1, &seq3).0;
        prop_assert!(d13 <= d12 + d23);
    }

    #[test]
    fn hamming_bounds_distance(seq1 in sequence(), seq2 in sequence()) {
        match edit::hamming(&seq1, &seq2) {
            Some(hamming) => {
                prop_assert!(hamming <= seq1.len());
                prop_assert!(edit::edit_distance(&seq1, &seq2).0 <= hamming);
                prop_assert_eq!(edit::hamming_distance(&seq1, &seq2), hamming as isize);
            }
            None => {
                prop_assert_ne!(seq1.len(), seq2.len());
                prop_assert_eq!(edit::hamming_distance(&seq1, &seq2), edit::LENGTH_MISMATCH);
            }
        }
    }

    #[test]
    fn exact_alignments_are_optimal(seq1 in sequence(), seq2 in sequence()) {
        let table = Table::build(&seq1, &seq2);
        let alignments = Traceback::Exact.enumerate(&table, &seq1, &seq2).unwrap();
        prop_assert!(!alignments.is_empty());

        let mut unique = HashSet::new();
        for alignment in &alignments {
            prop_assert_eq!(*alignment.score(), table.distance());
            prop_assert_eq!(&alignment.first(), &seq1);
            prop_assert_eq!(&alignment.second(), &seq2);
            prop_assert!(alignment.len() >= seq1.len().max(seq2.len()));
            prop_assert!(unique.insert(alignment.clone()));
        }
    }

    #[test]
    fn relaxed_contains_exact(seq1 in sequence(), seq2 in sequence()) {
        let table = Table::build(&seq1, &seq2);
        let exact = Traceback::Exact.enumerate(&table, &seq1, &seq2).unwrap();
        let relaxed: HashSet<_> = Traceback::Relaxed
            .enumerate(&table, &seq1, &seq2)
            .unwrap()
            .into_iter()
            .collect();
        for alignment in exact {
            prop_assert!(relaxed.contains(&alignment));
        }
        for alignment in &relaxed {
            prop_assert_eq!(&alignment.first(), &seq1);
            prop_assert_eq!(&alignment.second(), &seq2);
        }
    }

    #[test]
    fn self_alignment_is_unique(seq in sequence()) {
        let table = Table::build(&seq, &seq);
        let alignments = Traceback::Exact.enumerate(&table, &seq, &seq).unwrap();
        prop_assert_eq!(alignments.len(), 1);
        prop_assert_eq!(*alignments[0].score(), 0);
    }
}
