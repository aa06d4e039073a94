use eyre::Result;

use bioalgo_alignment_rs::pairwise::edit::{self, Engine, EngineBuilder, Traceback, LENGTH_MISMATCH};
use bioalgo_alignment_rs::pairwise::Alignment;

use super::rows;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    distance: usize,
    alignments: Vec<(&'a str, &'a str)>,
}

fn ensure(engine: &Engine<u8>, w: Workload<'_>) -> Result<()> {
    assert_eq!(engine.edit_distance(w.seq1, w.seq2)?, w.distance);
    assert_eq!(edit::edit_distance(w.seq1, w.seq2).0, w.distance);

    let expected: Vec<_> = w
        .alignments
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    let alignments = engine.alignments(w.seq1, w.seq2)?;
    assert_eq!(rows(&alignments), expected, "{} vs {}", w.seq1, w.seq2);

    // Swapping the sequences doesn't change the distance
    assert_eq!(engine.edit_distance(w.seq2, w.seq1)?, w.distance);
    Ok(())
}

#[test]
fn test_hamming() {
    assert_eq!(edit::hamming_distance("blabla", "patla"), LENGTH_MISMATCH);
    assert_eq!(edit::hamming("blabla", "patla"), None);
    assert_eq!(edit::hamming_distance("abba", "abba"), 0);
    assert_eq!(edit::hamming_distance("abba", "baba"), 2);
    assert_eq!(edit::hamming_distance("abba", "cdef"), 4);
    assert_eq!(edit::hamming_distance("", ""), 0);
}

#[test]
fn test_exact() -> Result<()> {
    let engine = Engine::new();
    let workload = vec![
        Workload {
            seq1: "red",
            seq2: "red",
            distance: 0,
            alignments: vec![("red", "red")],
        },
        Workload {
            seq1: "doll",
            seq2: "poll",
            distance: 1,
            alignments: vec![("doll", "poll")],
        },
        Workload {
            seq1: "anna",
            seq2: "ann",
            distance: 1,
            alignments: vec![("anna", "ann-")],
        },
        Workload {
            seq1: "les",
            seq2: "ples",
            distance: 1,
            alignments: vec![("-les", "ples")],
        },
        Workload {
            seq1: "WRITERS",
            seq2: "VITNERS",
            distance: 3,
            alignments: vec![("WRIT-ERS", "V-ITNERS"), ("WRIT-ERS", "-VITNERS")],
        },
        Workload {
            seq1: "AGTACGCA",
            seq2: "TATGC",
            distance: 4,
            alignments: vec![("AGTACGCA", "--TATGC-")],
        },
        Workload {
            seq1: "GATTACA",
            seq2: "GCATGCU",
            distance: 4,
            alignments: vec![
                ("G-ATTACA", "GCATG-CU"),
                ("G-ATTACA", "GCAT-GCU"),
                ("G-ATTACA", "GCA-TGCU"),
                ("GATTACA", "GCATGCU"),
            ],
        },
        Workload {
            seq1: "",
            seq2: "ACGT",
            distance: 4,
            alignments: vec![("----", "ACGT")],
        },
        Workload {
            seq1: "",
            seq2: "",
            distance: 0,
            alignments: vec![("", "")],
        },
    ];

    for w in workload {
        ensure(&engine, w)?;
    }
    Ok(())
}

#[test]
fn test_relaxed() -> Result<()> {
    let engine = EngineBuilder::new()
        .with_traceback(Traceback::Relaxed)
        .build()?;
    let workload = vec![
        Workload {
            seq1: "WRITERS",
            seq2: "VITNERS",
            distance: 3,
            alignments: vec![
                ("WRIT-ERS", "V-ITNERS"),
                ("WRIT-ERS", "-VITNERS"),
                ("WRI-TERS", "V-ITNERS"),
                ("WRI-TERS", "-VITNERS"),
                ("WRITERS", "VITNERS"),
            ],
        },
        Workload {
            seq1: "anna",
            seq2: "ann",
            distance: 1,
            alignments: vec![
                ("anna", "ann-"),
                ("anna", "an-n"),
                ("anna", "a-nn"),
                ("anna", "-ann"),
            ],
        },
        Workload {
            seq1: "doll",
            seq2: "poll",
            distance: 1,
            alignments: vec![("doll", "poll")],
        },
    ];

    for w in workload {
        ensure(&engine, w)?;
    }
    Ok(())
}

#[test]
fn test_relaxed_is_a_superset() -> Result<()> {
    let exact = Engine::new();
    let relaxed = EngineBuilder::new()
        .with_traceback(Traceback::Relaxed)
        .build()?;

    for (seq1, seq2) in [
        ("WRITERS", "VITNERS"),
        ("kitten", "sitting"),
        ("AGTACGCA", "TATGC"),
    ] {
        let superset = relaxed.alignments(seq1, seq2)?;
        for alignment in exact.alignments(seq1, seq2)? {
            assert!(superset.contains(&alignment));
        }
        // Extra members may be suboptimal, but never cheaper than the distance
        let distance = exact.edit_distance(seq1, seq2)?;
        assert!(superset.iter().all(|x| *x.score() >= distance));
    }

    // WRITERS/VITNERS: three of the five alignments cost 4
    let scores: Vec<_> = relaxed
        .alignments("WRITERS", "VITNERS")?
        .iter()
        .map(|x| *x.score())
        .collect();
    assert_eq!(scores, [3, 3, 4, 4, 4]);
    Ok(())
}

#[test]
fn test_alignment_rendering() -> Result<()> {
    let engine = Engine::new();
    let alignments = engine.alignments("WRITERS", "VITNERS")?;
    assert_eq!(alignments[0], Alignment::from_rows("WRIT-ERS", "V-ITNERS")?);
    assert_eq!(alignments[0].rle(), "1X1^2=1v3=");
    assert_eq!(alignments[1].rle(), "1^1X2=1v3=");
    assert_eq!(alignments[0].to_string(), "WRIT-ERS\n* || |||\nV-ITNERS");
    Ok(())
}

#[test]
fn test_shared_engine() -> Result<()> {
    let engine = EngineBuilder::new().with_threads(2).build()?;
    let pairs = [("WRITERS", "VITNERS"), ("doll", "poll"), ("anna", "ann")];

    let results: Vec<Vec<Alignment<u8>>> = std::thread::scope(|s| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|(a, b)| {
                let engine = &engine;
                s.spawn(move || engine.alignments(*a, *b))
            })
            .collect();
        handles
            .into_iter()
            .map(|x| x.join().expect("worker panicked"))
            .collect::<Result<_>>()
    })?;

    for ((seq1, seq2), alignments) in pairs.iter().zip(results) {
        assert_eq!(alignments, Engine::new().alignments(*seq1, *seq2)?);
    }
    Ok(())
}
