//! Integration tests for the built-in types lesson

use tour_lessons::{Chain, RunThrough, TypesReport, learn_types};

fn run() -> (TypesReport, String) {
    let mut out = Vec::new();
    let mut checkpoint = RunThrough;
    let mut chain = Chain::new(&mut out, &mut checkpoint);
    learn_types(&mut chain).unwrap();
    let report = chain.into_outcome().types.expect("types report");
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn appended_sequence_holds_one_through_nine() {
    let (report, _) = run();
    assert_eq!(report.appended.to_vec(), (1..=9).collect::<Vec<i64>>());
}

#[test]
fn every_declared_value_reaches_output() {
    let (_, text) = run();
    for needle in [
        "Learn Rust!",
        "A \"raw\" string\nliteral can include line breaks.",
        "Σ",
        "3.14195",
        "(3+4i)",
        "[3 1 5]",
        "[4 5 9]",
        "[97 32 115 108 105 99 101]",
        "map[four:4 one:14195 three:3]",
    ] {
        assert!(text.contains(needle), "missing {needle:?} in output:\n{text}");
    }
}

#[test]
fn fixed_arrays() {
    let (report, _) = run();
    assert_eq!(report.zeros, [0; 4]);
    assert_eq!(report.fixed, [3, 1, 5]);
}

#[test]
fn growable_sequences() {
    let (report, _) = run();
    assert_eq!(report.literal.to_vec(), vec![4, 5, 9]);
    assert_eq!(report.presized.len(), 4);
    assert!(report.presized.iter().all(|&v| v == 0));
    assert!(report.nested.is_empty());
    assert_eq!(report.bytes.to_vec(), b"a slice".to_vec());
}

#[test]
fn mapping_after_insert() {
    let (report, _) = run();
    let mut entries: Vec<(String, i64)> = report
        .scores
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    entries.sort();
    assert_eq!(
        entries,
        vec![
            ("four".to_string(), 4),
            ("one".to_string(), 14195),
            ("three".to_string(), 3),
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let (first_report, first_text) = run();
    let (second_report, second_text) = run();
    assert_eq!(first_report, second_report);
    assert_eq!(first_text, second_text);
}
