//! End-to-end scoring from files on disk.

use hate_scorer_application::{
    correct_labels, evaluate, evaluate_1c, evaluate_subtask, read_gold_file,
    read_prediction_file, ScorerError,
};
use hate_scorer_domain::{LabelDimension, Subtask};
use hate_scorer_testing::{
    label_set_strategy, random_labels, with_wrong_labels, LabelSetBuilder, TsvFixture,
};
use proptest::prelude::*;

#[test]
fn test_gold_copied_into_predictions_scores_perfectly() {
    let fixture = TsvFixture::new().unwrap();
    let gold = random_labels(Subtask::HateType, 40);

    let gold_path = fixture.write_gold("dev_subtask_1A.tsv", &gold).unwrap();
    let pred_path = fixture.write_predictions("run1_subtask_1A.tsv", &gold).unwrap();

    let report = evaluate(pred_path.as_path(), gold_path.as_path()).unwrap();
    assert_eq!(report.subtask, Subtask::HateType);
    assert_eq!(report.instances, 40);
    assert_eq!(report.metrics.accuracy, 1.0);
    assert_eq!(report.metrics.precision, 1.0);
    assert_eq!(report.metrics.recall, 1.0);
    assert_eq!(report.metrics.f1, 1.0);
}

#[test]
fn test_completely_wrong_binary_predictions() {
    let gold = LabelSetBuilder::new(Subtask::HateType)
        .with_single("1", "None")
        .with_single("2", "Abusive")
        .with_single("3", "None")
        .with_single("4", "Abusive")
        .build();
    let pred = LabelSetBuilder::new(Subtask::HateType)
        .with_single("1", "Abusive")
        .with_single("2", "None")
        .with_single("3", "Abusive")
        .with_single("4", "None")
        .build();

    let report = evaluate(&pred, &gold).unwrap();
    assert_eq!(report.metrics.accuracy, 0.0);
    assert_eq!(report.metrics.f1, 0.0);
}

#[test]
fn test_predictions_in_different_order() {
    let gold = LabelSetBuilder::new(Subtask::HateTarget)
        .with_single("1", "Individual")
        .with_single("2", "Society")
        .with_single("3", "None")
        .build();
    let pred = LabelSetBuilder::new(Subtask::HateTarget)
        .with_single("3", "None")
        .with_single("1", "Individual")
        .with_single("2", "Society")
        .build();

    assert_eq!(evaluate(&pred, &gold).unwrap().metrics.accuracy, 1.0);
}

#[test]
fn test_strict_subset_is_rejected() {
    let gold = random_labels(Subtask::HateType, 5);
    let mut builder = LabelSetBuilder::new(Subtask::HateType);
    for id in ["1", "2", "3"] {
        builder = builder.with_record(id, gold.get(id).unwrap().clone());
    }
    let pred = builder.build();

    assert!(!correct_labels(&pred, &gold));
    match evaluate(&pred, &gold) {
        Err(ScorerError::LabelMismatch(mismatch)) => {
            let missing: Vec<&str> = mismatch.different_ids().iter().map(String::as_str).collect();
            assert_eq!(missing, vec!["4", "5"]);
            assert!(mismatch.to_string().starts_with("Number of predictions (3)"));
        }
        other => panic!("expected a label mismatch, got {:?}", other),
    }
}

#[test]
fn test_malformed_row_fails_the_whole_file() {
    let fixture = TsvFixture::new().unwrap();
    let path = fixture
        .write_raw(
            "bad_subtask_1A.tsv",
            "id\tlabel\tmodel\n1\tNone\tBERT\n2\tAbusive\n3\tSexism\tBERT\n",
        )
        .unwrap();

    match read_prediction_file(&path) {
        Err(ScorerError::ColumnCount { line, found, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected a column count error, got {:?}", other),
    }
}

#[test]
fn test_missing_and_unnamed_files() {
    let fixture = TsvFixture::new().unwrap();

    let missing = fixture.path("absent_subtask_1B.tsv");
    assert!(matches!(
        read_prediction_file(&missing),
        Err(ScorerError::FileNotFound(_))
    ));

    let unnamed = fixture.write_raw("predictions.tsv", "id\tlabel\tmodel\n").unwrap();
    assert!(matches!(
        read_prediction_file(&unnamed),
        Err(ScorerError::UnknownSubtask(_))
    ));
}

#[test]
fn test_gold_without_marker_uses_multi_label_layout() {
    let fixture = TsvFixture::new().unwrap();
    let gold = random_labels(Subtask::MultiLabel, 6);
    let path = fixture.write_gold("gold.tsv", &gold).unwrap();

    let parsed = read_gold_file(&path).unwrap();
    assert_eq!(parsed.subtask(), Subtask::MultiLabel);
    assert_eq!(parsed, gold);
}

#[test]
fn test_multi_label_from_files() {
    let fixture = TsvFixture::new().unwrap();
    let gold = random_labels(Subtask::MultiLabel, 12);
    let pred = with_wrong_labels(&gold, 3);

    let gold_path = fixture.write_gold("gold_subtask_1C.tsv", &gold).unwrap();
    let pred_path = fixture.write_predictions("team_subtask_1C.tsv", &pred).unwrap();

    let report = evaluate_1c(pred_path.as_path(), gold_path.as_path()).unwrap();
    assert_eq!(report.dimensions.len(), 3);
    for dimension in LabelDimension::ALL {
        let metrics = report.dimension(dimension).unwrap();
        assert!((metrics.accuracy - 0.75).abs() < 1e-12);
    }
    assert!((report.metrics.accuracy - 0.75).abs() < 1e-12);
}

#[test]
fn test_subtask_dispatch_matches_direct_call() {
    let gold = random_labels(Subtask::HateTarget, 20);
    let pred = with_wrong_labels(&gold, 5);

    let direct = evaluate(&pred, &gold).unwrap();
    let dispatched = evaluate_subtask(Subtask::HateTarget, &pred, &gold).unwrap();
    assert_eq!(direct, dispatched);
}

proptest! {
    #[test]
    fn prop_self_evaluation_is_perfect(gold in label_set_strategy(Subtask::MultiLabel, 30)) {
        let report = evaluate_1c(&gold, &gold).unwrap();
        prop_assert_eq!(report.metrics.accuracy, 1.0);
        prop_assert_eq!(report.metrics.f1, 1.0);
    }

    #[test]
    fn prop_aggregate_is_mean_of_dimensions(gold in label_set_strategy(Subtask::MultiLabel, 30)) {
        let pred = with_wrong_labels(&gold, gold.len() / 2);
        let report = evaluate_1c(&pred, &gold).unwrap();

        let mean_f1 = report.dimensions.iter().map(|d| d.metrics.f1).sum::<f64>() / 3.0;
        prop_assert!((report.metrics.f1 - mean_f1).abs() < 1e-12);
    }
}
