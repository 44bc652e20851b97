use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use cailnorm::pipelines::cail::types::NormalizedCase;
use cailnorm::pipelines::{CailNormalizer, Pipeline};

fn write_lines(path: &Path, lines: &[&str]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
}

/// Dataset root with 2 of the 7 candidate files present,
/// one of them containing a malformed line.
fn partial_dataset(root: &Path) {
    write_lines(
        &root.join("first_stage/train.json"),
        &[
            r#"{"id": "1", "case_id": "c1", "fact": "甲盗窃。\r\n证据确凿。", "meta": {"criminals": ["甲"], "accusation": ["盗窃"], "relevant_articles": ["264"], "term_of_imprisonment": {"imprisonment": 14}, "punish_of_money": 3000}}"#,
            "{this line is not json",
            r#"{"id": "2", "case_id": "c2", "fact": "乙诈骗。", "meta": {"criminals": ["乙"], "accusation": ["诈骗"], "relevant_articles": ["266"], "term_of_imprisonment": {"imprisonment": 0}, "punish_of_money": 0}}"#,
        ],
    );
    write_lines(
        &root.join("final_test.json"),
        &[r#"{"id": "3", "case_id": "c3", "fact": "丙抢劫。", "meta": {"criminals": ["丙"], "accusation": ["抢劫"], "relevant_articles": ["263"], "term_of_imprisonment": {"imprisonment": 6}, "punish_of_money": 500}}"#],
    );
}

fn run(root: &Path, dst: &Path) -> Vec<NormalizedCase> {
    let p = CailNormalizer::new(root.to_path_buf(), dst.to_path_buf());
    p.run().unwrap();
    serde_json::from_reader(File::open(dst).unwrap()).unwrap()
}

#[test_log::test]
fn partial_dataset_counts_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dataset");
    let dst = dir.path().join("knowledge_base/processed_cases.json");
    partial_dataset(&root);

    let cases = run(&root, &dst);

    // 2 valid from train.json (one malformed line dropped), 1 from final_test.json
    assert_eq!(cases.len(), 3);
    let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn normalized_fields_and_full_text() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dataset");
    let dst = dir.path().join("out.json");
    partial_dataset(&root);

    let cases = run(&root, &dst);

    let first = &cases[0];
    assert_eq!(first.fact, "甲盗窃。 证据确凿。");
    assert_eq!(first.imprisonment, 14);
    assert!(first.full_text.contains("Sentence: 1 years 2 months"));

    // imprisonment == 0 means no sentence segment at all
    let second = &cases[1];
    assert!(!second.full_text.contains("Sentence:"));

    let third = &cases[2];
    assert!(third.full_text.contains("Sentence: 6 months"));
    assert!(!third.full_text.contains("0 years"));
}

#[test]
fn output_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dataset");
    let dst = dir.path().join("out.json");
    partial_dataset(&root);

    let p = CailNormalizer::new(root.clone(), dst.clone());
    let in_memory = p.process_dataset();
    p.run().unwrap();

    let reread: Vec<NormalizedCase> =
        serde_json::from_reader(File::open(&dst).unwrap()).unwrap();
    assert_eq!(reread, in_memory);
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dataset");
    let dst = dir.path().join("out.json");
    partial_dataset(&root);

    let p = CailNormalizer::new(root.clone(), dst.clone());
    p.run().unwrap();
    let first = fs::read(&dst).unwrap();

    p.run().unwrap();
    let second = fs::read(&dst).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_preserves_non_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dataset");
    let dst = dir.path().join("out.json");
    partial_dataset(&root);

    run(&root, &dst);

    let written = fs::read_to_string(&dst).unwrap();
    assert!(written.contains("甲盗窃。 证据确凿。"));
    assert!(!written.contains("\\u"));
}

#[test_log::test]
fn missing_dataset_root_still_writes_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let root: PathBuf = dir.path().join("nowhere");
    let dst = dir.path().join("out.json");

    let cases = run(&root, &dst);
    assert!(cases.is_empty());
}
