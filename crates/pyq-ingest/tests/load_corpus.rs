//! Integration tests for corpus loading.

use std::fs;
use std::path::Path;

use pyq_ingest::{IngestError, LoadOptions, load_corpus};
use pyq_model::OptionLabel;
use tempfile::TempDir;

const HEADER: &str =
    "Year,Subject,Broad Topic,Question Text,Option A,Option B,Option C,Option D,Answer\n";

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), format!("{HEADER}{body}")).unwrap();
}

fn study_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Economy.csv",
        "2021,Economy,Taxation Policy,GST replaced which tax?,VAT,Income tax,,,A\n\
         2020,Economy,Banking,Who regulates banks?,RBI,SEBI,IRDAI,NABARD,a\n",
    );
    write(
        dir.path(),
        "Polity.csv",
        "2020.0,Polity,Parliament,Which house is permanent?,Lok Sabha,Rajya Sabha,,,B\n",
    );
    write(
        dir.path(),
        "All PYQ.csv",
        "2021,Economy,Taxation Policy,GST replaced which tax?,VAT,Income tax,,,A\n",
    );
    dir
}

#[test]
fn loads_partitions_in_filename_order_without_rollup() {
    let dir = study_dir();
    let corpus = load_corpus(dir.path(), &LoadOptions::default()).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.partitions(), vec!["Economy", "Polity"]);
    let years: Vec<i32> = corpus.iter().map(|item| item.year()).collect();
    assert_eq!(years, vec![2021, 2020, 2020]);
    assert_eq!(corpus.items()[2].answer(), OptionLabel::B);
    assert_eq!(corpus.items()[1].answer(), OptionLabel::A);
}

#[test]
fn rollup_is_loaded_when_not_excluded() {
    let dir = study_dir();
    let options = LoadOptions {
        exclude_partitions: vec![],
    };
    let corpus = load_corpus(dir.path(), &options).unwrap();
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.partitions()[0], "All PYQ");
}

#[test]
fn fingerprint_tracks_content() {
    let dir = study_dir();
    let before = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    let again = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    assert_eq!(before.fingerprint(), again.fingerprint());
    assert_eq!(before.fingerprint().unwrap().len(), 64);

    write(
        dir.path(),
        "Polity.csv",
        "2019,Polity,Parliament,Which house is permanent?,Lok Sabha,Rajya Sabha,,,B\n",
    );
    let after = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    assert_ne!(before.fingerprint(), after.fingerprint());
}

#[test]
fn invalid_answer_reports_file_and_line() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "History.csv",
        "2018,History,Medieval,Q1,x,y,,,A\n2017,History,Medieval,Q2,x,y,,,C\n",
    );

    let err = load_corpus(dir.path(), &LoadOptions::default()).unwrap_err();
    match err {
        IngestError::InvalidRow { path, line, reason } => {
            assert!(path.ends_with("History.csv"));
            assert_eq!(line, 3);
            assert_eq!(reason, "answer C does not name a present option");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn single_file_corpus() {
    let dir = study_dir();
    let corpus = load_corpus(&dir.path().join("Polity.csv"), &LoadOptions::default()).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.items()[0].subject(), Some("Polity"));
}
