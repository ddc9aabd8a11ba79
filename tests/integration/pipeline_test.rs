//! Integration tests for the library pipeline against fixture documents

use std::fs;

use bible_summary::loader::{load_detailed, parse_detailed};
use bible_summary::writer::render_summary;
use bible_summary::{run, summarize, Config, Outcome, Summary, SummaryError};

use crate::helpers::{empty_workspace, fixtures_dir, load_fixture, workspace_with_input};

#[test]
fn fixture_summary_matches_expected_text() {
    let detailed = load_detailed(fixtures_dir().join("web_sample.json")).unwrap();
    let summary = summarize(&detailed).unwrap();

    insta::assert_snapshot!(render_summary(&summary).unwrap(), @r###"
    [
      {
        "book": "Genesis",
        "chapters": [
          {
            "chapter": 1,
            "verses": 3
          },
          {
            "chapter": 2,
            "verses": 1
          }
        ]
      },
      {
        "book": "Ésaïe",
        "chapters": [
          {
            "chapter": 53,
            "verses": 0
          },
          {
            "chapter": 40,
            "verses": 0
          }
        ]
      },
      {
        "book": null,
        "chapters": [
          {
            "chapter": null,
            "verses": 2
          }
        ]
      }
    ]
    "###);
}

#[test]
fn run_writes_summary_next_to_input() {
    let dir = workspace_with_input(&load_fixture("web_sample.json"));
    let config = Config::new(
        dir.path().join("data/web.json"),
        dir.path().join("bible_summary.json"),
    );
    let mut console = Vec::new();

    let outcome = run(&config, &mut console).unwrap();

    assert_eq!(
        outcome,
        Outcome::Saved {
            path: config.output_path.clone(),
            books: 3,
            chapters: 5,
            verses: 6,
        }
    );
    let written = fs::read_to_string(&config.output_path).unwrap();
    let parsed: Summary = serde_json::from_str(&written).unwrap();
    let expected = summarize(&parse_detailed(&load_fixture("web_sample.json")).unwrap()).unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn run_twice_produces_identical_bytes() {
    let dir = workspace_with_input(&load_fixture("web_sample.json"));
    let config = Config::new(
        dir.path().join("data/web.json"),
        dir.path().join("bible_summary.json"),
    );

    run(&config, &mut Vec::new()).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    run(&config, &mut Vec::new()).unwrap();
    let second = fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn run_with_empty_books_writes_empty_array() {
    let dir = workspace_with_input(r#"{"books": []}"#);
    let config = Config::new(dir.path().join("data/web.json"), dir.path().join("out.json"));

    run(&config, &mut Vec::new()).unwrap();

    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "[]");
}

#[test]
fn run_without_books_key_writes_empty_array() {
    let dir = workspace_with_input("{}");
    let config = Config::new(dir.path().join("data/web.json"), dir.path().join("out.json"));

    run(&config, &mut Vec::new()).unwrap();

    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "[]");
}

#[test]
fn run_with_missing_input_leaves_existing_output_alone() {
    let dir = empty_workspace();
    let output = dir.path().join("bible_summary.json");
    fs::write(&output, "previous run").unwrap();
    let config = Config::new(dir.path().join("data/web.json"), &output);
    let mut console = Vec::new();

    let outcome = run(&config, &mut console).unwrap();

    assert!(matches!(outcome, Outcome::InputMissing { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("does not exist"));
    assert_eq!(console.lines().count(), 1);
}

#[test]
fn run_into_unwritable_location_fails_with_write_error() {
    let dir = workspace_with_input(r#"{"books": []}"#);
    let config = Config::new(
        dir.path().join("data/web.json"),
        dir.path().join("missing-dir/out.json"),
    );

    let err = run(&config, &mut Vec::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SummaryError>(),
        Some(SummaryError::Write { .. })
    ));
}
