//! Interactive session behaviour.

mod common;

use std::io::Cursor;

use anyhow::anyhow;
use pyq_cli::render::NO_MATCHES;
use pyq_cli::shell::{Flow, Shell};
use pyq_core::{BrowseOptions, Catalog, SharedCatalog};
use pyq_model::{Corpus, OptionLabel};

fn run(shared: &SharedCatalog, input: &str, reload: impl FnMut() -> anyhow::Result<Catalog>) -> String {
    let options = BrowseOptions::default();
    let mut shell = Shell::new(shared, &options, reload);
    let mut out = Vec::new();
    shell.run(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_opens_tokens_and_searches() {
    let shared = SharedCatalog::new(common::catalog());
    let rev = shared.snapshot().revision().to_string();
    let input = format!("!start_year\n!ans_1_{rev}\nta\nvolcano\n!ans_9_{rev}\n!f_yr_2020\n");
    let output = run(&shared, &input, || Err(anyhow!("unused")));

    assert!(output.starts_with("Choose a mode or type a keyword to search:"));
    assert!(output.contains("[2019] !y_2019"));
    assert!(output.contains("Correct Answer: A"));
    assert_eq!(output.matches(NO_MATCHES).count(), 1);
    assert!(output.contains("error: question 9 is not in the current corpus"));
    assert!(output.contains("error: malformed navigation token 'f_yr_2020'"));
}

#[test]
fn quit_stops_processing() {
    let shared = SharedCatalog::new(common::catalog());
    let rev = shared.snapshot().revision().to_string();
    let output = run(&shared, &format!(":quit\n!ans_0_{rev}\n"), || {
        Err(anyhow!("unused"))
    });
    assert!(!output.contains("Correct Answer"));
}

#[test]
fn reload_swaps_the_snapshot() {
    let shared = SharedCatalog::new(common::catalog());
    let before = shared.snapshot();

    let stale = format!("!ans_0_{}", before.revision());
    let output = run(&shared, &format!(":reload\n!start_sub\n{stale}\n"), || {
        let corpus = Corpus::from_items([common::item(
            2024,
            "Ecology",
            "Wetlands",
            "Ramsar sites protect?",
            &[(OptionLabel::A, "Wetlands")],
            "A",
        )])?;
        Ok(Catalog::new(corpus))
    });

    assert!(output.contains("Reloaded 1 questions across 1 topics."));
    assert!(output.contains("[Ecology] !s_Ecology"));
    assert!(output.contains("is from an older corpus"));
    assert!(!output.contains("Correct Answer"));
    assert_eq!(before.corpus().len(), 3);
    assert_eq!(shared.snapshot().corpus().len(), 1);
}

#[test]
fn failed_reload_keeps_current_corpus() {
    let shared = SharedCatalog::new(common::catalog());
    let output = run(&shared, ":reload\n", || Err(anyhow!("corpus path not found: gone")));

    assert!(output.contains("error: reload failed: corpus path not found: gone"));
    assert_eq!(shared.snapshot().corpus().len(), 3);
}

#[test]
fn handle_line_reports_flow() {
    let shared = SharedCatalog::new(common::catalog());
    let options = BrowseOptions::default();
    let mut shell = Shell::new(&shared, &options, || Err(anyhow!("unused")));
    let mut out = Vec::new();

    assert_eq!(shell.handle_line("   ", &mut out).unwrap(), Flow::Continue);
    assert_eq!(shell.handle_line(":help", &mut out).unwrap(), Flow::Continue);
    assert_eq!(shell.handle_line(" :q ", &mut out).unwrap(), Flow::Quit);
    assert!(String::from_utf8(out).unwrap().contains(":reload"));
}
