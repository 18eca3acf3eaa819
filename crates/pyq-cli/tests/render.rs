//! Console rendering of browser views.

mod common;

use insta::assert_snapshot;
use pyq_cli::render::{
    NO_MATCHES, info_table, render_menu, render_results, render_search, render_view, topics_table,
};
use pyq_core::{BrowseOptions, Browser, View};

fn one_per_page() -> BrowseOptions {
    BrowseOptions {
        page_size: 1,
        ..BrowseOptions::default()
    }
}

#[test]
fn result_page_renders_cards_and_navigation() {
    let catalog = common::catalog();
    let options = one_per_page();
    let browser = Browser::new(&catalog, &options);
    let View::Results(view) = browser.open("f_yr_2020_0_0").unwrap() else {
        panic!("expected results");
    };

    let text = render_results(&view, "UPSC").replace(catalog.revision(), "REV");
    assert_snapshot!(text, @r"
    Parliament (Page 1)

    UPSC 2020 | Polity
    Parliament
    ━━━━━━━━━━━━━━━

    Who presides over a joint sitting?

    A) President

    B) Speaker
    [Reveal Answer] !ans_0_REV

    Navigation: [Next] !f_yr_2020_0_1
    ");
}

#[test]
fn last_page_offers_only_prev() {
    let catalog = common::catalog();
    let options = one_per_page();
    let browser = Browser::new(&catalog, &options);
    let View::Results(view) = browser.open("f_yr_2020_0_1").unwrap() else {
        panic!("expected results");
    };

    let text = render_results(&view, "UPSC");
    assert!(text.starts_with("Parliament (Page 2)"));
    assert!(text.ends_with("Navigation: [Prev] !f_yr_2020_0_0"));
    assert!(!text.contains("[Next]"));
}

#[test]
fn single_page_has_no_navigation_line() {
    let catalog = common::catalog();
    let options = BrowseOptions::default();
    let browser = Browser::new(&catalog, &options);
    let View::Results(view) = browser.open("f_sub_Economy_1_0").unwrap() else {
        panic!("expected results");
    };

    let text = render_results(&view, "UPSC");
    assert!(text.contains("C) NITI Aayog"));
    assert!(!text.contains("Navigation:"));
}

#[test]
fn answer_view() {
    let catalog = common::catalog();
    let options = BrowseOptions::default();
    let browser = Browser::new(&catalog, &options);
    let view = browser
        .open(&format!("ans_0_{}", catalog.revision()))
        .unwrap();

    assert_snapshot!(render_view(&view, "UPSC"), @"Correct Answer: B");
}

#[test]
fn menu_lists_controls_and_back() {
    let catalog = common::catalog();
    let options = BrowseOptions::default();
    let browser = Browser::new(&catalog, &options);
    let View::Menu(menu) = browser.open("start_year").unwrap() else {
        panic!("expected menu");
    };

    let text = render_menu(&menu);
    assert!(text.starts_with("Select Year:\n"));
    assert!(text.contains("[2020] !y_2020"));
    assert!(text.contains("[2019] !y_2019"));
    assert!(text.ends_with("[Back] !home"));
}

#[test]
fn home_menu_has_no_back_control() {
    let catalog = common::catalog();
    let options = BrowseOptions::default();
    let browser = Browser::new(&catalog, &options);
    let View::Menu(menu) = browser.open("home").unwrap() else {
        panic!("expected menu");
    };

    let text = render_menu(&menu);
    assert!(text.contains("[Year-wise] !start_year"));
    assert!(text.contains("[Subject-wise] !start_sub"));
    assert!(!text.contains("[Back]"));
}

#[test]
fn search_with_no_hits_says_so() {
    let catalog = common::catalog();
    let options = BrowseOptions::default();
    let browser = Browser::new(&catalog, &options);

    let view = browser.search("volcano").unwrap();
    assert_eq!(render_search(&view, "UPSC"), NO_MATCHES);

    let view = browser.search("REPO").unwrap();
    let text = render_search(&view, "UPSC").replace(catalog.revision(), "REV");
    assert_snapshot!(text, @r"
    UPSC 2019 | Economy
    Banking
    ━━━━━━━━━━━━━━━

    Who sets the repo rate?

    A) RBI

    B) SEBI

    C) NITI Aayog
    [Reveal Answer] !ans_2_REV
    ");
}

#[test]
fn topic_and_info_tables() {
    let catalog = common::catalog();

    let topics = topics_table(&catalog).to_string();
    assert!(topics.contains("Parliament"));
    assert!(topics.contains("Banking"));

    let info = info_table(&catalog, "data").to_string();
    assert!(info.contains("2019-2020"));
    assert!(info.contains("Fingerprint"));
}
