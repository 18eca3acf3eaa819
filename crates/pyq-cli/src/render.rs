//! Console rendering of browser views.
//!
//! A control is printed as `[Label] !token`; typing `!token` in the shell
//! activates it.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pyq_core::{Catalog, Menu, QuestionCard, ResultView, RevealedAnswer, SearchView, View};

pub const NO_MATCHES: &str = "No matches found. Try a different keyword.";
const EMPTY_MENU: &str = "(nothing to choose from)";
const REVEAL_LABEL: &str = "Reveal Answer";

pub fn control(label: &str, token: &str) -> String {
    format!("[{label}] !{token}")
}

pub fn render_view(view: &View, exam_label: &str) -> String {
    match view {
        View::Menu(menu) => render_menu(menu),
        View::Results(results) => render_results(results, exam_label),
        View::Answer(answer) => render_answer(answer),
    }
}

pub fn render_menu(menu: &Menu) -> String {
    let mut out = vec![menu.title.clone()];
    if menu.options.is_empty() {
        out.push(EMPTY_MENU.to_string());
    } else {
        let mut table = Table::new();
        apply_table_style(&mut table);
        for row in menu.options.chunks(menu.columns.max(1)) {
            table.add_row(
                row.iter()
                    .map(|option| Cell::new(control(&option.label, &option.token))),
            );
        }
        out.push(table.to_string());
    }
    if let Some(back) = &menu.back {
        out.push(control(&back.label, &back.token));
    }
    out.join("\n")
}

pub fn render_card(card: &QuestionCard, exam_label: &str) -> String {
    format!(
        "{}\n{}",
        card.render_text(exam_label),
        control(REVEAL_LABEL, &card.reveal_token)
    )
}

pub fn render_results(results: &ResultView, exam_label: &str) -> String {
    let mut out = vec![results.heading.clone()];
    out.extend(
        results
            .cards
            .iter()
            .map(|card| render_card(card, exam_label)),
    );
    if results.has_navigation() {
        let nav: Vec<String> = [&results.prev, &results.next]
            .into_iter()
            .flatten()
            .map(|option| control(&option.label, &option.token))
            .collect();
        out.push(format!("Navigation: {}", nav.join("  ")));
    }
    out.join("\n\n")
}

pub fn render_search(view: &SearchView, exam_label: &str) -> String {
    if view.cards.is_empty() {
        return NO_MATCHES.to_string();
    }
    view.cards
        .iter()
        .map(|card| render_card(card, exam_label))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_answer(answer: &RevealedAnswer) -> String {
    answer.to_string()
}

/// Registry listing: code, topic, and how many questions carry it.
pub fn topics_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Topic"), header_cell("Questions")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (code, topic) in catalog.registry().iter() {
        let count = catalog
            .corpus()
            .iter()
            .filter(|item| item.broad_topic() == Some(topic))
            .count();
        table.add_row(vec![Cell::new(code), Cell::new(topic), Cell::new(count)]);
    }
    table
}

/// Snapshot summary for `pyq info`.
pub fn info_table(catalog: &Catalog, source: &str) -> Table {
    let corpus = catalog.corpus();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);
    let years = pyq_core::distinct_years(corpus, &pyq_core::Criteria::any());
    let span = match (years.last(), years.first()) {
        (Some(oldest), Some(newest)) => format!("{oldest}-{newest}"),
        _ => "-".to_string(),
    };
    let subjects =
        pyq_core::list_distinct(corpus, pyq_core::Dimension::Subject, &pyq_core::Criteria::any());
    let rows = [
        ("Source", source.to_string()),
        ("Partitions", corpus.partitions().join(", ")),
        ("Questions", corpus.len().to_string()),
        ("Years", span),
        ("Subjects", subjects.len().to_string()),
        ("Topics", catalog.registry().len().to_string()),
        (
            "Fingerprint",
            corpus.fingerprint().unwrap_or("-").to_string(),
        ),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
