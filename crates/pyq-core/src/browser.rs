//! Resolves interactions into views.
//!
//! The [`Browser`] is the seam the chat transport talks to: it takes the
//! payload of an activated control (or a free-text message) and returns what
//! should be shown next. It reads a [`Catalog`] snapshot and nothing else.

use pyq_model::ItemId;

use crate::card::QuestionCard;
use crate::catalog::Catalog;
use crate::error::{BrowseError, Result, TokenError};
use crate::filter::{Criteria, Dimension, distinct_years, filter, list_distinct};
use crate::paginate::{DEFAULT_PAGE_SIZE, paginate};
use crate::reveal::RevealedAnswer;
use crate::search::{SearchOptions, search};
use crate::token::{NavState, PrimaryFilter, ResultPage, fits_payload_limit};

/// Presentation knobs that do not change navigation semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    pub page_size: usize,
    pub search: SearchOptions,
    /// Topic buttons are cut to this many characters.
    pub topic_label_chars: usize,
    /// Prefix of every card header, e.g. `UPSC 2020 | Polity`.
    pub exam_label: String,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search: SearchOptions::default(),
            topic_label_chars: 30,
            exam_label: "UPSC".to_string(),
        }
    }
}

/// A selectable control: visible label plus the token it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: String,
    pub options: Vec<MenuOption>,
    /// Suggested buttons per row.
    pub columns: usize,
    pub back: Option<MenuOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub heading: String,
    /// One-based.
    pub page_label: usize,
    pub cards: Vec<QuestionCard>,
    pub prev: Option<MenuOption>,
    pub next: Option<MenuOption>,
}

impl ResultView {
    /// Whether a navigation row should be shown at all.
    pub fn has_navigation(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    /// Empty means "no matches", which is not an error.
    pub cards: Vec<QuestionCard>,
}

/// Rendering intent for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Menu(Menu),
    Results(ResultView),
    Answer(RevealedAnswer),
}

pub struct Browser<'a> {
    catalog: &'a Catalog,
    options: &'a BrowseOptions,
}

impl<'a> Browser<'a> {
    pub fn new(catalog: &'a Catalog, options: &'a BrowseOptions) -> Self {
        Self { catalog, options }
    }

    /// Decodes `token` and resolves it.
    pub fn open(&self, token: &str) -> Result<View> {
        let state = NavState::decode(token, self.catalog.registry()).inspect_err(|err| {
            tracing::debug!(token, error = %err, "Rejected navigation token");
        })?;
        self.resolve(&state)
    }

    pub fn resolve(&self, state: &NavState) -> Result<View> {
        tracing::debug!(state = %state, "Resolving navigation state");
        let corpus = self.catalog.corpus();
        let view = match state {
            NavState::Home => View::Menu(Menu {
                title: "Choose a mode or type a keyword to search:".to_string(),
                options: vec![
                    option("Year-wise", &NavState::YearList),
                    option("Subject-wise", &NavState::SubjectList),
                ],
                columns: 1,
                back: None,
            }),
            NavState::YearList => View::Menu(Menu {
                title: "Select Year:".to_string(),
                options: distinct_years(corpus, &Criteria::any())
                    .into_iter()
                    .map(|year| {
                        option(&year.to_string(), &NavState::SubjectListForYear { year })
                    })
                    .collect(),
                columns: 3,
                back: Some(back(&NavState::Home)),
            }),
            NavState::SubjectListForYear { year } => View::Menu(Menu {
                title: format!("Subject for {year}:"),
                options: list_distinct(corpus, Dimension::Subject, &Criteria::by_year(*year))
                    .into_iter()
                    .map(|subject| {
                        let next = NavState::TopicListForYear {
                            year: *year,
                            subject: subject.clone(),
                        };
                        option(&subject, &next)
                    })
                    .collect(),
                columns: 2,
                back: Some(back(&NavState::YearList)),
            }),
            NavState::TopicListForYear { year, subject } => View::Menu(Menu {
                title: format!("Topic ({subject} {year}):"),
                options: self.topic_options(
                    &Criteria::by_year(*year).with_subject(subject.as_str()),
                    &PrimaryFilter::Year(*year),
                ),
                columns: 1,
                back: Some(back(&NavState::SubjectListForYear { year: *year })),
            }),
            NavState::SubjectList => View::Menu(Menu {
                title: "Select Subject:".to_string(),
                options: list_distinct(corpus, Dimension::Subject, &Criteria::any())
                    .into_iter()
                    .map(|subject| {
                        let next = NavState::TopicListForSubject {
                            subject: subject.clone(),
                        };
                        option(&subject, &next)
                    })
                    .collect(),
                columns: 2,
                back: Some(back(&NavState::Home)),
            }),
            NavState::TopicListForSubject { subject } => View::Menu(Menu {
                title: format!("Topic in {subject}:"),
                options: self.topic_options(
                    &Criteria::by_subject(subject.as_str()),
                    &PrimaryFilter::Subject(subject.clone()),
                ),
                columns: 1,
                back: Some(back(&NavState::SubjectList)),
            }),
            NavState::ResultPage(page) => View::Results(self.result_page(page)?),
            NavState::Reveal { item, revision } => View::Answer(self.reveal(*item, revision)?),
        };
        Ok(view)
    }

    /// Runs a free-text search.
    ///
    /// Returns `None` for queries below the minimum length; the caller should
    /// stay silent rather than report an empty result.
    pub fn search(&self, text: &str) -> Option<SearchView> {
        if !self.options.search.accepts(text) {
            return None;
        }
        let cards: Vec<QuestionCard> = search(self.catalog.corpus(), text, &self.options.search)
            .into_iter()
            .map(|item| QuestionCard::from_item(item, self.catalog.revision()))
            .collect();
        tracing::debug!(matches = cards.len(), "Search completed");
        Some(SearchView {
            query: text.to_string(),
            cards,
        })
    }

    fn topic_options(&self, parent: &Criteria, filter: &PrimaryFilter) -> Vec<MenuOption> {
        let registry = self.catalog.registry();
        list_distinct(self.catalog.corpus(), Dimension::Topic, parent)
            .into_iter()
            .filter_map(|topic| {
                let code = registry.code_of(&topic)?;
                let label: String = topic.chars().take(self.options.topic_label_chars).collect();
                let next = NavState::ResultPage(ResultPage::first(filter.clone(), Some(code)));
                Some(option(&label, &next))
            })
            .collect()
    }

    fn result_page(&self, page: &ResultPage) -> Result<ResultView> {
        let topic = match page.topic {
            Some(code) => Some(
                self.catalog
                    .registry()
                    .topic_of(code)
                    .ok_or(TokenError::UnknownTopic { code })?,
            ),
            None => None,
        };

        let mut criteria = match &page.filter {
            PrimaryFilter::Year(year) => Criteria::by_year(*year),
            PrimaryFilter::Subject(subject) => Criteria::by_subject(subject.as_str()),
        };
        if let Some(topic) = topic {
            criteria = criteria.with_topic(topic);
        }

        let results = filter(self.catalog.corpus(), &criteria);
        let index = usize::try_from(page.page).unwrap_or(usize::MAX);
        let slice = paginate(&results, self.options.page_size, index);

        let prev = if slice.has_prev {
            page.page
                .checked_sub(1)
                .map(|p| option("Prev", &NavState::ResultPage(page.with_page(p))))
        } else {
            None
        };
        let next = if slice.has_next {
            page.page
                .checked_add(1)
                .map(|p| option("Next", &NavState::ResultPage(page.with_page(p))))
        } else {
            None
        };

        let year_label;
        let heading_subject = match (topic, &page.filter) {
            (Some(topic), _) => topic,
            (None, PrimaryFilter::Subject(subject)) => subject.as_str(),
            (None, PrimaryFilter::Year(year)) => {
                year_label = year.to_string();
                year_label.as_str()
            }
        };

        Ok(ResultView {
            heading: format!("{heading_subject} (Page {})", slice.label()),
            page_label: slice.label(),
            cards: slice
                .batch
                .iter()
                .map(|item| QuestionCard::from_item(item, self.catalog.revision()))
                .collect(),
            prev,
            next,
        })
    }

    fn reveal(&self, id: ItemId, revision: &str) -> Result<RevealedAnswer> {
        if revision != self.catalog.revision() {
            tracing::debug!(
                item = %id,
                token_revision = revision,
                current_revision = self.catalog.revision(),
                "Rejected reveal from replaced catalog"
            );
            return Err(BrowseError::StaleReveal {
                id,
                revision: revision.to_string(),
            });
        }
        self.catalog
            .corpus()
            .get(id)
            .map(RevealedAnswer::for_item)
            .ok_or(BrowseError::UnknownItem { id })
    }
}

fn option(label: &str, state: &NavState) -> MenuOption {
    let token = state.encode();
    if !fits_payload_limit(&token) {
        tracing::warn!(
            token = %token,
            bytes = token.len(),
            "Navigation token exceeds transport payload limit"
        );
    }
    MenuOption {
        label: label.to_string(),
        token,
    }
}

fn back(state: &NavState) -> MenuOption {
    option("Back", state)
}
