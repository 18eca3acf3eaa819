//! Navigation tokens.
//!
//! A token is the complete browsing position, carried as the payload of an
//! interactive control. Nothing is kept server-side: the next view is rebuilt
//! from the token alone.
//!
//! Wire format is underscore-delimited with a prefix tag:
//!
//! | State                        | Token               |
//! |------------------------------|---------------------|
//! | `Home`                       | `home`              |
//! | `YearList`                   | `start_year`        |
//! | `SubjectList`                | `start_sub`         |
//! | `SubjectListForYear`         | `y_<year>`          |
//! | `TopicListForYear`           | `ys_<year>_<subj>`  |
//! | `TopicListForSubject`        | `s_<subj>`          |
//! | `ResultPage` by year         | `f_yr_<year>_<topic>_<page>`  |
//! | `ResultPage` by subject      | `f_sub_<subj>_<topic>_<page>` |
//! | `Reveal`                     | `ans_<item>_<rev>`  |
//!
//! `<topic>` is a registry code, or `*` when no topic narrows the page.
//! `<rev>` is the revision of the catalog the reveal control was built from;
//! item ids are positions, so they only mean something within one revision.
//! Subjects escape `%` as `%25` and `_` as `%5F`.

use std::fmt;

use pyq_model::ItemId;

use crate::error::TokenError;
use crate::registry::{TopicCode, TopicRegistry};

/// Largest payload most chat transports accept for a control.
pub const MAX_PAYLOAD_BYTES: usize = 64;

/// Length of a catalog revision tag, in lowercase hex digits.
pub const REVISION_CHARS: usize = 8;

const DELIMITER: char = '_';
const ANY_TOPIC: &str = "*";

/// Dimension a result page is anchored on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimaryFilter {
    Year(i32),
    Subject(String),
}

/// A page of filtered questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultPage {
    pub filter: PrimaryFilter,
    pub topic: Option<TopicCode>,
    /// Zero-based.
    pub page: u32,
}

impl ResultPage {
    pub fn first(filter: PrimaryFilter, topic: Option<TopicCode>) -> Self {
        Self {
            filter,
            topic,
            page: 0,
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// Every position a user can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavState {
    Home,
    YearList,
    SubjectListForYear { year: i32 },
    TopicListForYear { year: i32, subject: String },
    SubjectList,
    TopicListForSubject { subject: String },
    ResultPage(ResultPage),
    Reveal { item: ItemId, revision: String },
}

impl NavState {
    /// Serializes the state. Equal states always yield identical tokens.
    pub fn encode(&self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::YearList => "start_year".to_string(),
            Self::SubjectList => "start_sub".to_string(),
            Self::SubjectListForYear { year } => format!("y_{year}"),
            Self::TopicListForYear { year, subject } => {
                format!("ys_{year}_{}", escape(subject))
            }
            Self::TopicListForSubject { subject } => format!("s_{}", escape(subject)),
            Self::ResultPage(page) => {
                let topic = page
                    .topic
                    .map_or_else(|| ANY_TOPIC.to_string(), |code| code.to_string());
                match &page.filter {
                    PrimaryFilter::Year(year) => {
                        format!("f_yr_{year}_{topic}_{}", page.page)
                    }
                    PrimaryFilter::Subject(subject) => {
                        format!("f_sub_{}_{topic}_{}", escape(subject), page.page)
                    }
                }
            }
            Self::Reveal { item, revision } => format!("ans_{item}_{revision}"),
        }
    }

    /// Parses a token and checks any topic code against `registry`.
    pub fn decode(token: &str, registry: &TopicRegistry) -> Result<Self, TokenError> {
        let state = Self::parse(token)?;
        if let Self::ResultPage(ResultPage {
            topic: Some(code), ..
        }) = &state
            && !registry.contains(*code)
        {
            return Err(TokenError::UnknownTopic { code: *code });
        }
        Ok(state)
    }

    /// Syntax-only decoding; topic codes are not checked.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let fields: Vec<&str> = token.split(DELIMITER).collect();
        let state = match fields.as_slice() {
            ["home"] => Self::Home,
            ["start", "year"] => Self::YearList,
            ["start", "sub"] => Self::SubjectList,
            ["y", year] => Self::SubjectListForYear {
                year: parse_year(token, year)?,
            },
            ["ys", year, subject] => Self::TopicListForYear {
                year: parse_year(token, year)?,
                subject: parse_subject(token, subject)?,
            },
            ["s", subject] => Self::TopicListForSubject {
                subject: parse_subject(token, subject)?,
            },
            ["f", "yr", year, topic, page] => Self::ResultPage(ResultPage {
                filter: PrimaryFilter::Year(parse_year(token, year)?),
                topic: parse_topic(token, topic)?,
                page: parse_page(token, page)?,
            }),
            ["f", "sub", subject, topic, page] => Self::ResultPage(ResultPage {
                filter: PrimaryFilter::Subject(parse_subject(token, subject)?),
                topic: parse_topic(token, topic)?,
                page: parse_page(token, page)?,
            }),
            ["ans", item, revision] => Self::Reveal {
                item: parse_item(token, item)?,
                revision: parse_revision(token, revision)?,
            },
            _ => return Err(TokenError::malformed(token, "unrecognized shape")),
        };
        Ok(state)
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// True when `token` fits in a single control payload.
pub fn fits_payload_limit(token: &str) -> bool {
    token.len() <= MAX_PAYLOAD_BYTES
}

fn parse_year(token: &str, raw: &str) -> Result<i32, TokenError> {
    if !is_plain_integer(raw, true) {
        return Err(TokenError::malformed(token, format!("bad year '{raw}'")));
    }
    raw.parse()
        .map_err(|_| TokenError::malformed(token, format!("bad year '{raw}'")))
}

fn parse_page(token: &str, raw: &str) -> Result<u32, TokenError> {
    if !is_plain_integer(raw, false) {
        return Err(TokenError::malformed(token, format!("bad page '{raw}'")));
    }
    raw.parse()
        .map_err(|_| TokenError::malformed(token, format!("bad page '{raw}'")))
}

fn parse_item(token: &str, raw: &str) -> Result<ItemId, TokenError> {
    if !is_plain_integer(raw, false) {
        return Err(TokenError::malformed(token, format!("bad item id '{raw}'")));
    }
    raw.parse()
        .map(ItemId::new)
        .map_err(|_| TokenError::malformed(token, format!("bad item id '{raw}'")))
}

fn parse_revision(token: &str, raw: &str) -> Result<String, TokenError> {
    let valid = raw.len() == REVISION_CHARS
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !valid {
        return Err(TokenError::malformed(token, format!("bad revision '{raw}'")));
    }
    Ok(raw.to_string())
}

fn parse_topic(token: &str, raw: &str) -> Result<Option<TopicCode>, TokenError> {
    if raw == ANY_TOPIC {
        return Ok(None);
    }
    if !is_plain_integer(raw, false) {
        return Err(TokenError::malformed(token, format!("bad topic code '{raw}'")));
    }
    raw.parse::<u32>()
        .map(|code| Some(TopicCode::new(code)))
        .map_err(|_| TokenError::malformed(token, format!("bad topic code '{raw}'")))
}

fn parse_subject(token: &str, raw: &str) -> Result<String, TokenError> {
    let subject = unescape(raw)
        .ok_or_else(|| TokenError::malformed(token, format!("bad escape in '{raw}'")))?;
    if subject.is_empty() {
        return Err(TokenError::malformed(token, "empty subject"));
    }
    Ok(subject)
}

/// Digits only, with an optional leading minus when `signed`. Rejects forms
/// like `+7` or `007` that would not re-encode to the same token.
fn is_plain_integer(raw: &str, signed: bool) -> bool {
    let digits = match raw.strip_prefix('-') {
        Some(rest) if signed => rest,
        Some(_) => return false,
        None => raw,
    };
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && !(raw.starts_with('-') && digits == "0")
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            DELIMITER => out.push_str("%5F"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escaped = rest.get(pos..pos + 3)?;
        match escaped {
            "%25" => out.push('%'),
            "%5F" => out.push(DELIMITER),
            _ => return None,
        }
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TopicRegistry {
        TopicRegistry::from_topics([
            "Polity",
            "Economy",
            "Ecology",
            "History",
            "Geography",
            "Science",
            "Culture",
            "Current Affairs",
        ])
    }

    #[test]
    fn encodes_reference_shapes() {
        assert_eq!(NavState::Home.encode(), "home");
        assert_eq!(NavState::YearList.encode(), "start_year");
        assert_eq!(NavState::SubjectList.encode(), "start_sub");
        assert_eq!(NavState::SubjectListForYear { year: 2020 }.encode(), "y_2020");
        let page = NavState::ResultPage(ResultPage {
            filter: PrimaryFilter::Year(2020),
            topic: Some(TopicCode::new(3)),
            page: 1,
        });
        assert_eq!(page.encode(), "f_yr_2020_3_1");
        let any = NavState::ResultPage(ResultPage::first(
            PrimaryFilter::Subject("Economy".to_string()),
            None,
        ));
        assert_eq!(any.encode(), "f_sub_Economy_*_0");
        let reveal = NavState::Reveal {
            item: ItemId::new(42),
            revision: "0badf00d".to_string(),
        };
        assert_eq!(reveal.encode(), "ans_42_0badf00d");
        assert_eq!(NavState::parse("ans_42_0badf00d").unwrap(), reveal);
    }

    #[test]
    fn subjects_with_delimiters_round_trip() {
        let state = NavState::TopicListForYear {
            year: 2015,
            subject: "Art_Culture 100%".to_string(),
        };
        let token = state.encode();
        assert_eq!(token, "ys_2015_Art%5FCulture 100%25");
        assert_eq!(NavState::decode(&token, &registry()).unwrap(), state);
    }

    #[test]
    fn decodes_result_page() {
        let state = NavState::decode("f_sub_Polity_0_2", &registry()).unwrap();
        assert_eq!(
            state,
            NavState::ResultPage(ResultPage {
                filter: PrimaryFilter::Subject("Polity".to_string()),
                topic: Some(TopicCode::new(0)),
                page: 2,
            })
        );
    }

    #[test]
    fn unknown_topic_code_is_rejected() {
        let err = NavState::decode("f_yr_2020_99_0", &registry()).unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownTopic {
                code: TopicCode::new(99)
            }
        );
        // Syntax alone is fine.
        assert!(NavState::parse("f_yr_2020_99_0").is_ok());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let registry = registry();
        for token in [
            "",
            "homepage",
            "y_twenty",
            "y_2020_extra",
            "f_yr_2020_1",
            "f_yr_2020_1_-1",
            "f_yr_2020_x_0",
            "f_yr_2020_1_01",
            "f_zz_2020_1_0",
            "s_",
            "s_bad%2escape",
            "s_trailing%5",
            "ans_-3_0badf00d",
            "ans_+5_0badf00d",
            "ans_007_0badf00d",
            "ans_5",
            "ans_5_0BADF00D",
            "ans_5_0badf0",
            "y_+2020",
        ] {
            let err = NavState::decode(token, &registry).unwrap_err();
            assert!(
                matches!(err, TokenError::Malformed { .. }),
                "expected malformed for {token:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn negative_year_round_trips() {
        let state = NavState::SubjectListForYear { year: -5 };
        assert_eq!(NavState::parse(&state.encode()).unwrap(), state);
        assert!(NavState::parse("y_-0").is_err());
    }

    #[test]
    fn payload_limit() {
        assert!(fits_payload_limit("f_yr_2020_3_1"));
        assert!(!fits_payload_limit(&"x".repeat(MAX_PAYLOAD_BYTES + 1)));
    }
}
