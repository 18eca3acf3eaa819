//! Navigation and query engine for the PYQ question browser.
//!
//! Everything here is a pure, synchronous computation over an immutable
//! [`Catalog`] snapshot:
//!
//! - [`TopicRegistry`] maps topic names to the small codes carried in tokens.
//! - [`NavState`] is the full browsing position; `encode`/`decode` convert it
//!   to and from the token string a control carries.
//! - [`filter`] and [`list_distinct`] back result pages and menus.
//! - [`paginate`] slices results into fixed-size pages.
//! - [`search`] finds questions by text or topic.
//! - [`reveal_answer`] is the only way an answer leaves the core.
//! - [`Browser`] ties the above together into views for a transport.

pub mod browser;
pub mod card;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod registry;
pub mod reveal;
pub mod search;
pub mod token;

pub use browser::{BrowseOptions, Browser, Menu, MenuOption, ResultView, SearchView, View};
pub use card::QuestionCard;
pub use catalog::{Catalog, SharedCatalog};
pub use error::{BrowseError, Result, TokenError};
pub use filter::{Criteria, Dimension, distinct_years, filter, list_distinct};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use registry::{TopicCode, TopicRegistry};
pub use reveal::{RevealedAnswer, reveal_answer};
pub use search::{DEFAULT_MIN_QUERY_CHARS, DEFAULT_RESULT_LIMIT, SearchOptions, search};
pub use token::{
    MAX_PAYLOAD_BYTES, NavState, PrimaryFilter, REVISION_CHARS, ResultPage, fits_payload_limit,
};
