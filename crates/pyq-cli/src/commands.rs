use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info_span;

use pyq_cli::config::Config;
use pyq_cli::logging::redact_answer;
use pyq_cli::render::{info_table, render_search, render_view, topics_table};
use pyq_cli::shell::Shell;
use pyq_core::{BrowseOptions, Browser, Catalog, SharedCatalog, View};
use pyq_ingest::{LoadOptions, load_corpus};

/// Settings shared by every subcommand.
pub struct Session {
    pub corpus_path: PathBuf,
    pub load: LoadOptions,
    pub browse: BrowseOptions,
}

impl Session {
    pub fn new(config_path: Option<&Path>, corpus_override: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).context("load configuration")?;
        let corpus_path = corpus_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.corpus.path.clone());
        Ok(Self {
            corpus_path,
            load: config.load_options(),
            browse: config.browse_options(),
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let span = info_span!("load", path = %self.corpus_path.display());
        let _guard = span.enter();
        let corpus = load_corpus(&self.corpus_path, &self.load)
            .with_context(|| format!("load corpus from {}", self.corpus_path.display()))?;
        Ok(Catalog::new(corpus))
    }
}

pub fn run_open(session: &Session, token: &str) -> Result<()> {
    let catalog = session.load_catalog()?;
    let browser = Browser::new(&catalog, &session.browse);
    let view = browser
        .open(token)
        .with_context(|| format!("open '{token}'"))?;
    if let View::Answer(answer) = &view {
        tracing::debug!(
            item = %answer.item,
            answer = redact_answer(answer.answer.as_str()),
            "Revealed answer"
        );
    }
    println!("{}", render_view(&view, &session.browse.exam_label));
    Ok(())
}

pub fn run_search(session: &Session, query: &str) -> Result<()> {
    let catalog = session.load_catalog()?;
    let browser = Browser::new(&catalog, &session.browse);
    match browser.search(query) {
        Some(view) => println!("{}", render_search(&view, &session.browse.exam_label)),
        None => tracing::info!(
            chars = query.chars().count(),
            min_chars = session.browse.search.min_chars,
            "Query too short; nothing searched"
        ),
    }
    Ok(())
}

pub fn run_topics(session: &Session) -> Result<()> {
    let catalog = session.load_catalog()?;
    if catalog.registry().is_empty() {
        println!("No topics in corpus.");
    } else {
        println!("{}", topics_table(&catalog));
    }
    Ok(())
}

pub fn run_info(session: &Session) -> Result<()> {
    let catalog = session.load_catalog()?;
    let source = session.corpus_path.display().to_string();
    println!("{}", info_table(&catalog, &source));
    Ok(())
}

pub fn run_shell(session: &Session) -> Result<()> {
    let shared = SharedCatalog::new(session.load_catalog()?);
    let mut shell = Shell::new(&shared, &session.browse, || session.load_catalog());
    if io::stdin().is_terminal() {
        println!("Type :help for commands.");
    }
    shell.run(io::stdin().lock(), io::stdout().lock())
}
