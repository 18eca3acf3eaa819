//! Line-oriented console session.
//!
//! The shell plays the part of the chat transport: `!<token>` activates a
//! control, any other text is a search, and `:reload` swaps in a freshly
//! loaded corpus while the session keeps running.

use std::io::{BufRead, Write};

use anyhow::Result;
use pyq_core::{BrowseOptions, Browser, Catalog, NavState, SharedCatalog, View};

use crate::logging::redact_answer;
use crate::render::{render_search, render_view};

const PROMPT: &str = "pyq> ";
const HELP: &str = "\
!<token>   activate a control, e.g. !home
:reload    reload the corpus from disk
:help      show this help
:quit      leave the shell
Anything else is searched for in questions and topics.";

/// What the session should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, F> {
    catalog: &'a SharedCatalog,
    options: &'a BrowseOptions,
    reload: F,
}

impl<'a, F> Shell<'a, F>
where
    F: FnMut() -> Result<Catalog>,
{
    pub fn new(catalog: &'a SharedCatalog, options: &'a BrowseOptions, reload: F) -> Self {
        Self {
            catalog,
            options,
            reload,
        }
    }

    /// Shows the home menu, then handles lines until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        self.open(&NavState::Home.encode(), &mut out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, &mut out)? == Flow::Quit {
                break;
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = line.trim();
        match command {
            "" => {}
            ":quit" | ":q" | ":exit" => return Ok(Flow::Quit),
            ":help" => writeln!(out, "{HELP}")?,
            ":reload" => self.reload(out)?,
            _ => {
                if let Some(token) = command.strip_prefix('!') {
                    self.open(token, out)?;
                } else {
                    self.search(line, out)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn open<W: Write>(&self, token: &str, out: &mut W) -> Result<()> {
        let snapshot = self.catalog.snapshot();
        let browser = Browser::new(&snapshot, self.options);
        match browser.open(token) {
            Ok(view) => {
                if let View::Answer(answer) = &view {
                    tracing::debug!(
                        item = %answer.item,
                        answer = redact_answer(answer.answer.as_str()),
                        "Revealed answer"
                    );
                }
                writeln!(out, "{}", render_view(&view, &self.options.exam_label))?;
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
        Ok(())
    }

    fn search<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let snapshot = self.catalog.snapshot();
        let browser = Browser::new(&snapshot, self.options);
        if let Some(view) = browser.search(text) {
            writeln!(out, "{}", render_search(&view, &self.options.exam_label))?;
        }
        Ok(())
    }

    fn reload<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match (self.reload)() {
            Ok(catalog) => {
                let items = catalog.corpus().len();
                let topics = catalog.registry().len();
                self.catalog.replace(catalog);
                writeln!(out, "Reloaded {items} questions across {topics} topics.")?;
            }
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "Reload failed; keeping current corpus");
                writeln!(out, "error: reload failed: {err:#}")?;
            }
        }
        Ok(())
    }
}
