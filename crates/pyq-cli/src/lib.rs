//! Console front end for the PYQ question browser.

pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
