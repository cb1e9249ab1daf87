//! Interactive statistics over US bikeshare trip records.
//!
//! A session asks for a city and an optional month or weekday filter, loads
//! that city's CSV, prints four report sections, optionally pages through the
//! raw rows, and offers to start over.

pub mod analytics;
pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod pager;
pub mod prompt;
pub mod report;
pub mod session;

use anyhow::Result;

use crate::config::Cli;
use crate::session::Session;

/// Run an interactive session on stdin/stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), cli.session_config());
    session.run()?;
    Ok(())
}
