//! The outer prompt → load → report → page → restart loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::loader::load_data;
use crate::pager::page_raw_data;
use crate::prompt::{PromptError, Prompter, RetryPolicy};
use crate::report::Renderer;

const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding `chicago.csv`, `new_york_city.csv`, `washington.csv`.
    pub data_dir: PathBuf,
    pub retry: RetryPolicy,
    pub renderer: Renderer,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            retry: RetryPolicy::Unlimited,
            renderer: Renderer::for_terminal(),
        }
    }
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output, config.retry),
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run rounds until the user declines to restart or input closes.
    ///
    /// Returns the number of completed rounds. Load failures and an exhausted
    /// retry bound are returned as errors.
    pub fn run(&mut self) -> Result<usize> {
        let mut rounds = 0usize;
        loop {
            match self.round() {
                Ok(restart) => {
                    rounds += 1;
                    if !restart {
                        break;
                    }
                }
                Err(err) if is_input_closed(&err) => {
                    info!(rounds, "Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        info!(rounds, "Session finished");
        Ok(rounds)
    }

    /// One full pass. Returns whether the user asked to restart.
    fn round(&mut self) -> Result<bool> {
        let selection = self.prompter.get_filters()?;
        let data_dir = &self.config.data_dir;
        let table = load_data(data_dir, selection.city, selection.filter).with_context(|| {
            format!(
                "loading {} trip data from {}",
                selection.city,
                data_dir.display()
            )
        })?;
        if table.is_empty() {
            warn!(city = %selection.city, filter = %selection.filter, "No trips match the filter");
        }

        let renderer = self.config.renderer;
        renderer.full_report(self.prompter.output(), &table, &selection.filter)?;
        page_raw_data(&mut self.prompter, &renderer, &table)?;

        Ok(self.prompter.confirm(RESTART_QUESTION)?)
    }
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::InputClosed)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
