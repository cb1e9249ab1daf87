//! Line-oriented prompts for the filter selection and yes/no questions.
//!
//! Generic over the input and output streams so a whole session can be
//! driven from a scripted input.

use std::io::{BufRead, Write};

use console::style;
use thiserror::Error;
use tracing::debug;

use crate::model::types::parse_weekday;
use crate::model::{City, Filter, Month, Selection};

pub const SEPARATOR_WIDTH: usize = 40;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input closed")]
    InputClosed,

    #[error("no valid answer to '{question}' after {attempts} attempts")]
    AttemptsExhausted {
        question: &'static str,
        attempts: u32,
    },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// How many times a question is repeated after invalid answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    #[default]
    Unlimited,
    /// Give up after this many invalid answers to the same question.
    Bounded(u32),
}

impl RetryPolicy {
    fn allows(&self, attempts: u32) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Bounded(max) => attempts < *max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    Month,
    Day,
    All,
}

impl FilterMode {
    fn parse(answer: &str) -> Option<Self> {
        match answer {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

const CITY_QUESTION: &str = "Would you like to see data for Chicago, New York City, or Washington?";
const FILTER_QUESTION: &str =
    "Would you like to filter by month, day, or show all data? Type 'all' for no filter.";
const MONTH_QUESTION: &str =
    "Which month would you like to see data for? January, February, March, April, May, or June?";
const DAY_QUESTION: &str = "Which day would you like to see data for?";

/// Trim and lower-case an answer. Every comparison goes through this.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// True only for "yes", in any case and surrounded by any whitespace.
pub fn is_yes(answer: &str) -> bool {
    normalize(answer) == "yes"
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    retry: RetryPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, retry: RetryPolicy) -> Self {
        Self {
            input,
            output,
            retry,
        }
    }

    /// Stream that reports and pages are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the question and read one normalized answer line.
    pub fn read_answer(&mut self, question: &str) -> Result<String, PromptError> {
        writeln!(self.output, "\n{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(normalize(&line))
    }

    /// Ask until `parse` accepts the answer, printing `guidance` on each miss.
    fn ask_until<T>(
        &mut self,
        question: &'static str,
        guidance: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        let mut attempts = 0u32;
        loop {
            let answer = self.read_answer(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            attempts += 1;
            debug!(question, answer = %answer, attempts, "Rejected answer");
            writeln!(self.output, "\n{}", style(guidance).yellow())?;
            if !self.retry.allows(attempts) {
                return Err(PromptError::AttemptsExhausted { question, attempts });
            }
        }
    }

    /// Ask a yes/no question. Anything other than "yes" counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        Ok(is_yes(&self.read_answer(question)?))
    }

    /// Collect a city and at most one of month or day.
    pub fn get_filters(&mut self) -> Result<Selection, PromptError> {
        writeln!(
            self.output,
            "{}",
            style("Hello! Let's explore some US bikeshare data!").bold()
        )?;

        let city = self.ask_until(
            CITY_QUESTION,
            "Sorry! We don't have data for that city.",
            City::parse,
        )?;
        let mode = self.ask_until(
            FILTER_QUESTION,
            "Sorry, that's not a valid filter.",
            FilterMode::parse,
        )?;
        let filter = match mode {
            FilterMode::Month => Filter::ByMonth(self.ask_until(
                MONTH_QUESTION,
                "Sorry, we don't have data for that month. Please enter a valid selection.",
                Month::parse,
            )?),
            FilterMode::Day => Filter::ByDay(self.ask_until(
                DAY_QUESTION,
                "Please enter a valid day of the week!",
                parse_weekday,
            )?),
            FilterMode::All => Filter::All,
        };

        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(Selection { city, filter })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
