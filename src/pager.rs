//! Five-rows-at-a-time display of the filtered trips.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::model::{Trip, TripTable};
use crate::prompt::{PromptError, Prompter};
use crate::report::Renderer;

pub const PAGE_SIZE: usize = 5;

const CONSENT_QUESTION: &str =
    "Would you like to see the raw data for the city and filter selected? Enter yes or no.";
const MORE_QUESTION: &str = "Would you like to view 5 more rows of raw data?";

/// Cursor over a table in fixed-size pages. Pages past the end are empty.
#[derive(Debug)]
pub struct RawPager<'a> {
    table: &'a TripTable,
    offset: usize,
}

impl<'a> RawPager<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self { table, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_page(&mut self) -> &'a [Trip] {
        let page = self.table.rows(self.offset, PAGE_SIZE);
        self.offset = self.offset.saturating_add(PAGE_SIZE);
        page
    }
}

/// Ask for consent, then print pages until the user answers anything but yes.
///
/// Returns the number of pages shown, empty ones included.
pub fn page_raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    renderer: &Renderer,
    table: &TripTable,
) -> Result<usize, PromptError> {
    let mut pager = RawPager::new(table);
    let mut pages = 0usize;
    let mut wants_more = prompter.confirm(CONSENT_QUESTION)?;
    while wants_more {
        let rows = pager.next_page();
        renderer.trip_rows(prompter.output(), table.city, rows)?;
        pages += 1;
        wants_more = prompter.confirm(MORE_QUESTION)?;
    }
    debug!(pages, offset = pager.offset(), "Raw data paging finished");
    Ok(pages)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
