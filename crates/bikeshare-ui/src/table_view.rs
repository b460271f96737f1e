//! Raw trip rows as an aligned text table, and the paging loop that shows
//! them five at a time.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_data::dataset::{Dataset, Trip};
use unicode_width::UnicodeWidthStr;

use crate::console::Console;
use crate::prompts::is_yes;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

pub const VIEW_PROMPT: &str = "Would you like to view 5 rows of individual trip data? Enter yes or no: ";
pub const CONTINUE_PROMPT: &str = "Do you wish to continue? ";

/// Space between columns.
const COLUMN_GAP: &str = "  ";

/// Render `trips` under the dataset's header row.
///
/// Every column is left-aligned to its widest cell, measured in terminal
/// columns so station names with wide characters still line up. Returns no
/// lines for an empty slice.
pub fn render_rows(dataset: &Dataset, trips: &[Trip]) -> Vec<String> {
    if trips.is_empty() {
        return Vec::new();
    }

    let headers: Vec<&str> = dataset.headers().iter().collect();
    let rows: Vec<Vec<&str>> = trips.iter().map(|t| t.raw.iter().collect()).collect();

    let column_count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; column_count];
    for cells in std::iter::once(&headers).chain(rows.iter()) {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    std::iter::once(&headers)
        .chain(rows.iter())
        .map(|cells| format_line(cells, &widths))
        .collect()
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell = cells.get(i).copied().unwrap_or("");
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    line.trim_end().to_string()
}

/// Offer raw rows page by page until the answer is anything but "yes".
///
/// The opening answer must be exactly `yes`; continuation answers go
/// through [`is_yes`]. Past the last row a "yes" prints nothing and asks
/// again. Returns the number of pages that contained rows.
pub fn browse_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &Dataset,
) -> Result<usize> {
    let answer = console.ask(VIEW_PROMPT)?;
    if answer.as_deref() != Some("yes") {
        return Ok(0);
    }

    let mut start = 0usize;
    let mut shown = 0usize;
    loop {
        let page = dataset.page(start, PAGE_SIZE);
        if !page.is_empty() {
            for line in render_rows(dataset, page) {
                console.say(&line)?;
            }
            shown += 1;
        }
        start = start.saturating_add(PAGE_SIZE);

        let answer = console.ask(CONTINUE_PROMPT)?;
        if !is_yes(answer.as_deref()) {
            return Ok(shown);
        }
    }
}
