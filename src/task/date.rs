//! Due date parsing and display

use chrono::NaiveDate;
use std::fmt::Write;

use super::error::{Result, TaskError};

/// Accepted input layouts, tried in order. The first one that parses wins,
/// so `01-02-2003` is read as MM-DD-YYYY only because nothing earlier matches.
pub const DUE_DATE_FORMATS: [&str; 4] = ["%d.%m.%Y", "%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Human-readable form of [`DUE_DATE_FORMATS`] for error messages.
pub const ACCEPTED_FORMATS_HINT: &str = "DD.MM.YYYY, YYYY-MM-DD, MM/DD/YYYY or MM-DD-YYYY";

/// Default layout used when printing due dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a due date typed by the user.
///
/// Day and month may be written without a leading zero (`1.6.2024`,
/// `6/1/2024`); chrono reads one or two digits for each.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    DUE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TaskError::InvalidDateFormat(input.to_string()))
}

/// Format a due date for display, e.g. `25.12.2024`. A layout chrono cannot
/// render falls back to [`DISPLAY_DATE_FORMAT`].
pub fn format_due_date(date: &NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(DISPLAY_DATE_FORMAT).to_string();
    }
    out
}
