use time::{format_description::FormatItem, macros::format_description, Date};

use crate::error::AppError;

/// Format users type dates in, e.g. `20/04/2025`.
const INPUT_FORMAT: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");
/// Format dates are returned in, also accepted on input.
const ISO_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

// serde adapter for `Date` fields on the wire.
time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parses `DD/MM/YYYY` (or an already normalized `YYYY-MM-DD`) into a calendar date.
pub fn normalize_date(input: &str) -> Result<Date, AppError> {
    let input = input.trim();
    Date::parse(input, INPUT_FORMAT)
        .or_else(|_| Date::parse(input, ISO_FORMAT))
        .map_err(|_| {
            AppError::Validation(format!(
                "invalid date format: {input:?}, expected DD/MM/YYYY"
            ))
        })
}
