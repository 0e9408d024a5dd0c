//! Footer dates: current year and last-updated date

use chrono::{Datelike, NaiveDate};

use crate::domain::ports::{element_ids, Document};

/// `DD MMM YYYY`, e.g. `07 Mar 2025`
pub const LAST_UPDATED_FORMAT: &str = "%d %b %Y";

/// Fill `year` and `maj-date` from `today`. Missing elements are skipped.
pub fn init_page_dates<D: Document + ?Sized>(document: &mut D, today: NaiveDate) {
    document.set_text(element_ids::YEAR, &today.year().to_string());
    document.set_text(
        element_ids::LAST_UPDATED,
        &today.format(LAST_UPDATED_FORMAT).to_string(),
    );
}
