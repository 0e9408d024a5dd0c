//! Page handlers

use axum::response::Html;
use chrono::Local;

use crate::adapters::HtmlDocument;
use crate::app::init_page_dates;
use crate::domain::ports::element_ids;

/// GET /widgets/dates
///
/// Footer fragment with the current year and today's date.
pub async fn get_page_dates() -> Html<String> {
    let mut document = HtmlDocument::new()
        .with_element("span", element_ids::YEAR)
        .with_element("span", element_ids::LAST_UPDATED);

    init_page_dates(&mut document, Local::now().date_naive());

    Html(document.render())
}
