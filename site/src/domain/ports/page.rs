//! Page port trait
//!
//! The DOM contract: widgets only look up elements by id, set their text or
//! append markup to them.

/// Element ids the widgets activate on
pub mod element_ids {
    pub const YEAR: &str = "year";
    pub const LAST_UPDATED: &str = "maj-date";
    pub const INSTAGRAM_GRID: &str = "insta-grid";
    pub const MAP: &str = "map";
}

/// Port trait for the host page
pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the element's content with `text`. Returns false if the element is absent.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Append trusted markup as the element's last child. Returns false if the element is absent.
    fn append_html(&mut self, id: &str, html: &str) -> bool;
}
