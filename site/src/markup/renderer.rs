//! Markup renderer
//!
//! Renders widget content to HTML. Every interpolated value is escaped.

use super::Escaped;

use crate::domain::entities::{Installation, PostRef};

/// Instagram's embed library, loaded once the placeholders are on the page
pub const EMBED_SCRIPT_TAG: &str =
    r#"<script async src="https://www.instagram.com/embed.js"></script>"#;

/// Placeholder picked up by the embed library
pub fn render_embed_placeholder(post: &PostRef) -> String {
    format!(
        concat!(
            "<div>\n",
            "  <blockquote class=\"instagram-media\" data-instgrm-permalink=\"{}\" data-instgrm-version=\"14\" ",
            "style=\"background:#fff; border:0; margin:0; padding:0; width:100%;\">\n",
            "  </blockquote>\n",
            "</div>"
        ),
        Escaped(post.as_str())
    )
}

/// Popup shown when an installation marker is clicked
pub fn render_installation_popup(installation: &Installation) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<strong>{}</strong><br>\n", Escaped(installation.name)));
    buf.push_str(&format!("{}<br>\n", installation.courts_label()));
    buf.push_str(&format!(
        "Revêtement : {}<br>\n",
        Escaped(installation.surface)
    ));
    buf.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Plus d'infos →</a>",
        Escaped(installation.info_url)
    ));

    buf
}
