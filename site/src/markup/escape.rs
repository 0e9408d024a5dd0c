//! HTML escaping for interpolated values

use std::fmt::{self, Display, Formatter, Write};

use html_escaper::HtmlEscaper;

/// Formats the wrapped value with `"`, `&`, `<`, `>` and `'` escaped
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        HtmlEscaper(f).write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(
            Escaped("https://www.instagram.com/p/ABC/").to_string(),
            "https://www.instagram.com/p/ABC/"
        );
    }

    #[test]
    fn markup_characters_are_replaced() {
        assert_eq!(
            Escaped(r#"<a href="x">Tom & Jerry's</a>"#).to_string(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }
}
