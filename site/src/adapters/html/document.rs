//! In-memory HTML page

use crate::markup::Escaped;

use crate::domain::ports::Document;

#[derive(Debug, Clone)]
struct Element {
    tag: &'static str,
    id: String,
    content: String,
}

/// A flat list of identified elements, rendered as an HTML fragment
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    elements: Vec<Element>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, tag: &'static str, id: &str) -> Self {
        self.elements.push(Element {
            tag,
            id: id.to_string(),
            content: String::new(),
        });
        self
    }

    #[cfg(test)]
    pub fn content(&self, id: &str) -> Option<&str> {
        self.find(id).map(|e| e.content.as_str())
    }

    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(|e| {
                format!(
                    "<{tag} id=\"{id}\">{content}</{tag}>",
                    tag = e.tag,
                    id = Escaped(&e.id),
                    content = e.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}

impl Document for HtmlDocument {
    fn has_element(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                element.content = Escaped(text).to_string();
                true
            }
            None => false,
        }
    }

    fn append_html(&mut self, id: &str, html: &str) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                if !element.content.is_empty() {
                    element.content.push('\n');
                }
                element.content.push_str(html);
                true
            }
            None => false,
        }
    }
}
