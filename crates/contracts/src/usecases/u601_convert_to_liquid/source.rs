use serde::{Deserialize, Serialize};

/// Исходный код, который пользователь редактирует в трёх редакторах
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SourceDocument {
    pub fn new(html: impl Into<String>, css: impl Into<String>, js: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
        }
    }

    /// Все три поля пустые. Пробелы считаются содержимым.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(SourceDocument::default().is_empty());
        assert!(!SourceDocument::new("<p>Hi</p>", "", "").is_empty());
        assert!(!SourceDocument::new("", "body {}", "").is_empty());
        assert!(!SourceDocument::new("", "", "console.log(1)").is_empty());
        assert!(!SourceDocument::new(" ", "", "").is_empty());
    }
}
