//! Подсветка синтаксиса для отображения сгенерированного кода.
//!
//! Встроенные грамматики: `liquid` и `json`. Для неизвестного языка
//! текст только экранируется (`<` и `>`), без разметки подсветки.

mod json;
mod liquid;

pub use json::JsonGrammar;
pub use liquid::LiquidGrammar;

/// Грамматика одного языка: код -> HTML разметка с `<span class="token ...">`
pub trait Grammar: Send + Sync {
    fn highlight(&self, code: &str) -> String;
}

pub struct GrammarRegistry {
    grammars: Vec<(&'static str, Box<dyn Grammar>)>,
}

impl GrammarRegistry {
    pub fn empty() -> Self {
        Self {
            grammars: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("liquid", Box::new(LiquidGrammar));
        registry.register("json", Box::new(JsonGrammar));
        registry
    }

    pub fn register(&mut self, language: &'static str, grammar: Box<dyn Grammar>) {
        self.grammars.retain(|(lang, _)| *lang != language);
        self.grammars.push((language, grammar));
    }

    pub fn get(&self, language: &str) -> Option<&dyn Grammar> {
        self.grammars
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, grammar)| grammar.as_ref())
    }

    pub fn highlight(&self, code: &str, language: &str) -> String {
        match self.get(language) {
            Some(grammar) => grammar.highlight(code),
            None => escape_angle_brackets(code),
        }
    }
}

/// Подсветка встроенными грамматиками
pub fn highlight(code: &str, language: &str) -> String {
    thread_local! {
        static REGISTRY: GrammarRegistry = GrammarRegistry::builtin();
    }
    if code.is_empty() {
        return String::new();
    }
    REGISTRY.with(|registry| registry.highlight(code, language))
}

/// Запасной путь без грамматики
pub fn escape_angle_brackets(code: &str) -> String {
    code.replace('<', "&lt;").replace('>', "&gt;")
}

pub(crate) fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

pub(crate) fn push_token(out: &mut String, class: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str("<span class=\"token ");
    out.push_str(class);
    out.push_str("\">");
    escape_into(out, text);
    out.push_str("</span>");
}

/// Длина строкового литерала с открывающей кавычкой в начале `rest`.
/// Незакрытая строка занимает весь остаток.
pub(crate) fn quoted_len(rest: &str, allow_escapes: bool) -> usize {
    let mut chars = rest.char_indices();
    let Some((_, quote)) = chars.next() else {
        return 0;
    };
    let mut escaped = false;
    for (i, ch) in chars {
        if escaped {
            escaped = false;
        } else if allow_escapes && ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return i + ch.len_utf8();
        }
    }
    rest.len()
}
