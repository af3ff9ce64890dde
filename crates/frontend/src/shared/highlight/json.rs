use super::{escape_into, push_token, quoted_len, Grammar};

/// JSON, в том числе некорректный: ошибки разбора не прерывают подсветку
pub struct JsonGrammar;

impl Grammar for JsonGrammar {
    fn highlight(&self, code: &str) -> String {
        let mut out = String::with_capacity(code.len() * 2);
        let mut rest = code;

        while let Some(ch) = rest.chars().next() {
            let len = match ch {
                '"' => {
                    let len = quoted_len(rest, true);
                    let class = if rest[len..].trim_start().starts_with(':') {
                        "property"
                    } else {
                        "string"
                    };
                    push_token(&mut out, class, &rest[..len]);
                    len
                }
                '{' | '}' | '[' | ']' | ',' | ':' => {
                    push_token(&mut out, "punctuation", &rest[..1]);
                    1
                }
                '-' | '0'..='9' => {
                    let len = rest
                        .find(|c: char| {
                            !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
                        })
                        .unwrap_or(rest.len());
                    push_token(&mut out, "number", &rest[..len]);
                    len
                }
                c if c.is_ascii_alphabetic() => {
                    let len = rest
                        .find(|c: char| !c.is_ascii_alphanumeric())
                        .unwrap_or(rest.len());
                    match &rest[..len] {
                        "true" | "false" => push_token(&mut out, "boolean", &rest[..len]),
                        "null" => push_token(&mut out, "null", &rest[..len]),
                        word => escape_into(&mut out, word),
                    }
                    len
                }
                c => {
                    escape_into(&mut out, &rest[..c.len_utf8()]);
                    c.len_utf8()
                }
            };
            rest = &rest[len..];
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_and_values() {
        let html = JsonGrammar.highlight(r#"{"name": "Card", "max": 3, "on": true, "x": null}"#);
        assert!(html.contains(r#"<span class="token property">&quot;name&quot;</span>"#));
        assert!(html.contains(r#"<span class="token string">&quot;Card&quot;</span>"#));
        assert!(html.contains(r#"<span class="token number">3</span>"#));
        assert!(html.contains(r#"<span class="token boolean">true</span>"#));
        assert!(html.contains(r#"<span class="token null">null</span>"#));
    }

    #[test]
    fn test_malformed_input_is_still_rendered() {
        let html = JsonGrammar.highlight("{ \"label\": \"<b>unterminated");
        assert!(html.contains("&lt;b&gt;unterminated"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_non_ascii_text() {
        let html = JsonGrammar.highlight("{\"заголовок\": \"Привет\"} ✓");
        assert!(html.contains("Привет"));
        assert!(html.ends_with(" ✓"));
    }
}
