use super::{escape_into, push_token, quoted_len, Grammar};

const KEYWORDS: &[&str] = &[
    "if", "elsif", "else", "endif", "unless", "endunless", "case", "when", "endcase", "for",
    "endfor", "in", "break", "continue", "assign", "capture", "endcapture", "increment",
    "decrement", "comment", "endcomment", "raw", "endraw", "render", "include", "section",
    "schema", "endschema", "style", "endstyle", "javascript", "endjavascript", "form", "endform",
    "paginate", "endpaginate", "liquid", "echo", "and", "or", "contains", "with", "as",
];

/// Liquid поверх HTML: теги, атрибуты, комментарии и блоки `{{ }}` / `{% %}`
pub struct LiquidGrammar;

impl Grammar for LiquidGrammar {
    fn highlight(&self, code: &str) -> String {
        let mut out = String::with_capacity(code.len() * 2);
        let mut rest = code;

        while !rest.is_empty() {
            let len = if rest.starts_with("{{") {
                liquid_block(rest, "}}", &mut out)
            } else if rest.starts_with("{%") {
                liquid_block(rest, "%}", &mut out)
            } else if rest.starts_with("<!--") {
                let len = rest.find("-->").map_or(rest.len(), |i| i + 3);
                push_token(&mut out, "comment", &rest[..len]);
                len
            } else if starts_tag(rest) {
                let len = tag_len(rest);
                html_tag(&rest[..len], &mut out);
                len
            } else {
                let len = plain_len(rest);
                escape_into(&mut out, &rest[..len]);
                len
            };
            rest = &rest[len..];
        }

        out
    }
}

/// Текст до следующего `{` или `<` (хотя бы один символ)
fn plain_len(rest: &str) -> usize {
    let first = rest.chars().next().map_or(0, char::len_utf8);
    rest[first..]
        .find(|c: char| c == '{' || c == '<')
        .map_or(rest.len(), |i| i + first)
}

fn starts_tag(rest: &str) -> bool {
    let after = rest
        .strip_prefix("</")
        .or_else(|| rest.strip_prefix('<'));
    after
        .and_then(|s| s.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Длина тега до `>` вне кавычек
fn tag_len(rest: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, ch) in rest.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '>' => return i + 1,
            None => {}
        }
    }
    rest.len()
}

fn html_tag(tag: &str, out: &mut String) {
    let open = if tag.starts_with("</") { "</" } else { "<" };
    push_token(out, "punctuation", open);

    let body = &tag[open.len()..];
    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
        .unwrap_or(body.len());
    push_token(out, "tag", &body[..name_len]);

    let mut rest = &body[name_len..];
    while let Some(ch) = rest.chars().next() {
        let len = if rest.starts_with("/>") {
            push_token(out, "punctuation", "/>");
            2
        } else if rest.starts_with("{{") {
            liquid_block(rest, "}}", out)
        } else if rest.starts_with("{%") {
            liquid_block(rest, "%}", out)
        } else if ch == '>' || ch == '=' {
            push_token(out, "punctuation", &rest[..1]);
            1
        } else if ch == '"' || ch == '\'' {
            let len = quoted_len(rest, false);
            push_token(out, "attr-value", &rest[..len]);
            len
        } else if ch.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            out.push_str(&rest[..len]);
            len
        } else {
            let len = rest
                .find(|c: char| {
                    c.is_whitespace() || matches!(c, '=' | '>' | '/' | '"' | '\'' | '{')
                })
                .unwrap_or(rest.len());
            if len == 0 {
                escape_into(out, &rest[..ch.len_utf8()]);
                ch.len_utf8()
            } else {
                push_token(out, "attr-name", &rest[..len]);
                len
            }
        };
        rest = &rest[len..];
    }
}

/// Блок `{{ ... }}` или `{% ... %}`; возвращает его длину в `rest`
fn liquid_block(rest: &str, close: &str, out: &mut String) -> usize {
    let (inner_len, closed) = match rest[2..].find(close) {
        Some(i) => (i, true),
        None => (rest.len() - 2, false),
    };

    push_token(out, "delimiter", &rest[..2]);
    liquid_inner(&rest[2..2 + inner_len], out);
    if closed {
        push_token(out, "delimiter", close);
        2 + inner_len + close.len()
    } else {
        rest.len()
    }
}

fn liquid_inner(inner: &str, out: &mut String) {
    let mut rest = inner;
    let mut after_pipe = false;

    while let Some(ch) = rest.chars().next() {
        let len = if ch == '"' || ch == '\'' {
            let len = quoted_len(rest, false);
            push_token(out, "string", &rest[..len]);
            after_pipe = false;
            len
        } else if ch.is_ascii_digit() {
            let len = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            push_token(out, "number", &rest[..len]);
            len
        } else if ch.is_alphabetic() || ch == '_' {
            let len = rest
                .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '?')))
                .unwrap_or(rest.len());
            let word = &rest[..len];
            if after_pipe {
                push_token(out, "filter", word);
            } else if KEYWORDS.contains(&word) {
                push_token(out, "keyword", word);
            } else {
                push_token(out, "variable", word);
            }
            after_pipe = false;
            len
        } else if ch == '|' {
            push_token(out, "operator", "|");
            after_pipe = true;
            1
        } else {
            escape_into(out, &rest[..ch.len_utf8()]);
            ch.len_utf8()
        };
        rest = &rest[len..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_block_with_filter() {
        let html = LiquidGrammar.highlight("{{ product.title | upcase }}");
        assert_eq!(
            html,
            "<span class=\"token delimiter\">{{</span> \
             <span class=\"token variable\">product.title</span> \
             <span class=\"token operator\">|</span> \
             <span class=\"token filter\">upcase</span> \
             <span class=\"token delimiter\">}}</span>"
        );
    }

    #[test]
    fn test_tag_block_keywords_and_strings() {
        let html = LiquidGrammar.highlight("{% if title == 'Hi' %}");
        assert!(html.contains("<span class=\"token keyword\">if</span>"));
        assert!(html.contains("<span class=\"token string\">'Hi'</span>"));
        assert!(html.contains("<span class=\"token variable\">title</span>"));
    }

    #[test]
    fn test_html_tag_with_attributes() {
        let html = LiquidGrammar.highlight("<div class=\"card\">Hi</div>");
        assert!(html.starts_with("<span class=\"token punctuation\">&lt;</span><span class=\"token tag\">div</span>"));
        assert!(html.contains("<span class=\"token attr-name\">class</span>"));
        assert!(html.contains("<span class=\"token attr-value\">&quot;card&quot;</span>"));
        assert!(html.contains("&gt;</span>Hi<span class=\"token punctuation\">&lt;/</span>"));
    }

    #[test]
    fn test_liquid_inside_attribute_position() {
        let html = LiquidGrammar.highlight("<img {{ block.shopify_attributes }}>");
        assert!(html.contains("<span class=\"token variable\">block.shopify_attributes</span>"));
    }

    #[test]
    fn test_comment_and_text_are_escaped() {
        let html = LiquidGrammar.highlight("<!-- a < b --> 1 < 2 & 3");
        assert!(html.starts_with("<span class=\"token comment\">&lt;!-- a &lt; b --&gt;</span>"));
        assert!(html.ends_with(" 1 &lt; 2 &amp; 3"));
    }

    #[test]
    fn test_unterminated_block_consumes_rest() {
        let html = LiquidGrammar.highlight("{{ product");
        assert_eq!(
            html,
            "<span class=\"token delimiter\">{{</span> <span class=\"token variable\">product</span>"
        );
    }

    #[test]
    fn test_non_ascii_text() {
        let html = LiquidGrammar.highlight("<p>Привет, {{ customer.name }}!</p>");
        assert!(html.contains("Привет, "));
        assert!(html.contains("<span class=\"token variable\">customer.name</span>"));
    }
}
