//! Шаблоны промптов для трёх этапов генерации.

const FENCE: &str = "```";

/// Промпт конвертации HTML/CSS/JS в один .liquid файл
pub fn conversion_prompt(html: &str, css: &str, js: &str) -> String {
    format!(
        r#"
You are an expert Shopify Liquid developer. Your task is to convert the provided HTML, CSS, and JavaScript into a single, complete Shopify Liquid file.

Instructions:
1. Convert the HTML structure into valid Liquid syntax where appropriate (e.g., using Liquid objects, tags, and filters).
2. Embed the entire provided CSS code within a <style> tag.
3. Embed the entire provided JavaScript code within a <script> tag.
4. Combine everything into a single, valid .liquid file structure.
5. The final output must be ONLY the raw code for the .liquid file. Do not include any explanations, comments about the conversion, or markdown formatting like {FENCE}liquid.

Here is the code to convert:

HTML:
{FENCE}html
{html}
{FENCE}

CSS:
{FENCE}css
{css}
{FENCE}

JavaScript:
{FENCE}javascript
{js}
{FENCE}

Liquid File Code:"#
    )
}

/// Промпт текстового описания Liquid-кода
pub fn explanation_prompt(liquid_code: &str) -> String {
    format!(
        r#"
You are a Shopify Liquid expert. Explain the following Liquid code clearly and concisely.
Describe its structure, any dynamic elements (like Liquid objects or variables), and how it would function in a Shopify theme.
The explanation should be easy for another developer to understand.
Output ONLY the plain text explanation, without any markdown formatting, titles, or conversational filler.

Liquid Code:
{FENCE}liquid
{liquid_code}
{FENCE}

Explanation:"#
    )
}

/// Промпт генерации схемы настроек секции.
/// Ответ модели не валидируется как JSON.
pub fn schema_prompt(liquid_code: &str) -> String {
    format!(
        r#"
You are an expert Shopify theme developer. Based on the provided Liquid code, generate a corresponding Shopify section schema.
The schema should include appropriate settings for any customizable elements found in the code (e.g., text, images, colors).
Output ONLY the raw JSON for the schema object. Do not include the surrounding "{{% schema %}}" tags or any markdown formatting like {FENCE}json.

Liquid Code:
{FENCE}liquid
{liquid_code}
{FENCE}

JSON Schema:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_prompt_embeds_sources_in_fences() {
        let prompt = conversion_prompt("<p>Hi</p>", "p { color: red; }", "alert(1);");
        assert!(prompt.contains("```html\n<p>Hi</p>\n```"));
        assert!(prompt.contains("```css\np { color: red; }\n```"));
        assert!(prompt.contains("```javascript\nalert(1);\n```"));
        assert!(prompt.contains("within a <style> tag"));
        assert!(prompt.contains("within a <script> tag"));
        assert!(prompt.trim_end().ends_with("Liquid File Code:"));
    }

    #[test]
    fn test_conversion_prompt_keeps_liquid_braces_verbatim() {
        let prompt = conversion_prompt("<h1>{{ product.title }}</h1>", "", "");
        assert!(prompt.contains("<h1>{{ product.title }}</h1>"));
    }

    #[test]
    fn test_explanation_prompt() {
        let prompt = explanation_prompt("{{ shop.name }}");
        assert!(prompt.contains("```liquid\n{{ shop.name }}\n```"));
        assert!(prompt.contains("plain text explanation"));
        assert!(prompt.trim_end().ends_with("Explanation:"));
    }

    #[test]
    fn test_schema_prompt_mentions_schema_tags_literally() {
        let prompt = schema_prompt("<div></div>");
        assert!(prompt.contains("\"{% schema %}\""));
        assert!(prompt.contains("ONLY the raw JSON"));
        assert!(prompt.trim_end().ends_with("JSON Schema:"));
    }
}
