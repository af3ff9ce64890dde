//! Живой предпросмотр в изолированном iframe и экспорт в новую вкладку.

use contracts::usecases::u601_convert_to_liquid::SourceDocument;
use leptos::prelude::*;
use thaw::*;

use crate::shared::export::open_html_in_new_tab;
use crate::shared::icons::icon;

/// Разрешено только выполнение скриптов: без same-origin, форм,
/// навигации родителя и всплывающих окон
pub const SANDBOX_POLICY: &str = "allow-scripts";

/// Один документ из трех исходников. Текст вставляется как есть.
pub fn compose_document(source: &SourceDocument) -> String {
    format!(
        "<html><head><style>{}</style></head><body>{}<script>{}</script></body></html>",
        source.css, source.html, source.js
    )
}

#[component]
pub fn Preview(#[prop(into)] source: Signal<SourceDocument>) -> impl IntoView {
    let document = Memo::new(move |_| source.with(compose_document));

    let open_in_new_tab = move |_| {
        if let Err(e) = open_html_in_new_tab(&document.get_untracked()) {
            log::warn!("preview export failed: {}", e);
        }
    };

    view! {
        <div class="preview">
            <div class="preview__header">
                <h3 class="preview__title">"Live Preview"</h3>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=open_in_new_tab
                >
                    {icon("external_link")}
                    "Open in New Tab"
                </Button>
            </div>
            <iframe
                class="preview__frame"
                title="Live Preview"
                sandbox=SANDBOX_POLICY
                srcdoc=move || document.get()
            ></iframe>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_document_layout() {
        let source = SourceDocument::new("<p>Hi</p>", "p { color: red; }", "console.log(1);");
        assert_eq!(
            compose_document(&source),
            "<html><head><style>p { color: red; }</style></head>\
             <body><p>Hi</p><script>console.log(1);</script></body></html>"
        );
    }

    #[test]
    fn test_compose_document_is_verbatim() {
        // Liquid и закрывающие теги внутри JS не экранируются
        let source = SourceDocument::new("{{ product.title }}", "", "let s = '</div>';");
        let doc = compose_document(&source);
        assert!(doc.contains("<body>{{ product.title }}<script>let s = '</div>';</script>"));
        assert!(doc.contains("<style></style>"));
    }

    #[test]
    fn test_sandbox_allows_only_scripts() {
        assert_eq!(SANDBOX_POLICY, "allow-scripts");
        assert!(!SANDBOX_POLICY.contains("allow-same-origin"));
    }
}
