use leptos::prelude::*;

pub fn editor_placeholder(label: &str) -> String {
    format!("Enter your {} code here...", label)
}

/// Поле ввода исходного кода: заголовок и textarea без проверки орфографии
#[component]
pub fn CodeEditor(
    /// Подпись языка, например "CSS"
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("code-editor {}", additional_class())>
            <div class="code-editor__header">
                <h3 class="code-editor__label">{label}</h3>
            </div>
            <textarea
                class="code-editor__textarea"
                spellcheck="false"
                placeholder=editor_placeholder(label)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_mentions_language() {
        assert_eq!(
            editor_placeholder("HTML / Liquid"),
            "Enter your HTML / Liquid code here..."
        );
    }
}
