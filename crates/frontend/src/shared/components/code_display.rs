//! Блок с подсвеченным кодом, индикатором загрузки и кнопкой копирования.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::highlight::highlight;
use crate::shared::icons::icon;

/// Сколько держится отметка "Copied!"
pub const COPIED_FEEDBACK_MS: u32 = 2000;

/// Текст заглушки: пустой, пока идет загрузка
fn placeholder_text(is_loading: bool, placeholder: &'static str) -> &'static str {
    if is_loading {
        ""
    } else {
        placeholder
    }
}

fn can_copy(code: &str, is_loading: bool) -> bool {
    !code.is_empty() && !is_loading
}

/// Отметка "Copied!". Каждое копирование начинает отсчет заново:
/// таймер от предыдущего нажатия ее не снимает.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CopyFeedback {
    shown: bool,
    generation: u64,
}

impl CopyFeedback {
    /// Показать отметку; возвращает номер для `expire`
    fn acknowledge(&mut self) -> u64 {
        self.generation += 1;
        self.shown = true;
        self.generation
    }

    fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.shown = false;
        }
    }
}

#[component]
pub fn CodeDisplay(
    /// Исходный текст (копируется без подсветки)
    #[prop(into)]
    code: Signal<String>,
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Имя грамматики: `liquid`, `json`
    language: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let highlighted = Memo::new(move |_| code.with(|c| highlight(c, language)));

    let on_copy = move |_| {
        let text = code.get_untracked();
        if text.is_empty() {
            return;
        }
        copy_to_clipboard(&text, move || {
            let Some(generation) = feedback.try_update(CopyFeedback::acknowledge) else {
                return;
            };
            Timeout::new(COPIED_FEEDBACK_MS, move || {
                let _ = feedback.try_update(|f| f.expire(generation));
            })
            .forget();
        });
    };

    view! {
        <div class=format!("code-display code-display--{}", language)>
            <Show when=move || is_loading.get()>
                <div class="loading-overlay">
                    <Spinner />
                </div>
            </Show>

            <pre class=format!("code-display__pre language-{}", language)>
                {move || {
                    if code.with(String::is_empty) {
                        view! {
                            <code class="code-display__placeholder">
                                {placeholder_text(is_loading.get(), placeholder)}
                            </code>
                        }
                            .into_any()
                    } else {
                        view! {
                            <code class="code-display__code" inner_html=move || highlighted.get()></code>
                        }
                            .into_any()
                    }
                }}
            </pre>

            <Show when=move || code.with(|c| can_copy(c, is_loading.get()))>
                <div class="code-display__copy">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_copy
                    >
                        {move || {
                            if feedback.with(|f| f.shown) {
                                view! { {icon("check")} <span>"Copied!"</span> }.into_any()
                            } else {
                                view! { {icon("copy")} <span>"Copy"</span> }.into_any()
                            }
                        }}
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_hidden_while_loading() {
        assert_eq!(placeholder_text(true, "// soon"), "");
        assert_eq!(placeholder_text(false, "// soon"), "// soon");
    }

    #[test]
    fn test_repeated_copy_restarts_feedback() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.acknowledge();
        let second = feedback.acknowledge();

        // таймер первого нажатия не гасит отметку второго
        feedback.expire(first);
        assert!(feedback.shown);

        feedback.expire(second);
        assert!(!feedback.shown);
    }

    #[test]
    fn test_copy_needs_code_and_idle() {
        assert!(can_copy("{{ x }}", false));
        assert!(!can_copy("{{ x }}", true));
        assert!(!can_copy("", false));
    }
}
