//! Панель результата: пустое состояние, ошибка или три вкладки.

use leptos::prelude::*;
use thaw::*;

use super::orchestrator::PlaygroundState;
use crate::shared::components::code_display::CodeDisplay;

pub const LIQUID_PLACEHOLDER: &str = "// Your complete Liquid file will appear here...";
pub const SCHEMA_PLACEHOLDER: &str = "// A Shopify schema will be generated here...";
pub const EXPLANATION_PLACEHOLDER: &str = "No explanation generated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTab {
    Liquid,
    Explanation,
    Schema,
}

impl OutputTab {
    pub const ALL: [OutputTab; 3] = [OutputTab::Liquid, OutputTab::Explanation, OutputTab::Schema];

    pub fn label(&self) -> &'static str {
        match self {
            OutputTab::Liquid => "Liquid File",
            OutputTab::Explanation => "Explanation",
            OutputTab::Schema => "Schema",
        }
    }
}

/// Что показывает панель при данном состоянии
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPanel {
    Empty,
    /// Ошибка без Liquid-кода: панель целиком занята сообщением
    Error(String),
    /// Вкладки; ошибка (если есть) показывается над ними
    Tabs { notice: Option<String> },
}

impl OutputPanel {
    pub fn for_state(state: &PlaygroundState) -> Self {
        let request = &state.request;
        match &request.error {
            None if !state.result.has_content() && !request.is_converting => OutputPanel::Empty,
            Some(message) if state.result.templated_code.is_empty() => {
                OutputPanel::Error(message.clone())
            }
            error => OutputPanel::Tabs {
                notice: error.clone(),
            },
        }
    }
}

fn explanation_text(explanation: &str) -> String {
    if explanation.is_empty() {
        EXPLANATION_PLACEHOLDER.to_string()
    } else {
        explanation.to_string()
    }
}

#[component]
pub fn GeneratedInfo(#[prop(into)] state: Signal<PlaygroundState>) -> impl IntoView {
    let active_tab = RwSignal::new(OutputTab::Liquid);
    let panel = Memo::new(move |_| state.with(OutputPanel::for_state));

    move || match panel.get() {
        OutputPanel::Empty => view! {
            <div class="output-empty">
                <h3>"Your generated code will appear here"</h3>
                <p>"Click the \"Generate\" button above to get started."</p>
            </div>
        }
        .into_any(),
        OutputPanel::Error(message) => view! {
            <div class="output-error">
                <div class="output-error__message">{message}</div>
            </div>
        }
        .into_any(),
        OutputPanel::Tabs { notice } => view! {
            <div class="output">
                {notice.map(|message| view! { <div class="output-notice">{message}</div> })}
                <TabBar active_tab=active_tab />
                <div class="output__content">
                    <TabContent state=state active_tab=active_tab />
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TabBar(active_tab: RwSignal<OutputTab>) -> impl IntoView {
    view! {
        <div class="output__tabs">
            <Space>
                {OutputTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Button
                                appearance=move || {
                                    if active_tab.get() == tab {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Space>
        </div>
    }
}

#[component]
fn TabContent(state: Signal<PlaygroundState>, active_tab: RwSignal<OutputTab>) -> impl IntoView {
    let templated_code = Signal::derive(move || state.with(|s| s.result.templated_code.clone()));
    let schema = Signal::derive(move || state.with(|s| s.result.schema.clone()));
    let explanation = Signal::derive(move || state.with(|s| s.result.explanation.clone()));
    let is_converting = Signal::derive(move || state.with(|s| s.request.is_converting));
    let is_explaining = Signal::derive(move || state.with(|s| s.request.is_explaining));
    let is_generating_schema = Signal::derive(move || state.with(|s| s.request.is_generating_schema));

    move || match active_tab.get() {
        OutputTab::Liquid => view! {
            <CodeDisplay
                code=templated_code
                is_loading=is_converting
                language="liquid"
                placeholder=LIQUID_PLACEHOLDER
            />
        }
        .into_any(),
        OutputTab::Explanation => view! {
            <div class="explanation">
                <Show when=move || is_explaining.get()>
                    <div class="loading-overlay">
                        <Spinner />
                    </div>
                </Show>
                <p class="explanation__text">{move || explanation.with(|e| explanation_text(e))}</p>
            </div>
        }
        .into_any(),
        OutputTab::Schema => view! {
            <CodeDisplay
                code=schema
                is_loading=is_generating_schema
                language="json"
                placeholder=SCHEMA_PLACEHOLDER
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_empty() {
        assert_eq!(
            OutputPanel::for_state(&PlaygroundState::default()),
            OutputPanel::Empty
        );
    }

    #[test]
    fn test_converting_shows_tabs() {
        let mut state = PlaygroundState::default();
        state.request.is_converting = true;
        assert_eq!(
            OutputPanel::for_state(&state),
            OutputPanel::Tabs { notice: None }
        );
    }

    #[test]
    fn test_error_without_code_takes_whole_panel() {
        let mut state = PlaygroundState::default();
        state.request.error = Some("Please provide some code to convert.".to_string());
        assert_eq!(
            OutputPanel::for_state(&state),
            OutputPanel::Error("Please provide some code to convert.".to_string())
        );
    }

    #[test]
    fn test_detail_error_is_shown_with_code() {
        let mut state = PlaygroundState::default();
        state.result.templated_code = "<p>Hi</p>".to_string();
        state.request.error = Some("Failed to get additional details.".to_string());
        assert_eq!(
            OutputPanel::for_state(&state),
            OutputPanel::Tabs {
                notice: Some("Failed to get additional details.".to_string())
            }
        );
    }

    #[test]
    fn test_explanation_placeholder() {
        assert_eq!(explanation_text(""), "No explanation generated.");
        assert_eq!(explanation_text("A card."), "A card.");
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = OutputTab::ALL.iter().map(OutputTab::label).collect();
        assert_eq!(labels, ["Liquid File", "Explanation", "Schema"]);
    }
}
