use contracts::usecases::u601_convert_to_liquid::SourceDocument;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::HttpConversionApi;
use super::editor::CodeEditor;
use super::generated_info::GeneratedInfo;
use super::orchestrator::{generate, PlaygroundState};
use super::preview::Preview;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;

const STARTER_HTML: &str = "<div class=\"card\">\n  <h1>{{ product.title }}</h1>\n  <p>Edit the code to see it live.</p>\n</div>";
const STARTER_CSS: &str = "body {\n  display: grid;\n  place-content: center;\n  min-height: 100vh;\n  font-family: sans-serif;\n  background-color: #f0f2f5;\n}\n.card {\n  padding: 2rem;\n  border-radius: 1rem;\n  background-color: white;\n  box-shadow: 0 4px 6px rgba(0,0,0,0.1);\n  text-align: center;\n}";
const STARTER_JS: &str = "console.log(\"Welcome to the Liquid Converter!\");";

pub fn generate_button_label(is_converting: bool) -> &'static str {
    if is_converting {
        "Converting to Liquid..."
    } else {
        "Generate Complete Liquid File"
    }
}

#[component]
pub fn ConvertToLiquidPage() -> impl IntoView {
    let html = RwSignal::new(STARTER_HTML.to_string());
    let css = RwSignal::new(STARTER_CSS.to_string());
    let js = RwSignal::new(STARTER_JS.to_string());
    let state = RwSignal::new(PlaygroundState::default());

    let source = Signal::derive(move || SourceDocument::new(html.get(), css.get(), js.get()));
    let is_converting = Signal::derive(move || state.with(|s| s.request.is_converting));

    let on_generate = move |_| {
        let source = source.get_untracked();
        spawn_local(async move {
            generate(&HttpConversionApi, &state, source).await;
        });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div class="page__header-left">
                    <span class="page__logo">{icon("logo")}</span>
                    <h1 class="page__title">"Code to Liquid Converter"</h1>
                </div>
                <div class="page__header-right">
                    <p class="page__powered-by">"Powered by Gemini"</p>
                    <ThemeToggle />
                </div>
            </header>

            <main class="page__content">
                <section class="page__section">
                    <div class="section-heading">
                        <h2>"Step 1: Input Your Code"</h2>
                        <p>"Provide your HTML, CSS, and JavaScript. The live preview will update as you type."</p>
                    </div>
                    <div class="editors">
                        <div class="editors__row">
                            <CodeEditor label="HTML / Liquid" value=html />
                            <CodeEditor label="CSS" value=css />
                        </div>
                        <CodeEditor label="JavaScript" value=js class="code-editor--short" />
                    </div>
                </section>

                <section class="page__section page__section--action">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Large
                        class="generate-button"
                        disabled=is_converting
                        on_click=on_generate
                    >
                        {icon("wand")}
                        {move || generate_button_label(is_converting.get())}
                    </Button>
                </section>

                <section class="page__section">
                    <div class="section-heading">
                        <h2>"Step 2: Review Your Output"</h2>
                        <p>"Your live preview and the final generated code will appear below."</p>
                    </div>
                    <div class="output-stack">
                        <Preview source=source />
                        <GeneratedInfo state=state />
                    </div>
                </section>
            </main>
        </div>
    }
}
