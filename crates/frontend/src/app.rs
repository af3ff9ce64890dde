use crate::shared::theme::ThemeProvider;
use crate::usecases::u601_convert_to_liquid::ConvertToLiquidPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <ConvertToLiquidPage />
        </ThemeProvider>
    }
}
