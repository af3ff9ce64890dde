//! Светлая / тёмная тема.
//!
//! Выбор хранится в localStorage под ключом `theme`, по умолчанию тёмная.
//! Тема применяется классом `dark` на `<html>` и переключением одной из
//! двух таблиц стилей подсветки кода.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_STYLESHEET_ID: &str = "highlight-light-theme";
pub const DARK_STYLESHEET_ID: &str = "highlight-dark-theme";

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Неизвестное или отсутствующее значение -> тема по умолчанию
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::default(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// id активной таблицы стилей подсветки
    pub fn active_stylesheet_id(&self) -> &'static str {
        match self {
            Theme::Light => LIGHT_STYLESHEET_ID,
            Theme::Dark => DARK_STYLESHEET_ID,
        }
    }
}

/// Хранилище предпочтения темы
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// window.localStorage
#[derive(Clone, Copy, Default)]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, value) {
                log::warn!("Failed to persist theme: {:?}", e);
            }
        }
    }
}

pub fn load_theme(storage: &impl ThemeStorage) -> Theme {
    Theme::from_storage(storage.load().as_deref())
}

/// Переключает тему и сохраняет новое значение
pub fn toggle_theme(current: Theme, storage: &impl ThemeStorage) -> Theme {
    let next = current.toggled();
    storage.save(next.as_str());
    next
}

/// Применить тему к документу
fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
    }

    for id in [LIGHT_STYLESHEET_ID, DARK_STYLESHEET_ID] {
        if let Some(link) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok())
        {
            link.set_disabled(id != theme.active_stylesheet_id());
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = toggle_theme(self.theme.get_untracked(), &LocalThemeStorage);
        self.theme.set(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(load_theme(&LocalThemeStorage));

    Effect::new(move |_| apply_theme(theme.get()));

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Кнопка переключения: луна в светлой теме, солнце в тёмной
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme.get() {
                Theme::Light => crate::shared::icons::icon("moon"),
                Theme::Dark => crate::shared::icons::icon("sun"),
            }}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage(RefCell<Option<String>>);

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn test_default_is_dark() {
        let storage = MemoryStorage::default();
        assert_eq!(load_theme(&storage), Theme::Dark);
        assert_eq!(Theme::from_storage(Some("sepia")), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStorage::default();
        let next = toggle_theme(load_theme(&storage), &storage);
        assert_eq!(next, Theme::Light);
        assert_eq!(storage.load().as_deref(), Some("light"));
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn test_double_toggle_restores_value_and_stylesheet() {
        let storage = MemoryStorage(RefCell::new(Some("light".to_string())));
        let original = load_theme(&storage);

        let once = toggle_theme(original, &storage);
        assert_eq!(once.active_stylesheet_id(), DARK_STYLESHEET_ID);
        let twice = toggle_theme(once, &storage);

        assert_eq!(twice, original);
        assert_eq!(storage.load().as_deref(), Some("light"));
        assert_eq!(twice.active_stylesheet_id(), LIGHT_STYLESHEET_ID);
    }
}
