//! Состояние страницы конвертации и последовательность запросов.
//!
//! Одна попытка: проверка ввода -> конвертация -> параллельно описание и
//! схема. Результаты устаревшей попытки (пользователь запустил новую)
//! отбрасываются.

use async_trait::async_trait;
use contracts::usecases::u601_convert_to_liquid::{ConversionResult, SourceDocument};
use leptos::prelude::*;

pub const INPUT_ERROR_MESSAGE: &str = "Please provide some code to convert.";
pub const CONVERSION_FALLBACK_MESSAGE: &str = "An unknown error occurred during conversion.";
pub const DETAILS_ERROR_MESSAGE: &str = "Failed to get additional details.";

/// Нет ни HTML, ни CSS, ни JS. Запрос к модели не отправляется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputError;

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(INPUT_ERROR_MESSAGE)
    }
}

impl std::error::Error for InputError {}

/// Флаги загрузки и ошибка текущей попытки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub is_converting: bool,
    pub is_explaining: bool,
    pub is_generating_schema: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaygroundState {
    pub result: ConversionResult,
    pub request: RequestState,
    /// Номер последней начатой попытки
    pub attempt: u64,
}

impl PlaygroundState {
    pub fn begin_attempt(&mut self, source: &SourceDocument) -> Result<u64, InputError> {
        if source.is_empty() {
            self.request.error = Some(InputError.to_string());
            return Err(InputError);
        }

        self.attempt += 1;
        self.result = ConversionResult::default();
        self.request = RequestState {
            is_converting: true,
            ..RequestState::default()
        };
        Ok(self.attempt)
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.attempt == attempt
    }

    /// Возвращает false, если попытка уже устарела и продолжать не нужно
    pub fn conversion_succeeded(&mut self, attempt: u64, templated_code: String) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.result.templated_code = templated_code;
        self.request.is_converting = false;
        self.request.is_explaining = true;
        self.request.is_generating_schema = true;
        true
    }

    pub fn conversion_failed(&mut self, attempt: u64, message: String) {
        if !self.is_current(attempt) {
            return;
        }
        let message = if message.trim().is_empty() {
            CONVERSION_FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        self.request.error = Some(message);
        self.request.is_converting = false;
    }

    /// Оба запроса завершились. Удачный результат сохраняется даже если
    /// второй запрос упал; текст конкретной ошибки не показывается.
    pub fn details_settled(
        &mut self,
        attempt: u64,
        explanation: Result<String, String>,
        schema: Result<String, String>,
    ) {
        if !self.is_current(attempt) {
            return;
        }

        let mut failed = false;
        match explanation {
            Ok(text) => self.result.explanation = text,
            Err(e) => {
                log::warn!("explanation request failed: {}", e);
                failed = true;
            }
        }
        match schema {
            Ok(text) => self.result.schema = text,
            Err(e) => {
                log::warn!("schema request failed: {}", e);
                failed = true;
            }
        }

        if failed {
            self.request.error = Some(DETAILS_ERROR_MESSAGE.to_string());
        }
        self.request.is_explaining = false;
        self.request.is_generating_schema = false;
    }
}

/// Три вызова генерации. Err содержит текст для пользователя.
#[async_trait(?Send)]
pub trait ConversionApi {
    async fn convert(&self, source: &SourceDocument) -> Result<String, String>;
    async fn explain(&self, templated_code: &str) -> Result<String, String>;
    async fn generate_schema(&self, templated_code: &str) -> Result<String, String>;
}

/// Контейнер состояния с единственным писателем.
/// `None` означает, что контейнер уже уничтожен (страница закрыта).
pub trait StateStore {
    fn update_state<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<PlaygroundState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Одна попытка генерации
pub async fn generate<A, S>(api: &A, store: &S, source: SourceDocument)
where
    A: ConversionApi + ?Sized,
    S: StateStore,
{
    let attempt = match store.update_state(|s| s.begin_attempt(&source)) {
        Some(Ok(attempt)) => attempt,
        Some(Err(e)) => {
            log::info!("generation skipped: {}", e);
            return;
        }
        None => return,
    };

    let templated_code = match api.convert(&source).await {
        Ok(code) => code,
        Err(message) => {
            log::error!("conversion failed: {}", message);
            store.update_state(|s| s.conversion_failed(attempt, message));
            return;
        }
    };

    let proceed = store
        .update_state(|s| s.conversion_succeeded(attempt, templated_code.clone()))
        .unwrap_or(false);
    if !proceed {
        log::debug!("attempt {} superseded, details not requested", attempt);
        return;
    }

    let (explanation, schema) = futures::join!(
        api.explain(&templated_code),
        api.generate_schema(&templated_code)
    );
    store.update_state(|s| s.details_settled(attempt, explanation, schema));
}
