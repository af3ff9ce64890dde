//! UseCase u601: конвертация HTML/CSS/JS в Shopify Liquid.
//!
//! Три независимых запроса к модели: сама конвертация, текстовое
//! описание результата и JSON схема настроек секции.

pub mod error;
pub mod prompts;
pub mod service;

pub use error::{GenerationCause, GenerationError};
pub use service::PromptService;
