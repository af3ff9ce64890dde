pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod export;
pub mod highlight;
pub mod icons;
pub mod theme;
