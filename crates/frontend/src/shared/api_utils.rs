//! Построение URL для запросов к backend.

/// Порт backend по умолчанию (см. `[server] port` в config.toml)
pub const BACKEND_PORT: &str = "3000";

/// Базовый URL backend для заданных протокола, хоста и порта страницы.
///
/// Если страницу отдаёт сам backend или прокси на стандартном порту
/// (порт пустой), запросы идут на тот же origin.
/// При `trunk serve` страница живёт на другом порту, и запросы
/// отправляются на `BACKEND_PORT` того же хоста.
pub fn backend_base(protocol: &str, hostname: &str, port: &str) -> String {
    if port.is_empty() {
        format!("{}//{}", protocol, hostname)
    } else if port == BACKEND_PORT {
        format!("{}//{}:{}", protocol, hostname, port)
    } else {
        format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
    }
}

/// Get the base URL for API requests from the current window location.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    backend_base(&protocol, &hostname, &port)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
