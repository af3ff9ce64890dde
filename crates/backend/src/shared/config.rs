use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со сборкой frontend (trunk build)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Базовый URL OpenAI-совместимого API
    pub api_endpoint: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    /// Имя переменной окружения с ключом API
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> i32 {
    8192
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[llm]
api_endpoint = "https://generativelanguage.googleapis.com/v1beta/openai/"
model = "gemini-2.5-flash"
temperature = 0.7
max_tokens = 8192
api_key_env = "API_KEY"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Ключ API из переменной окружения, указанной в конфиге
pub fn read_api_key(config: &LlmConfig) -> anyhow::Result<String> {
    match std::env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(anyhow::anyhow!(
            "environment variable {} with the model API key is not set",
            config.api_key_env
        )),
    }
}

/// Resolves `static_dir` relative to the executable directory
/// unless it is absolute or already exists relative to the working directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() || dir.exists() {
        return dir.to_path_buf();
    }
    match exe_dir() {
        Some(exe_dir) => exe_dir.join(dir),
        None => dir.to_path_buf(),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.api_key_env, "API_KEY");
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config(
            r#"
[llm]
api_endpoint = "http://localhost:11434/v1"
model = "llama3"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.llm.max_tokens, 8192);
    }

    #[test]
    fn test_missing_api_key_is_error() {
        let config = LlmConfig {
            api_endpoint: String::new(),
            model: String::new(),
            temperature: 0.0,
            max_tokens: 1,
            api_key_env: "U601_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        };
        assert!(read_api_key(&config).is_err());
    }
}
