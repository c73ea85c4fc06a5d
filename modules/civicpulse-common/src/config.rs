use std::env;

/// Application configuration loaded from environment variables.
///
/// API keys belong to the collaborator clients only; the core pipeline never
/// reads process state.
#[derive(Debug, Clone)]
pub struct Config {
    // Collaborators
    pub serper_api_key: String,
    pub serper_url: String,
    pub anthropic_api_key: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            serper_api_key: required_env("SERPER_API_KEY"),
            serper_url: env::var("SERPER_URL")
                .unwrap_or_else(|_| "https://google.serper.dev/search".to_string()),
            anthropic_api_key: required_env("ANTHROPIC_API_KEY"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
