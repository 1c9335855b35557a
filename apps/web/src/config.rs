use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means the in-memory store is used (local development only).
    pub database_url: Option<String>,
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Base URL of the hosted auth service, e.g. `https://<project>.supabase.co/auth/v1`.
    pub auth_url: String,
    pub auth_jwt_secret: String,
    pub auth_audience: String,
    pub auth_provider: String,
    /// Public origin of this app, used to build the auth redirect target.
    pub app_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok(),
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            auth_url: require_env("AUTH_URL")?
                .trim_end_matches('/')
                .to_string(),
            auth_jwt_secret: require_env("AUTH_JWT_SECRET")?,
            auth_audience: std::env::var("AUTH_AUDIENCE")
                .unwrap_or_else(|_| "authenticated".to_string()),
            auth_provider: std::env::var("AUTH_PROVIDER").unwrap_or_else(|_| "google".to_string()),
            app_url: std::env::var("APP_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// URL the login page sends the browser to. The provider redirects back to
    /// `/auth/callback` with the session tokens in the URL fragment.
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/authorize?provider={}&redirect_to={}/auth/callback",
            self.auth_url, self.auth_provider, self.app_url
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: None,
            openai_api_key: "sk-test".to_string(),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            auth_url: "https://auth.example.test/auth/v1".to_string(),
            auth_jwt_secret: "test-jwt-secret".to_string(),
            auth_audience: "authenticated".to_string(),
            auth_provider: "google".to_string(),
            app_url: "http://localhost:8080".to_string(),
            port: 8080,
            rust_log: "debug".to_string(),
        }
    }
}
