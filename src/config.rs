use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Environment {
    Developing,
    Testing,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "testing" => Environment::Testing,
            _ => Environment::Developing,
        }
    }

    fn default_database_url(self) -> &'static str {
        match self {
            Environment::Developing => "sqlite://movies.db?mode=rwc",
            Environment::Testing => "sqlite::memory:",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub environment: Environment,
    pub database_url: String,
    pub movies_csv: Option<String>,
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let environment = std::env::var("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Developing);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| environment.default_database_url().to_string());

        let movies_csv = std::env::var("MOVIES_CSV").ok().filter(|s| !s.trim().is_empty());

        let api_prefix = std::env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            environment,
            database_url,
            movies_csv,
            api_prefix: normalize_prefix(&api_prefix),
        })
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parse_falls_back_to_developing() {
        assert_eq!(Environment::parse("testing"), Environment::Testing);
        assert_eq!(Environment::parse(" TESTING "), Environment::Testing);
        assert_eq!(Environment::parse("production"), Environment::Developing);
        assert_eq!(Environment::Testing.default_database_url(), "sqlite::memory:");
    }

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(normalize_prefix("/api/v1/"), "/api/v1");
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }
}
