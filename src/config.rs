use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "sqlite://health_tracker.db";
const DEFAULT_LOG_FILTER: &str = "health_tracker=warn,sqlx=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT` value, case-insensitive; anything unrecognised falls back to plain.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_ascii_lowercase();
        let de: StrDeserializer<'_, ValueError> = raw.as_str().into_deserializer();
        Self::deserialize(de).unwrap_or(Self::Plain)
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let log = LogConfig {
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
            format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Plain),
        };
        Self { database_url, log }
    }

    /// Config for a throwaway in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            log: LogConfig {
                filter: DEFAULT_LOG_FILTER.into(),
                format: LogFormat::Plain,
            },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn log_format_names() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON\n"), LogFormat::Json);
        assert_eq!(LogFormat::parse("plain"), LogFormat::Plain);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Plain);
        assert_eq!(LogFormat::parse(""), LogFormat::Plain);
    }
}
