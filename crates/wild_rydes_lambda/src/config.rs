use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "DYNAMO_TABLE";
pub const ENDPOINT_URL_ENV: &str = "DYNAMO_ENDPOINT_URL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DYNAMO_TABLE must be configured")]
    MissingTableName,
}

/// Settings for the ride store, resolved once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub table_name: String,
    /// Overrides the DynamoDB endpoint, e.g. for DynamoDB Local.
    pub endpoint_url: Option<String>,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, |key| std::env::var(key).ok())
    }

    /// An explicit table name wins over `DYNAMO_TABLE`.
    pub fn with_table_name(table_name: impl Into<String>) -> Result<Self, ConfigError> {
        Self::resolve(Some(table_name.into()), |key| std::env::var(key).ok())
    }

    pub fn resolve(
        table_name: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let table_name = table_name
            .or_else(|| lookup(TABLE_NAME_ENV))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingTableName)?;

        let endpoint_url = lookup(ENDPOINT_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            table_name,
            endpoint_url,
        })
    }
}
