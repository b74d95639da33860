use crate::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9001";

pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify bearer tokens.
    pub access_token_key: String,

    pub listen_addr: String,

    /// Whether ledger mutations run inside database transactions. Defaults
    /// to true; set `LEDGER_TRANSACTIONS=false` for the legacy unguarded
    /// read-modify-write behavior.
    pub ledger_transactions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let ledger_transactions = match std::env::var("LEDGER_TRANSACTIONS") {
            Ok(value) => match value.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "LEDGER_TRANSACTIONS".to_string(),
                        value,
                    }
                    .into())
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            access_token_key: std::env::var("ACCESS_TOKEN_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("ACCESS_TOKEN_KEY".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            ledger_transactions,
        })
    }
}
