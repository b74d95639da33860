//! Application state shared across all request handlers.

use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Token signing and verification keys derived from the configured secret.
pub struct Keys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl Keys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Shared state cloned into every request handler.
///
/// All fields are cheap to clone: the database connection is a pool handle
/// and the keys sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Bearer token keys.
    pub keys: Arc<Keys>,

    /// Whether ledger mutations run inside transactions.
    pub ledger_transactions: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, keys: Keys, ledger_transactions: bool) -> Self {
        Self {
            db,
            keys: Arc::new(keys),
            ledger_transactions,
        }
    }
}
