pub mod prompt;

use keyring::Entry;
use std::fmt;

const SERVICE_NAME: &str = "welivehere";
const KEY_NAME: &str = "meersens-api-key";

/// Environment variable name for providing the API key without keyring
pub const ENV_KEY_VAR: &str = "MEERSENS_API_KEY";

// Re-export prompt functions for convenience
pub use prompt::{prompt_for_key, setup_api_key};

/// Check for an API key in the MEERSENS_API_KEY environment variable.
/// Returns Some(key) if the env var is set and non-empty, None otherwise.
pub fn get_key_from_env() -> Option<String> {
    match std::env::var(ENV_KEY_VAR) {
        Ok(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

#[derive(Debug)]
pub enum CredentialError {
    KeyringUnavailable(String),
    KeyNotFound,
    StoreFailed(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::KeyringUnavailable(msg) => write!(f, "Keyring unavailable: {}", msg),
            CredentialError::KeyNotFound => write!(f, "API key not found in keyring"),
            CredentialError::StoreFailed(msg) => write!(f, "Failed to store API key: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Synchronous version of get_key - retrieves the key from the system keyring
fn get_key_sync() -> Result<String, CredentialError> {
    let entry = Entry::new(SERVICE_NAME, KEY_NAME)
        .map_err(|e| CredentialError::KeyringUnavailable(format!("{}", e)))?;

    entry.get_password().map_err(|e| match e {
        keyring::Error::NoEntry => CredentialError::KeyNotFound,
        _ => CredentialError::KeyringUnavailable(format!("{}", e)),
    })
}

/// Synchronous version of store_key - stores the key in the system keyring
fn store_key_sync(key: &str) -> Result<(), CredentialError> {
    let entry = Entry::new(SERVICE_NAME, KEY_NAME)
        .map_err(|e| CredentialError::KeyringUnavailable(format!("{}", e)))?;

    entry
        .set_password(key)
        .map_err(|e| CredentialError::StoreFailed(format!("{}", e)))?;

    Ok(())
}

/// Async wrapper for get_key_sync - retrieves the key from the system keyring
/// Uses spawn_blocking to prevent blocking the async runtime
pub async fn get_key() -> Result<String, CredentialError> {
    tokio::task::spawn_blocking(get_key_sync)
        .await
        .map_err(|e| CredentialError::KeyringUnavailable(format!("Task join error: {}", e)))?
}

/// Async wrapper for store_key_sync - stores the key in the system keyring
/// Uses spawn_blocking to prevent blocking the async runtime
pub async fn store_key(key: String) -> Result<(), CredentialError> {
    tokio::task::spawn_blocking(move || store_key_sync(&key))
        .await
        .map_err(|e| CredentialError::KeyringUnavailable(format!("Task join error: {}", e)))?
}
