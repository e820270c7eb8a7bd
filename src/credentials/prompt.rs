use anyhow::{Context, Result};

use super::{get_key, get_key_from_env, store_key, CredentialError};

/// Prompts user to enter their Meersens API key
pub fn prompt_for_key() -> Result<String> {
    println!("Meersens API key required for air quality and weather data.");
    println!("Create one at: https://www.meersens.com/");
    println!();

    let key = rpassword::prompt_password("Enter API key: ")
        .context("Failed to read API key from stdin")?;

    let key = key.trim();

    if key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    Ok(key.to_string())
}

/// Resolve the API key: environment variable first, then keyring, then an
/// interactive prompt that stores the entered key for next time.
///
/// Callers decide what a failure means. Scoring commands treat it as
/// non-fatal and run with the network signals degraded.
pub async fn setup_api_key() -> Result<String> {
    if let Some(key) = get_key_from_env() {
        return Ok(key);
    }

    match get_key().await {
        Ok(key) => Ok(key),
        Err(CredentialError::KeyNotFound) => {
            // Key missing, prompt for it
            let key = prompt_for_key()?;

            store_key(key.clone())
                .await
                .context("Failed to store API key in keyring")?;

            println!("API key stored securely in system keyring.");

            Ok(key)
        }
        Err(CredentialError::KeyringUnavailable(msg)) => {
            anyhow::bail!(
                "System keyring unavailable. Set the MEERSENS_API_KEY environment \
                variable instead.\nError: {}",
                msg
            );
        }
        Err(e) => {
            anyhow::bail!("Failed to access keyring: {}", e);
        }
    }
}
