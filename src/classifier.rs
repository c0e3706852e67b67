//! Password strength classifier - the core band mapping.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::StrengthPolicy;
use crate::types::StrengthResult;

/// Classifies a password under the default policy.
///
/// Total over all inputs: every string, the empty one included, maps to a
/// defined tier and description.
///
/// # Arguments
/// * `password` - The password to classify
///
/// # Returns
/// A `StrengthResult` with the matched tier and its advisory text.
pub fn classify_password_strength(password: &SecretString) -> StrengthResult {
    classify_with_policy(password, &StrengthPolicy::default())
}

/// Classifies a password under a specific policy.
///
/// Classification depends on the character count alone (Unicode scalar
/// values, not bytes): two inputs of equal count always classify
/// identically. Stateless and re-entrant.
pub fn classify_with_policy(password: &SecretString, policy: &StrengthPolicy) -> StrengthResult {
    let count = password.expose_secret().chars().count();
    let result = policy.band(count);

    #[cfg(feature = "tracing")]
    tracing::debug!(count, tier = %result.tier, "password classified");

    result
}

/// Async version that sends the classification result via channel.
///
/// Waits out a short debounce window first so a superseding keystroke can
/// cancel a stale delivery. Cancellation suppresses the send only; the sync
/// classifier itself always produces a result.
#[cfg(feature = "async")]
pub async fn classify_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("classification is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("classification superseded, dropping delivery");
        return;
    }

    let result = classify_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength result: {}", _e);
    }
}
