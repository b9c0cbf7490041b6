//! Shared utilities for use cases.
//!
//! Cancellation checking and the cancellable wrapper around outbound calls.

use scout_domain::RetrievalError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(RetrievalError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), RetrievalError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(RetrievalError::Cancelled);
    }
    Ok(())
}

/// Await `call` unless the token fires first.
///
/// When the token wins, `call` is dropped, which abandons the in-flight
/// request; its late result is never observed.
pub(crate) async fn run_cancellable<T, F>(
    token: &Option<CancellationToken>,
    call: F,
) -> Result<T, RetrievalError>
where
    F: Future<Output = Result<T, RetrievalError>>,
{
    check_cancelled(token)?;
    match token {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(RetrievalError::Cancelled),
                result = call => result,
            }
        }
        None => call.await,
    }
}
