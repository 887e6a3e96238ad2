//! The one path every mutation takes once a guard has let it through.

use crate::services::{ApiError, LedgerApi, LedgerRequest};

/// Send `request`, hand the result to `settle`, and call `on_update` exactly
/// once if the store accepted it. Failures never trigger a refresh.
pub async fn run_request<A, S, F>(
    api: &A,
    component: &str,
    request: LedgerRequest,
    settle: S,
    on_update: F,
) -> Result<(), ApiError>
where
    A: LedgerApi + ?Sized,
    S: FnOnce(Result<(), ApiError>),
    F: FnOnce(),
{
    log::info!(target: component, "{}", request.describe());
    let result = request.send(api).await;
    settle(result.clone());
    if result.is_ok() {
        on_update();
    }
    result
}
