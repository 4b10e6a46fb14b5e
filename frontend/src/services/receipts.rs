//! HTTP service listing stored receipts.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, ReceiptRecord};

/// Fetch every stored receipt. Filtering happens client-side.
pub async fn fetch_receipts(receipts_url: &str) -> AppResult<Vec<ReceiptRecord>> {
    let response = Request::get(receipts_url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    response
        .json::<Vec<ReceiptRecord>>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}
