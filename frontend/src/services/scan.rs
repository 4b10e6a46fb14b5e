//! HTTP service submitting a receipt to the extraction backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::object_url::browser_error;
use crate::state::SubmissionRequest;
use crate::types::{AppError, AppResult, ScanResult};

/// Build the multipart body: `receipt`, `person_id`, `category`.
fn build_form(request: &SubmissionRequest<File>) -> AppResult<FormData> {
    let form_data = FormData::new().map_err(browser_error)?;

    form_data
        .append_with_blob_and_filename("receipt", &request.file, &request.file.name())
        .map_err(browser_error)?;
    form_data
        .append_with_str("person_id", &request.person_id)
        .map_err(browser_error)?;
    form_data
        .append_with_str("category", &request.category)
        .map_err(browser_error)?;

    Ok(form_data)
}

/// Upload a receipt and decode the extracted fields.
pub async fn submit_receipt(scan_url: &str, request: &SubmissionRequest<File>) -> AppResult<ScanResult> {
    let form_data = build_form(request)?;

    let response = Request::post(scan_url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    response
        .json::<ScanResult>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}
