//! Client-side file download.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement};

use crate::export::ExportFormat;
use crate::object_url::{browser_error, ObjectUrl};
use crate::types::{AppError, AppResult};

/// Offer `contents` as a download named `file_name`.
///
/// The temporary object URL is released when this returns, on success or
/// failure.
pub fn download_text(contents: &str, file_name: &str, mime_type: &str) -> AppResult<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser_error)?;

    let url = ObjectUrl::for_blob(&blob)?;

    let anchor = gloo_utils::document()
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("<a> is not an anchor element".to_string()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);
    anchor.click();

    Ok(())
}

/// Download an already rendered export.
pub fn download_export(format: ExportFormat, contents: &str) -> AppResult<()> {
    log::info!("Exporting {}", format.file_name());
    download_text(contents, format.file_name(), format.mime_type())
}
