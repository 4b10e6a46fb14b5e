//! Scoped object URLs and the receipt file abstraction.
//!
//! Browser object URLs keep their blob alive until revoked. [`ObjectUrl`]
//! ties that revocation to ownership: the URL is released when the value is
//! dropped, exactly once, whichever path retires it.

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::{Blob, File, Url};

use crate::types::{AppError, AppResult};

/// An object URL released when dropped.
pub struct ObjectUrl {
    url: String,
    release: Option<Box<dyn FnOnce(&str)>>,
}

impl ObjectUrl {
    /// Wrap `url`, running `release` with it on drop.
    pub fn with_release(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Create a browser object URL for `blob`, revoked on drop.
    pub fn for_blob(blob: &Blob) -> AppResult<Self> {
        let url = Url::create_object_url_with_blob(blob).map_err(browser_error)?;
        Ok(Self::with_release(url, |url| {
            if let Err(e) = Url::revoke_object_url(url) {
                log::warn!("Failed to revoke object URL {}: {:?}", url, e);
            }
        }))
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

/// A file the user picked or dropped.
///
/// Implemented for [`web_sys::File`]; tests provide their own.
pub trait ReceiptFile: Clone + 'static {
    fn file_name(&self) -> String;

    fn byte_size(&self) -> u64;

    /// MIME type as reported by the browser (may be empty).
    fn media_type(&self) -> String;

    /// Local URL showing this file, if one can be made.
    fn create_preview(&self) -> Option<ObjectUrl>;

    fn is_image(&self) -> bool {
        self.media_type().starts_with("image/")
    }
}

impl ReceiptFile for File {
    fn file_name(&self) -> String {
        File::name(self)
    }

    fn byte_size(&self) -> u64 {
        Blob::size(self).max(0.0) as u64
    }

    fn media_type(&self) -> String {
        Blob::type_(self)
    }

    fn create_preview(&self) -> Option<ObjectUrl> {
        match ObjectUrl::for_blob(self) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("No preview for {}: {}", File::name(self), e);
                None
            }
        }
    }
}

pub(crate) fn browser_error(err: JsValue) -> AppError {
    AppError::Browser(format!("{:?}", err))
}
