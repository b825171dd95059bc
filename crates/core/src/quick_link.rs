//! Quick link rules shared by the create and update paths.

use crate::error::{CoreError, FieldErrors};

/// Maximum length of a quick link title (matches `VARCHAR(255)`).
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Maximum length of a quick link URL or logo URL.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Scheme prepended to URLs submitted without one.
pub const DEFAULT_SCHEME: &str = "http://";

pub const DUPLICATE_URL_MESSAGE: &str = "URL already exists for this workspace and owner.";

/// Unique constraint backing the duplicate-url rule in storage.
pub const DUPLICATE_URL_CONSTRAINT: &str = "uq_quick_links_workspace_owner_url";

/// Normalize a user-submitted URL.
///
/// Surrounding whitespace is removed and a bare host such as
/// `docs.example.com/page` becomes `http://docs.example.com/page`. Empty
/// input stays empty so the validator reports it.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || has_http_scheme(trimmed) {
        return trimmed.to_string();
    }
    format!("{DEFAULT_SCHEME}{trimmed}")
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Field error raised when the owner already saved the same URL in the
/// workspace.
pub fn duplicate_url_error() -> CoreError {
    CoreError::InvalidFields(FieldErrors::single("url", DUPLICATE_URL_MESSAGE))
}
