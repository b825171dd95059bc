//! Quick link entity model and DTOs.
//!
//! A quick link is a bookmark a user keeps inside one workspace. The
//! owning workspace and user are never read from request bodies: the
//! create DTO has no such fields and [`NewQuickLink`] is built by the
//! handler from the resolved workspace and the authenticated caller.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;
use orbit_core::error::{CoreError, FieldErrors};
use orbit_core::quick_link::{normalize_url, MAX_TITLE_LENGTH, MAX_URL_LENGTH};
use orbit_core::types::{DbId, Timestamp};

/// Message for an explicit `null` on a field that cannot be cleared.
pub const NOT_NULL_MESSAGE: &str = "This field may not be null.";

/// A row from the `quick_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuickLink {
    pub id: DbId,
    pub workspace_id: DbId,
    pub owner_id: DbId,
    pub title: Option<String>,
    pub url: String,
    pub logo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a quick link.
///
/// Unknown fields (including any attempt to pass `workspace_id` or
/// `owner_id`) are ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateQuickLink {
    #[validate(length(
        max = MAX_TITLE_LENGTH,
        message = "Ensure this field has no more than 255 characters."
    ))]
    pub title: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(max = MAX_URL_LENGTH, message = "Ensure this field has no more than 2048 characters."),
        url(message = "Enter a valid URL.")
    )]
    pub url: Option<String>,
    #[validate(length(
        max = MAX_URL_LENGTH,
        message = "Ensure this field has no more than 2048 characters."
    ))]
    pub logo: Option<String>,
}

impl CreateQuickLink {
    /// Apply URL normalization before validation.
    pub fn normalized(mut self) -> Self {
        self.url = self.url.map(|url| normalize_url(&url));
        self
    }
}

/// Request body for a partial update.
///
/// Each field distinguishes "omitted" (`None`, keep the stored value) from
/// an explicit `null` (`Some(None)`). `title` and `logo` are cleared by
/// `null`; `url` is mandatory on the row, so `null` is a field error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuickLink {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        max = MAX_TITLE_LENGTH,
        message = "Ensure this field has no more than 255 characters."
    ))]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(
        length(max = MAX_URL_LENGTH, message = "Ensure this field has no more than 2048 characters."),
        url(message = "Enter a valid URL.")
    )]
    pub url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        max = MAX_URL_LENGTH,
        message = "Ensure this field has no more than 2048 characters."
    ))]
    pub logo: Option<Option<String>>,
}

impl UpdateQuickLink {
    pub fn normalized(mut self) -> Self {
        self.url = self.url.map(|url| url.map(|url| normalize_url(&url)));
        self
    }

    /// Run the field validators and reject an explicit `null` url.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        let mut fields = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        };
        if matches!(self.url, Some(None)) {
            fields.add("url", NOT_NULL_MESSAGE);
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(fields))
        }
    }

    /// The new url, if one was supplied.
    pub fn new_url(&self) -> Option<&str> {
        self.url.as_ref().and_then(|url| url.as_deref())
    }

    /// Returns `true` when the body carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.logo.is_none()
    }
}

/// Wraps any present value (including `null`) in `Some`, so a missing key
/// stays `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A validated quick link ready to insert, with server-trusted ownership.
#[derive(Debug, Clone)]
pub struct NewQuickLink {
    pub workspace_id: DbId,
    pub owner_id: DbId,
    pub title: Option<String>,
    pub url: String,
    pub logo: Option<String>,
}
