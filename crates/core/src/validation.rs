//! Payload validation rules for admin and public endpoints.
//!
//! Everything here is pure: handlers collect raw request fields, run them
//! through these helpers, and only then touch a store.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Basic `local@domain.tld` shape. Deliberately permissive.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Largest image accepted by the upload endpoint (10 MiB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted by the upload endpoint.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

// ---------------------------------------------------------------------------
// Required fields
// ---------------------------------------------------------------------------

/// Return the names of fields that are absent or blank, in the given order.
pub fn missing_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect()
}

/// Fail with a validation error naming every absent or blank field.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Require `value` to parse as an absolute URL.
pub fn validate_url(field: &str, value: &str) -> Result<(), CoreError> {
    if value.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid URL format for {field}"
        )))
    }
}

/// Whether `email` matches the basic `local@domain.tld` pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Require `email` to match the basic address pattern.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid email address".into(),
        ))
    }
}

/// Split a comma-separated technology list, trimming each entry and
/// dropping empty ones.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}

/// Check an uploaded image's declared type and size.
pub fn validate_image_upload(content_type: &str, size: usize) -> Result<(), CoreError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(
            "Invalid file type. Only JPEG, PNG, and WebP are allowed.".into(),
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(
            "File size too large. Maximum size is 10MB.".into(),
        ));
    }
    Ok(())
}
