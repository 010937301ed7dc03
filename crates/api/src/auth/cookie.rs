//! The `auth-token` session cookie.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use super::session::SessionConfig;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "auth-token";

/// `Set-Cookie` value that stores `token` for the session lifetime.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    build_cookie(token, config.max_age_secs(), config.secure_cookie)
}

/// `Set-Cookie` value that deletes the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    build_cookie("", 0, config.secure_cookie)
}

fn build_cookie(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}={value}; HttpOnly; SameSite=Strict; Path=/; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Read the session token from the request's `Cookie` headers.
///
/// Empty values count as absent.
pub fn read_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
