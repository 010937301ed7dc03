/// Errors from the image-host layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Required credentials are absent. Holds variable names, never values.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("Image host error ({status}): {body}")]
    Upstream {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}
