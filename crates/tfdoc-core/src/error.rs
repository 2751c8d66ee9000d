//! Error types for tfdoc.

/// Errors that can occur while looking up or explaining a resource.
///
/// Nothing in tfdoc retries: every variant reaches the immediate caller
/// as a single descriptive message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No resource matches the requested name and version.
    #[error("No resource found for name='{resource_name}', version='{version}'")]
    NotFound {
        /// Requested resource name
        resource_name: String,
        /// Requested provider version
        version: String,
    },

    /// The record store or the model endpoint failed or was unreachable.
    #[error("{service} error: {message}")]
    Upstream {
        /// Which remote collaborator failed ("store" or "model")
        service: &'static str,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A required credential or setting is missing or malformed.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (reading local input files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Longest response body excerpt kept in an upstream error message.
pub const MAX_BODY_EXCERPT: usize = 512;

/// Convenience `Result` type alias for tfdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the caller can fix this error by changing its input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Creates a new not-found error for a name/version pair.
    pub fn not_found<N, V>(resource_name: N, version: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Error::NotFound {
            resource_name: resource_name.into(),
            version: version.into(),
        }
    }

    /// Creates a new upstream error with a message.
    pub fn upstream<S: Into<String>>(service: &'static str, message: S) -> Self {
        Error::Upstream {
            service,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new upstream error with a message and source error.
    pub fn upstream_with_source<S, E>(service: &'static str, message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Upstream {
            service,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an upstream error for a non-success HTTP response.
    ///
    /// The body is folded onto one line and cut to [`MAX_BODY_EXCERPT`]
    /// characters.
    pub fn upstream_response<S, D>(service: &'static str, what: S, status: D, body: &str) -> Self
    where
        S: std::fmt::Display,
        D: std::fmt::Display,
    {
        Self::upstream(
            service,
            format!("{what} failed (HTTP {status}): {}", body_excerpt(body)),
        )
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

fn body_excerpt(body: &str) -> String {
    let folded = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match folded.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}...", &folded[..cut]),
        None => folded,
    }
}
