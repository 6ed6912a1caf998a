//! Error types for the Pantheon client

use thiserror::Error;

/// Result type alias for Pantheon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building paths for, or (de)serializing, resource lists
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The session could not name the current user, so no valid path exists.
    #[error("Could not determine user for request: {0}")]
    SessionResolution(String),

    /// A numeric field was neither a JSON integer nor a string of digits.
    #[error("Malformed numeric field `{field}`: {raw}")]
    MalformedNumericField { field: String, raw: String },

    /// The payload was not a JSON array of the expected element shape.
    #[error("{}", decode_message(.index, .field, &**.source))]
    Decode {
        /// Position of the failing element, `None` if the payload itself is malformed
        index: Option<usize>,
        /// Dotted path of the failing field inside the element (e.g. `site.php_version`)
        field: Option<String>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to encode resource list: {0}")]
    Encode(#[source] serde_json::Error),
}

fn decode_message(
    index: &Option<usize>,
    field: &Option<String>,
    source: &(dyn std::error::Error + Send + Sync),
) -> String {
    match (index, field) {
        (Some(i), Some(field)) => {
            format!("Failed to decode element {} at `{}`: {}", i, field, source)
        }
        (Some(i), None) => format!("Failed to decode element {}: {}", i, source),
        (None, _) => format!("Failed to decode response payload: {}", source),
    }
}

impl ResourceError {
    /// Whether this error is, or wraps, a malformed numeric field.
    pub fn is_malformed_numeric(&self) -> bool {
        match self {
            ResourceError::MalformedNumericField { .. } => true,
            ResourceError::Decode { source, .. } => source
                .downcast_ref::<ResourceError>()
                .is_some_and(ResourceError::is_malformed_numeric),
            _ => false,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `pantheon auth login <MACHINE_TOKEN>` to start a session.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `pantheon auth login <MACHINE_TOKEN>` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Machine token not configured. Run `pantheon auth login <MACHINE_TOKEN>`.")]
    MissingMachineToken,

    #[error("No active session. Run `pantheon auth login <MACHINE_TOKEN>`.")]
    MissingSession,

    #[error("Session expired. Run `pantheon auth login <MACHINE_TOKEN>` to renew it.")]
    SessionExpired,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
