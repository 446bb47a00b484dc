use std::path::PathBuf;
use thiserror::Error;

/// Failures at the backend boundary, already classified for display.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request timeout. The server took too long to respond.")]
    Timeout,

    #[error("No response from server. Check network connection.")]
    Unreachable,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    UnexpectedResponse(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl ApiError {
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unreachable
        } else if err.is_decode() {
            ApiError::UnexpectedResponse(err.to_string())
        } else if err.is_request() {
            // Sent but nothing usable came back (reset, closed early).
            ApiError::Unreachable
        } else {
            ApiError::Request(err.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Validation(#[from] crate::screens::create::ValidationError),

    #[error("Failed to fetch employees: {0}")]
    FetchFailed(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("No screen at path {0} (expected / or /list)")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
