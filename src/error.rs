use thiserror::Error;

/// Failures of the fetch capability.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("HTTP {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl NetError {
    pub fn http_status(status: u16, url: String) -> Self {
        Self::HttpStatus { status, url }
    }

    /// Server side hiccups and throttling are worth another attempt, everything else is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetError::Http(_) => true,
            NetError::HttpStatus { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            NetError::Client(_) => false,
        }
    }
}

impl From<reqwest::Error> for NetError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::HttpStatus {
                status: status.as_u16(),
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Self::Http(error.to_string()),
        }
    }
}

/// Operation level failures. Per item problems never end up here.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory payload is not valid JSON: {0}")]
    Decode(serde_json::Error),
    #[error("Inventory payload has an unexpected shape: {0}")]
    Shape(serde_json::Error),
    #[error("Inventory payload carries an error marker: {0}")]
    ErrorMarker(String),
    #[error("Inventory payload is null, steamid/appid might be wrong or the inventory is private")]
    EmptyPayload,
    #[error("Inventory payload is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Net(#[from] NetError),
    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            serde_json::error::Category::Data => Self::Shape(error),
            _ => Self::Decode(error),
        }
    }
}

/// Why an inspection payload could not be turned into extended item info.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
    #[error("iteminfo NOT FOUND")]
    MissingItemInfo,
    #[error("{0} NOT FOUND")]
    MissingField(&'static str),
    #[error("stickers could not be read: {0}")]
    Stickers(String),
}

pub type NetResult<T> = Result<T, NetError>;
