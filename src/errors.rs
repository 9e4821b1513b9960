use astra::Response;
// errors.rs
use std::fmt;

/// Errors raised by request handling and the layers below it
/// (storage, uploads, the external sign-in endpoint, configuration).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    PayloadTooLarge(String),
    UnsupportedMedia(String),
    Upstream(String),
    DbError(String),
    Config(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::UnsupportedMedia(_) => 415,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ServerError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            ServerError::UnsupportedMedia(msg) => write!(f, "Unsupported Media Type: {msg}"),
            ServerError::Upstream(msg) => write!(f, "Upstream Error: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
