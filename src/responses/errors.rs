// src/responses/errors.rs
use crate::errors::ServerError;
use crate::templates::components::error::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

/// Turns a handler error into an HTML page with the matching status.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    match status {
        500..=599 => error!(status, "request failed: {err}"),
        400 | 401 | 413 | 415 => warn!(status, "request rejected: {err}"),
        _ => {}
    }

    // Internal details stay in the log.
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg)
        | ServerError::Unauthorized(msg)
        | ServerError::PayloadTooLarge(msg)
        | ServerError::UnsupportedMedia(msg)
        | ServerError::Upstream(msg) => msg.clone(),
        ServerError::DbError(_) | ServerError::Config(_) | ServerError::InternalError => {
            "Internal Server Error".to_string()
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
