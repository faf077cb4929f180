//! HTTP adapter mapping for domain errors.
//!
//! Client errors render as `{"message": ...}`; internal errors render as
//! `{"error": ...}` carrying the store's raw message.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TraceId};
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current().map(|id| id.to_string());
        let mut builder = HttpResponse::build(self.status_code());
        match self.code() {
            ErrorCode::InternalError => {
                error!(trace_id = trace_id.as_deref(), error = %self, "request failed");
                builder.json(ErrorResponse {
                    error: self.message().to_owned(),
                })
            }
            _ => {
                debug!(trace_id = trace_id.as_deref(), error = %self, "request rejected");
                builder.json(MessageResponse::new(self.message()))
            }
        }
    }
}

/// Turn JSON body extraction failures into 400 responses.
///
/// Registered through [`json_config`]; the message is the deserialiser's
/// description of what went wrong.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}

/// JSON extractor configuration used by every app instance.
///
/// Bodies bind regardless of the declared content type.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

#[cfg(test)]
mod tests;
