use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::{calendar::CalendarError, model::submission::FieldErrors};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Display)]
pub enum ServiceError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),

    #[display(fmt = "validation failed")]
    Validation(FieldErrors),

    #[display(fmt = "{}", _0)]
    Unauthorized(String),

    /// The spreadsheet endpoint failed or answered with something unusable.
    #[display(fmt = "upstream error: {}", _0)]
    Upstream(String),

    #[display(fmt = "internal error: {}", _0)]
    Internal(String),
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(fields) => json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            // upstream detail goes to the log, not to the caller
            ServiceError::Upstream(_) => json!({ "error": "Upstream service unavailable" }),
            ServiceError::Internal(_) => json!({ "error": "Internal Server Error" }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<CalendarError> for ServiceError {
    fn from(e: CalendarError) -> Self {
        ServiceError::BadRequest(e.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::Upstream(format!("request timed out: {e}"))
        } else {
            ServiceError::Upstream(e.to_string())
        }
    }
}
