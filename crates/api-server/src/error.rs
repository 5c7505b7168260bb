use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use packwise_types::PackError;
use serde::Serialize;

/// Errors surfaced to HTTP clients.
///
/// Engine errors are caller mistakes (bad quantity, bad configuration), so
/// they all map to 400 rather than a server fault.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] PackError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        let body = serde_json::to_string(&error_response).unwrap();
        let res = HttpResponse::new(self.status_code());
        res.set_body(BoxBody::new(body))
    }
}
