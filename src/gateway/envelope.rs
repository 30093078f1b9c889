use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Response body shared by every route.
///
/// `result` is true iff `errors` is empty. Empty `errors` and absent `data` are
/// omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub result: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn new(errors: Vec<ErrorView>, data: Option<T>) -> Self {
        Self {
            result: errors.is_empty(),
            errors,
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(Vec::new(), Some(data))
    }
}

/// A client-facing failure: HTTP status plus one error message, no payload.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "query args parsing error".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(status = self.status.as_u16(), "{}", self.message);
        let body: Envelope<()> = Envelope::new(
            vec![ErrorView {
                message: self.message,
            }],
            None,
        );
        (self.status, Json(body)).into_response()
    }
}
