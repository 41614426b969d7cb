use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{ClaimcheckError, ErrorResult};

impl IntoResponse for ErrorResult {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for ClaimcheckError {
    fn into_response(self) -> Response {
        self.to_error_result().into_response()
    }
}

impl From<JsonRejection> for ClaimcheckError {
    fn from(rejection: JsonRejection) -> Self {
        ClaimcheckError::InvalidInput(rejection.body_text())
    }
}
