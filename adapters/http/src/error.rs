use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Client errors reported by the board endpoints.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body could not be decoded as a form.
    #[error("Invalid form data")]
    InvalidForm,
    /// The `x` or `y` field was missing, malformed or off the board.
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

impl ApiError {
    /// Status code returned to the client.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidForm | Self::InvalidCoordinates => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        for error in [ApiError::InvalidForm, ApiError::InvalidCoordinates] {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(ApiError::InvalidForm.to_string(), "Invalid form data");
        assert_eq!(ApiError::InvalidCoordinates.to_string(), "Invalid coordinates");
    }
}
