use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use std::fmt::{Debug, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Internal,
    BadRequest,
}

impl ApiErrorKind {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = self.status_code().canonical_reason().unwrap_or("Error");
        f.write_str(reason)
    }
}

/// Handler failure carrying the status it should be answered with.
pub struct ApiError {
    kind: ApiErrorKind,
    inner: anyhow::Error,
}

impl ApiError {
    pub fn internal(inner: anyhow::Error) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            inner,
        }
    }

    /// The request itself was unusable; answered with 400.
    pub fn bad_request(inner: anyhow::Error) -> Self {
        Self {
            kind: ApiErrorKind::BadRequest,
            inner,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.kind, self.inner)
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", self.kind, self.inner)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.kind.status_code(), self.to_string()).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn untagged_errors_are_internal() {
        let error = ApiError::from(anyhow!("store unavailable"));
        assert_eq!(error.kind(), ApiErrorKind::Internal);
        assert_eq!(
            error.to_string(),
            "Internal Server Error: store unavailable"
        );
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_requests_answer_400() {
        let error = ApiError::bad_request(anyhow!("minutes must be at least 1"));
        assert_eq!(error.to_string(), "Bad Request: minutes must be at least 1");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
