use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not JSON or was the wrong shape for the target type.
    #[error("invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request rejected");
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// JSON body extractor that ignores the `Content-Type` header.
///
/// Any body that parses is accepted, whatever the client labels it. Syntax
/// errors reject with 400 and shape mismatches with 422, both as an
/// [`ApiError`] JSON body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(ApiJson(value))
    }
}
