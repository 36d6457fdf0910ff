use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ladle_core::domain::common::entities::app_errors::CoreError;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// The request was well-formed but the data cannot be processed
    /// (e.g. a line item referencing unresolved ingredient data).
    #[error("{0}")]
    UnprocessableEntity(String),

    /// The backing store or object storage rejected the operation; the
    /// caller should treat the aggregate as unchanged and may retry later.
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "message": "validation failed",
                "errors": errors,
            }),
            other => json!({ "message": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::UnprocessableEntity(message),
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::StoreUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::ObjectStorageError(message) => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs the payload through its `Validate` impl before
/// the handler sees it. Schema violations surface as field-level messages.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        payload.validate()?;

        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_failures_map_to_unprocessable_entity() {
        let err = ApiError::from(CoreError::InvalidInput("bad line item".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn store_failures_map_to_service_unavailable() {
        let err = ApiError::from(CoreError::StoreUnavailable("connection reset".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ApiError::from(CoreError::ObjectStorageError("upload failed".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn missing_resources_map_to_not_found() {
        let err = ApiError::from(CoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failures_map_to_bad_request() {
        let err = ApiError::Validation(validator::ValidationErrors::new());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
