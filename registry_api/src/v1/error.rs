use crate::storage::StorageError;
use crate::v1::api_models::FieldError;
use crate::v1::db::queries::QueryError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid {0} payload")]
    Validation(&'static str, Vec<FieldError>),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Query(QueryError::Sql(e)) => {
                warn!(error = ?e, "sql error");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
                    .into_response()
            }
            ApiError::NotFound(entity) => {
                ErrorMessage::from((StatusCode::NOT_FOUND, format!("{entity} not found")))
                    .into_response()
            }
            ApiError::Validation(entity, errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorMessage {
                    status_code: StatusCode::UNPROCESSABLE_ENTITY,
                    message: format!("invalid {entity} payload"),
                    errors,
                }),
            )
                .into_response(),
            ApiError::Storage(StorageError::NotFound(name)) => {
                ErrorMessage::from((StatusCode::NOT_FOUND, format!("object {name} not found")))
                    .into_response()
            }
            ApiError::Storage(e) => {
                warn!(error = ?e, "object storage error");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "object storage unavailable"))
                    .into_response()
            }
        }
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
