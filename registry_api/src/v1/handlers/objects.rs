use crate::storage::{ObjectStorage, StorageError};
use crate::v1::api_models::UploadSlotDto;
use crate::v1::error::ApiError;
use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

/// Issues a presigned upload URL; the client PUTs the bytes there and
/// stores the returned object path on the factory record.
pub async fn request_upload(
    State(storage): State<ObjectStorage>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = storage.create_upload_slot().await?;
    Ok(Json(UploadSlotDto {
        upload_url: slot.upload_url,
        object_path: slot.object_path,
    }))
}

pub async fn download_object(
    State(storage): State<ObjectStorage>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let object = storage.get(&name).await?;

    let mut response = Response::builder().status(StatusCode::OK).header(
        header::CONTENT_TYPE,
        object
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream"),
    );
    if let Some(length) = object.content_length {
        response = response.header(header::CONTENT_LENGTH, length);
    }

    let body = Body::from_stream(ReaderStream::new(object.body.into_async_read()));
    response
        .body(body)
        .map_err(|e| StorageError::Request(e.to_string()).into())
}
