use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use shared::ObjectStorageConfig;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object {0} not found")]
    NotFound(String),
    #[error("failed to presign upload url: {0}")]
    Presign(String),
    #[error("object store request failed: {0}")]
    Request(String),
}

/// S3-compatible photo store. Uploads never pass through this service:
/// clients PUT directly to a presigned URL and persist the returned
/// `/objects/<name>` path on the factory record.
#[derive(Clone)]
pub struct ObjectStorage {
    client: Client,
    bucket: String,
    key_prefix: String,
    upload_expiry: Duration,
}

pub struct UploadSlot {
    pub upload_url: String,
    pub object_path: String,
}

pub struct StoredObject {
    pub body: ByteStream,
    pub content_type: Option<String>,
    pub content_length: Option<i64>,
}

impl ObjectStorage {
    pub async fn from_config(config: &ObjectStorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            key_prefix: config.key_prefix.clone(),
            upload_expiry: Duration::from_secs(config.upload_expiry_seconds),
        }
    }

    fn object_key(&self, name: &str) -> String {
        if self.key_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.key_prefix, name)
        }
    }

    pub async fn create_upload_slot(&self) -> Result<UploadSlot, StorageError> {
        let name = Uuid::now_v7().to_string();
        let presigning = PresigningConfig::expires_in(self.upload_expiry)
            .map_err(|e| StorageError::Presign(e.to_string()))?;
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(self.object_key(&name))
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        Ok(UploadSlot {
            upload_url: request.uri().to_string(),
            object_path: format!("/objects/{name}"),
        })
    }

    pub async fn get(&self, name: &str) -> Result<StoredObject, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.object_key(name))
            .send()
            .await
            .map_err(|err| {
                let service = err.into_service_error();
                if service.is_no_such_key() {
                    StorageError::NotFound(name.to_string())
                } else {
                    StorageError::Request(service.to_string())
                }
            })?;

        Ok(StoredObject {
            body: output.body,
            content_type: output.content_type,
            content_length: output.content_length,
        })
    }
}
