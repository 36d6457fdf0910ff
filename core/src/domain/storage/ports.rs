use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{entities::UploadedImage, value_objects::UploadImageInput},
};

/// Port for object storage operations (MinIO/S3), single configured bucket.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Publicly resolvable URL for an object key.
    fn public_url(&self, object_key: &str) -> String;
}

pub trait ImageService: Send + Sync {
    /// Stores a recipe image and returns its public URL. Upload failures
    /// surface as errors to the caller; they are not fatal to the rest of
    /// the form flow and are never retried here.
    fn upload_image(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<UploadedImage, CoreError>> + Send;
}
