use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a completed image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadedImage {
    /// Publicly resolvable URL of the stored object.
    pub url: String,
    pub object_key: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
}
