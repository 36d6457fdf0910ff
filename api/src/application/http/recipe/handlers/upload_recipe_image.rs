use axum::extract::{Multipart, State};
use ladle_core::domain::storage::{
    entities::UploadedImage, ports::ImageService, value_objects::UploadImageInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadRecipeImageResponse {
    pub data: UploadedImage,
}

#[utoipa::path(
    post,
    path = "/recipes/images",
    tag = "recipe",
    summary = "Upload recipe image",
    description = "Accepts a multipart form with a `file` field and returns the public URL of the stored image.",
    responses(
        (status = 201, body = UploadRecipeImageResponse, description = "Image uploaded successfully"),
        (status = 400, description = "Missing or malformed file field"),
        (status = 503, description = "Object storage rejected the upload")
    )
)]
#[axum_macros::debug_handler]
pub async fn upload_recipe_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadRecipeImageResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read file field: {e}")))?;

        let uploaded = state
            .service
            .upload_image(UploadImageInput {
                filename,
                content_type,
                data,
            })
            .await
            .map_err(ApiError::from)?;

        return Ok(Response::Created(UploadRecipeImageResponse {
            data: uploaded,
        }));
    }

    Err(ApiError::BadRequest(
        "missing multipart field 'file'".to_string(),
    ))
}
