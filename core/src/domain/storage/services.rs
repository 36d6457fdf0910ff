use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_random_string, services::Service},
    ingredient::ports::IngredientRepository,
    recipe::ports::RecipeRepository,
    storage::{
        entities::UploadedImage,
        ports::{ImageService, ObjectStoragePort},
        value_objects::UploadImageInput,
    },
};

const MAX_IMAGE_BYTES: usize = 10_485_760; // 10 MiB

impl<R, I, OS> ImageService for Service<R, I, OS>
where
    R: RecipeRepository,
    I: IngredientRepository,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, input), fields(filename = %input.filename))]
    async fn upload_image(&self, input: UploadImageInput) -> Result<UploadedImage, CoreError> {
        if input.data.is_empty() {
            return Err(CoreError::InvalidInput("image file is empty".to_string()));
        }
        if input.data.len() > MAX_IMAGE_BYTES {
            return Err(CoreError::InvalidInput(format!(
                "image exceeds the {MAX_IMAGE_BYTES} byte limit"
            )));
        }
        if !input.content_type.starts_with("image/") {
            return Err(CoreError::InvalidInput(format!(
                "unsupported content type: {}",
                input.content_type
            )));
        }

        let mut hasher = Sha256::new();
        hasher.update(&input.data);
        let checksum_sha256 = format!("{:x}", hasher.finalize());

        let extension = input
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_else(|| "bin".to_string());
        let object_key = format!("recipe-images/{}.{}", generate_random_string(16), extension);

        let size_bytes = input.data.len() as i64;
        self.object_storage
            .put_object(&object_key, input.data, &input.content_type)
            .await?;

        let url = self.object_storage.public_url(&object_key);

        tracing::info!(
            object_key = %object_key,
            size = size_bytes,
            "Recipe image uploaded"
        );

        Ok(UploadedImage {
            url,
            object_key,
            size_bytes,
            checksum_sha256,
        })
    }
}
