use axum::extract::State;
use ladle_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::CreateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a new recipe with its ordered line items and preparation steps.",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = CreateRecipeResponse, description = "Recipe created successfully"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(CreateRecipeInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
