use axum::extract::{Path, State};
use ladle_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::UpdateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::UpdateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Replaces the recipe's editable fields, line items and preparation steps.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = UpdateRecipeResponse, description = "Recipe updated successfully"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(recipe_id, UpdateRecipeInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
