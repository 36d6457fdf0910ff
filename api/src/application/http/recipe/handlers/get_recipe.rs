use axum::extract::{Path, State};
use ladle_core::domain::{
    nutrition::{self, NutritionSummary},
    recipe::{entities::Recipe, ports::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeResponse {
    pub data: Recipe,
    /// Derived totals and per-serving values, recomputed on every read.
    pub nutrition: NutritionSummary,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Returns the recipe aggregate together with its computed nutrition summary.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse, description = "The recipe"),
        (status = 404, description = "Recipe not found"),
        (status = 422, description = "A line item references unresolved ingredient data")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let nutrition = nutrition::summarize(&recipe).map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse {
        data: recipe,
        nutrition,
    }))
}
