use axum::extract::{Query, State};
use ladle_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring match on the recipe name.
    pub search: Option<String>,
    /// Zero-based page index; an empty page signals the end of data.
    #[param(example = 0)]
    pub page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipe",
    summary = "List recipes",
    description = "Lists recipes newest first, filtered by category and name, one fixed-size page at a time.",
    params(GetRecipesParams),
    responses(
        (status = 200, body = GetRecipesResponse, description = "One page of recipes")
    )
)]
pub async fn get_recipes(
    Query(params): Query<GetRecipesParams>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let data = state
        .service
        .list_recipes(GetRecipesFilter {
            category: params.category,
            search: params.search,
            page: params.page,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data }))
}
