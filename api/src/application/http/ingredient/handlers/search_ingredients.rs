use axum::extract::{Query, State};
use ladle_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientsParams {
    /// Case-insensitive substring to match ingredient names against.
    /// Queries shorter than three characters return an empty list.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredient",
    summary = "Search ingredients",
    description = "Case-insensitive substring search over ingredient names, capped at ten results.",
    params(SearchIngredientsParams),
    responses(
        (status = 200, body = SearchIngredientsResponse, description = "Matching ingredients")
    )
)]
pub async fn search_ingredients(
    Query(params): Query<SearchIngredientsParams>,
    State(state): State<AppState>,
) -> Result<Response<SearchIngredientsResponse>, ApiError> {
    let query = params.search.unwrap_or_default();

    let data = state
        .service
        .search_ingredients(&query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchIngredientsResponse { data }))
}
