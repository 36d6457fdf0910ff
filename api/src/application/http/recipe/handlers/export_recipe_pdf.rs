use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use ladle_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/export/pdf",
    tag = "recipe",
    summary = "Export recipe as PDF",
    description = "Renders the recipe as a paginated document named after the recipe.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, description = "PDF document"),
        (status = 404, description = "Recipe not found"),
        (status = 422, description = "A line item references unresolved ingredient data")
    )
)]
pub async fn export_recipe_pdf(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<axum::response::Response, ApiError> {
    let file = state
        .service
        .export_recipe_document(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let headers = [
        (header::CONTENT_TYPE, file.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ),
    ];

    Ok((headers, file.bytes).into_response())
}
