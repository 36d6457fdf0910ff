use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    export_recipe_pdf::{__path_export_recipe_pdf, export_recipe_pdf},
    export_recipe_spreadsheet::{__path_export_recipe_spreadsheet, export_recipe_spreadsheet},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    update_recipe::{__path_update_recipe, update_recipe},
    upload_recipe_image::{__path_upload_recipe_image, upload_recipe_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    get_recipes,
    get_recipe,
    update_recipe,
    delete_recipe,
    export_recipe_pdf,
    export_recipe_spreadsheet,
    upload_recipe_image
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(create_recipe).get(get_recipes),
        )
        .route(
            &format!("{}/recipes/images", state.args.server.root_path),
            post(upload_recipe_image),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/export/pdf",
                state.args.server.root_path
            ),
            get(export_recipe_pdf),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/export/spreadsheet",
                state.args.server.root_path
            ),
            get(export_recipe_spreadsheet),
        )
}
