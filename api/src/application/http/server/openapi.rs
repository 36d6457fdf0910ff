use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ladle API",
        description = "Recipe and nutrition management API"
    ),
    tags(
        (name = "recipe", description = "Recipe management and exports"),
        (name = "ingredient", description = "Ingredient lookup"),
        (name = "health", description = "Service health")
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(RecipeApiDoc::openapi());
        doc.merge(IngredientApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
