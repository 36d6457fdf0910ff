use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    export::{
        ExportFile, PDF_CONTENT_TYPE, SPREADSHEET_CONTENT_TYPE, export_filename,
        pdf::render_recipe_pdf, spreadsheet::render_recipe_spreadsheet,
    },
    ingredient::ports::IngredientRepository,
    nutrition,
    recipe::{
        entities::{Recipe, RecipeConfig},
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
    storage::ports::ObjectStoragePort,
};

impl<R, I, OS> RecipeService for Service<R, I, OS>
where
    R: RecipeRepository,
    I: IngredientRepository,
    OS: ObjectStoragePort,
{
    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<Recipe, CoreError> {
        let recipe = Recipe::new(RecipeConfig {
            name: input.name,
            category: input.category,
            unit: input.unit,
            correction_factor: input.correction_factor,
            cooking_index: input.cooking_index,
            servings: input.servings,
            serving_size: input.serving_size,
            household_measure: input.household_measure,
            preparation_type: input.preparation_type,
            difficulty_level: input.difficulty_level,
            preparation_time: input.preparation_time,
            validity_days: input.validity_days,
            monthly_production: input.monthly_production,
            contains_gluten: input.contains_gluten,
            allergens: input.allergens,
            notes: input.notes,
            image_url: input.image_url,
            ingredients: input.ingredients,
            preparation_steps: input.preparation_steps,
        });

        let created = self.recipe_repository.create_recipe(recipe).await?;

        tracing::info!(recipe_id = %created.id, "Recipe created");

        Ok(created)
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_recipes(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.list(filter).await
    }

    async fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        recipe.update(input);

        let updated = self.recipe_repository.update_recipe(recipe).await?;

        tracing::info!(recipe_id = %recipe_id, "Recipe updated");

        Ok(updated)
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        // Verify the recipe exists so a miss surfaces as 404, not a no-op.
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.recipe_repository.delete_recipe(recipe_id).await?;

        tracing::info!(recipe_id = %recipe_id, "Recipe deleted");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn export_recipe_document(&self, recipe_id: Uuid) -> Result<ExportFile, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let totals = nutrition::compute_totals(&recipe.ingredients)?;
        let bytes = render_recipe_pdf(&recipe, &totals)?;

        Ok(ExportFile {
            filename: export_filename(&recipe.name, "pdf"),
            content_type: PDF_CONTENT_TYPE,
            bytes,
        })
    }

    #[instrument(skip(self))]
    async fn export_recipe_spreadsheet(&self, recipe_id: Uuid) -> Result<ExportFile, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let totals = nutrition::compute_totals(&recipe.ingredients)?;
        let bytes = render_recipe_spreadsheet(&recipe, &totals)?;

        Ok(ExportFile {
            filename: export_filename(&recipe.name, "xlsx"),
            content_type: SPREADSHEET_CONTENT_TYPE,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ingredient::{
            entities::Ingredient,
            ports::{IngredientService, MockIngredientRepository},
        },
        recipe::{entities::RecipeIngredient, ports::MockRecipeRepository},
        storage::ports::MockObjectStoragePort,
    };
    use chrono::Utc;

    type TestService =
        Service<MockRecipeRepository, MockIngredientRepository, MockObjectStoragePort>;

    fn service(
        recipes: MockRecipeRepository,
        ingredients: MockIngredientRepository,
    ) -> TestService {
        Service::new(recipes, ingredients, MockObjectStoragePort::new())
    }

    fn sample_recipe() -> Recipe {
        let now = Utc::now();
        let ingredient = Ingredient {
            id: Uuid::new_v4(),
            name: "Quinoa".to_string(),
            nutritional_table: None,
            calories: 120.0,
            proteins: 4.4,
            carbohydrates: 21.3,
            fats: 1.9,
            fiber: 2.8,
            sodium: 7.0,
            created_at: now,
            updated_at: now,
        };

        let mut recipe = Recipe::new(RecipeConfig {
            name: "Quinoa salad".to_string(),
            category: "Salad".to_string(),
            unit: "kg".to_string(),
            correction_factor: 1.0,
            cooking_index: 1.0,
            servings: 2,
            serving_size: None,
            household_measure: None,
            preparation_type: None,
            difficulty_level: None,
            preparation_time: None,
            validity_days: None,
            monthly_production: None,
            contains_gluten: false,
            allergens: vec![],
            notes: None,
            image_url: None,
            ingredients: vec![],
            preparation_steps: vec!["Mix".to_string()],
        });
        recipe.ingredients = vec![RecipeIngredient {
            id: Uuid::new_v4(),
            ingredient_id: ingredient.id,
            quantity: 100.0,
            unit: "g".to_string(),
            gross_weight: None,
            net_weight: None,
            ingredient: Some(ingredient),
        }];
        recipe
    }

    #[tokio::test]
    async fn get_recipe_misses_surface_as_not_found() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(recipes, MockIngredientRepository::new());

        let err = service.get_recipe(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn delete_checks_existence_before_deleting() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        recipes.expect_delete_recipe().times(0);

        let service = service(recipes, MockIngredientRepository::new());

        let err = service.delete_recipe(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn export_of_missing_recipe_is_an_explicit_error() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(recipes, MockIngredientRepository::new());

        let err = service
            .export_recipe_document(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn document_export_is_named_after_the_recipe() {
        let recipe = sample_recipe();
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });

        let service = service(recipes, MockIngredientRepository::new());

        let file = service
            .export_recipe_document(Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(file.filename, "Quinoa salad.pdf");
        assert_eq!(file.content_type, PDF_CONTENT_TYPE);
        assert!(!file.bytes.is_empty());
    }

    #[tokio::test]
    async fn spreadsheet_export_is_named_after_the_recipe() {
        let recipe = sample_recipe();
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });

        let service = service(recipes, MockIngredientRepository::new());

        let file = service
            .export_recipe_spreadsheet(Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(file.filename, "Quinoa salad.xlsx");
        assert_eq!(file.content_type, SPREADSHEET_CONTENT_TYPE);
        assert!(!file.bytes.is_empty());
    }

    #[tokio::test]
    async fn export_with_dangling_line_item_fails_aggregation() {
        let mut recipe = sample_recipe();
        recipe.ingredients[0].ingredient = None;

        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });

        let service = service(recipes, MockIngredientRepository::new());

        let err = service
            .export_recipe_document(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn short_ingredient_queries_never_reach_the_store() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients.expect_search_by_name().times(0);

        let service = service(MockRecipeRepository::new(), ingredients);

        let results = service.search_ingredients("qu").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn ingredient_queries_are_trimmed_before_the_length_gate() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients.expect_search_by_name().times(0);

        let service = service(MockRecipeRepository::new(), ingredients);

        let results = service.search_ingredients("  qu  ").await.unwrap();
        assert!(results.is_empty());
    }
}
