use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::ExportFile,
    recipe::{
        entities::Recipe,
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
};

/// Repository trait for recipe aggregates. Implementations persist the
/// recipe row together with its ordered line items and preparation steps
/// and return the aggregate rehydrated (ingredient snapshots resolved).
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn list(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Paged, human-readable document rendering of the recipe.
    fn export_recipe_document(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ExportFile, CoreError>> + Send;

    /// Single-sheet tabular rendering of the recipe.
    fn export_recipe_spreadsheet(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ExportFile, CoreError>> + Send;
}
