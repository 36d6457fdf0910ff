use std::collections::HashMap;

use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        ingredient::entities::Ingredient,
        recipe::{
            entities::Recipe,
            ports::RecipeRepository,
            value_objects::GetRecipesFilter,
        },
    },
    entity::{
        ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
        recipe_ingredients::{
            ActiveModel as LineItemActiveModel, Column as LineItemColumn, Entity as LineItemEntity,
        },
        recipe_steps::{
            ActiveModel as StepActiveModel, Column as StepColumn, Entity as StepEntity,
        },
        recipes::{ActiveModel, Column, Entity},
    },
    infrastructure::recipe::mappers::{map_line_item, map_steps},
};

/// Fixed page size for incremental listing; an empty page signals the end
/// of data.
const RECIPES_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_ingredient_snapshots(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredient snapshots: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        Ok(models
            .iter()
            .map(|m| (m.id, Ingredient::from(m)))
            .collect())
    }

    async fn insert_children(&self, recipe: &Recipe) -> Result<(), CoreError> {
        let line_items = line_item_active_models(recipe);
        if !line_items.is_empty() {
            LineItemEntity::insert_many(line_items)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to insert recipe line items: {}", e);
                    CoreError::StoreUnavailable(e.to_string())
                })?;
        }

        let steps = step_active_models(recipe);
        if !steps.is_empty() {
            StepEntity::insert_many(steps).exec(&self.db).await.map_err(|e| {
                error!("Failed to insert recipe steps: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;
        }

        Ok(())
    }

    async fn delete_children(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        LineItemEntity::delete_many()
            .filter(LineItemColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe line items: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        StepEntity::delete_many()
            .filter(StepColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe steps: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        Ok(())
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        Entity::insert(recipe_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        self.insert_children(&recipe).await?;

        self.get_by_id(recipe.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let line_items = LineItemEntity::find()
            .filter(LineItemColumn::RecipeId.eq(recipe_id))
            .order_by_asc(LineItemColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe line items: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        let steps = StepEntity::find()
            .filter(StepColumn::RecipeId.eq(recipe_id))
            .order_by_asc(StepColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe steps: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        let snapshots = self
            .load_ingredient_snapshots(line_items.iter().map(|li| li.ingredient_id).collect())
            .await?;

        let mut recipe = Recipe::from(&model);
        recipe.ingredients = line_items
            .iter()
            .map(|li| map_line_item(li, snapshots.get(&li.ingredient_id).cloned()))
            .collect();
        recipe.preparation_steps = map_steps(steps);

        Ok(Some(recipe))
    }

    async fn list(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut condition = Condition::all();

        if let Some(ref category) = filter.category {
            condition = condition.add(Column::Category.eq(category.clone()));
        }

        if let Some(ref search) = filter.search {
            condition = condition.add(Expr::col(Column::Name).ilike(format!("%{search}%")));
        }

        let page = filter.page.unwrap_or(0) as u64;

        let models = Entity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
            .limit(RECIPES_PAGE_SIZE)
            .offset(page * RECIPES_PAGE_SIZE)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let line_items = LineItemEntity::find()
            .filter(LineItemColumn::RecipeId.is_in(recipe_ids.clone()))
            .order_by_asc(LineItemColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe line items: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        let steps = StepEntity::find()
            .filter(StepColumn::RecipeId.is_in(recipe_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe steps: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        let snapshots = self
            .load_ingredient_snapshots(line_items.iter().map(|li| li.ingredient_id).collect())
            .await?;

        let mut items_by_recipe: HashMap<Uuid, Vec<_>> = HashMap::new();
        for item in line_items {
            items_by_recipe.entry(item.recipe_id).or_default().push(item);
        }

        let mut steps_by_recipe: HashMap<Uuid, Vec<_>> = HashMap::new();
        for step in steps {
            steps_by_recipe.entry(step.recipe_id).or_default().push(step);
        }

        let recipes = models
            .iter()
            .map(|model| {
                let mut recipe = Recipe::from(model);
                recipe.ingredients = items_by_recipe
                    .remove(&recipe.id)
                    .unwrap_or_default()
                    .iter()
                    .map(|li| map_line_item(li, snapshots.get(&li.ingredient_id).cloned()))
                    .collect();
                recipe.preparation_steps =
                    map_steps(steps_by_recipe.remove(&recipe.id).unwrap_or_default());
                recipe
            })
            .collect();

        Ok(recipes)
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        Entity::update(recipe_active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        // Replace line items and steps wholesale so user-defined order is
        // written out exactly as submitted.
        self.delete_children(recipe.id).await?;
        self.insert_children(&recipe).await?;

        self.get_by_id(recipe.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        self.delete_children(recipe_id).await?;

        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        Ok(())
    }
}

fn recipe_active_model(recipe: &Recipe) -> ActiveModel {
    ActiveModel {
        id: Set(recipe.id),
        name: Set(recipe.name.clone()),
        category: Set(recipe.category.clone()),
        unit: Set(recipe.unit.clone()),
        correction_factor: Set(recipe.correction_factor),
        cooking_index: Set(recipe.cooking_index),
        servings: Set(recipe.servings),
        serving_size: Set(recipe.serving_size),
        household_measure: Set(recipe.household_measure.clone()),
        preparation_type: Set(recipe.preparation_type.clone()),
        difficulty_level: Set(recipe.difficulty_level.map(|d| d.as_str().to_string())),
        preparation_time: Set(recipe.preparation_time),
        validity_days: Set(recipe.validity_days),
        monthly_production: Set(recipe.monthly_production),
        contains_gluten: Set(recipe.contains_gluten),
        allergens: Set(serde_json::json!(recipe.allergens)),
        notes: Set(recipe.notes.clone()),
        image_url: Set(recipe.image_url.clone()),
        created_at: Set(recipe.created_at.fixed_offset()),
        updated_at: Set(recipe.updated_at.fixed_offset()),
    }
}

fn line_item_active_models(recipe: &Recipe) -> Vec<LineItemActiveModel> {
    recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let (now, _) = generate_timestamp();
            LineItemActiveModel {
                id: Set(item.id),
                recipe_id: Set(recipe.id),
                ingredient_id: Set(item.ingredient_id),
                quantity: Set(item.quantity),
                unit: Set(item.unit.clone()),
                gross_weight: Set(item.gross_weight),
                net_weight: Set(item.net_weight),
                position: Set(position as i32),
                created_at: Set(now.fixed_offset()),
                updated_at: Set(now.fixed_offset()),
            }
        })
        .collect()
}

fn step_active_models(recipe: &Recipe) -> Vec<StepActiveModel> {
    recipe
        .preparation_steps
        .iter()
        .enumerate()
        .map(|(position, instruction)| {
            let (now, timestamp) = generate_timestamp();
            StepActiveModel {
                id: Set(Uuid::new_v7(timestamp)),
                recipe_id: Set(recipe.id),
                position: Set(position as i32),
                instruction: Set(instruction.clone()),
                created_at: Set(now.fixed_offset()),
                updated_at: Set(now.fixed_offset()),
            }
        })
        .collect()
}
