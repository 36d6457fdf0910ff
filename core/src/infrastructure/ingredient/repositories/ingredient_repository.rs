use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository},
    },
    entity::ingredients::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn search_by_name(&self, query: &str, limit: u64) -> Result<Vec<Ingredient>, CoreError> {
        let models = Entity::find()
            .filter(Expr::col(Column::Name).ilike(format!("%{query}%")))
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search ingredients: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        Ok(models.iter().map(Ingredient::from).collect())
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(ingredient_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::StoreUnavailable(e.to_string())
            })?;

        Ok(model.map(Ingredient::from))
    }
}
