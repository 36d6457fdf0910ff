use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub quantity: f64,
    pub unit: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub gross_weight: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub net_weight: Option<f64>,
    /// Zero-based position within the recipe; pins user-defined order.
    pub position: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
