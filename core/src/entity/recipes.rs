use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit: String,
    #[sea_orm(column_type = "Double")]
    pub correction_factor: f64,
    #[sea_orm(column_type = "Double")]
    pub cooking_index: f64,
    pub servings: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub serving_size: Option<f64>,
    pub household_measure: Option<String>,
    pub preparation_type: Option<String>,
    pub difficulty_level: Option<String>,
    pub preparation_time: Option<i32>,
    pub validity_days: Option<i32>,
    pub monthly_production: Option<i32>,
    pub contains_gluten: bool,
    pub allergens: Json,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
