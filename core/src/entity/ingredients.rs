use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub nutritional_table: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub calories: f64,
    #[sea_orm(column_type = "Double")]
    pub proteins: f64,
    #[sea_orm(column_type = "Double")]
    pub carbohydrates: f64,
    #[sea_orm(column_type = "Double")]
    pub fats: f64,
    #[sea_orm(column_type = "Double")]
    pub fiber: f64,
    #[sea_orm(column_type = "Double")]
    pub sodium: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
