use crate::{domain::ingredient::entities::Ingredient, entity::ingredients};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            nutritional_table: model.nutritional_table.clone(),
            calories: model.calories,
            proteins: model.proteins,
            carbohydrates: model.carbohydrates,
            fats: model.fats,
            fiber: model.fiber,
            sodium: model.sodium,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}
