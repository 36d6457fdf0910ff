use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::NutritionTotals,
    recipe::entities::Recipe,
};

/// Renders the recipe as a single-sheet workbook: metadata rows, a blank
/// separator, the ingredient table, another separator, then the nutrition
/// totals as label/value rows.
pub fn render_recipe_spreadsheet(
    recipe: &Recipe,
    totals: &NutritionTotals,
) -> Result<Vec<u8>, CoreError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Recipe").map_err(xlsx_error)?;

    let mut row: u32 = 0;

    worksheet.write(row, 0, "Recipe Name").map_err(xlsx_error)?;
    worksheet
        .write(row, 1, recipe.name.as_str())
        .map_err(xlsx_error)?;
    row += 1;

    worksheet.write(row, 0, "Category").map_err(xlsx_error)?;
    worksheet
        .write(row, 1, recipe.category.as_str())
        .map_err(xlsx_error)?;
    row += 1;

    worksheet.write(row, 0, "Unit").map_err(xlsx_error)?;
    worksheet
        .write(row, 1, recipe.unit.as_str())
        .map_err(xlsx_error)?;
    row += 2;

    worksheet.write(row, 0, "Ingredients").map_err(xlsx_error)?;
    row += 1;
    worksheet.write(row, 0, "Quantity").map_err(xlsx_error)?;
    worksheet.write(row, 1, "Unit").map_err(xlsx_error)?;
    worksheet.write(row, 2, "Ingredient").map_err(xlsx_error)?;
    row += 1;

    for item in &recipe.ingredients {
        let name = item
            .ingredient
            .as_ref()
            .map(|i| i.name.as_str())
            .unwrap_or("unknown ingredient");
        worksheet.write(row, 0, item.quantity).map_err(xlsx_error)?;
        worksheet
            .write(row, 1, item.unit.as_str())
            .map_err(xlsx_error)?;
        worksheet.write(row, 2, name).map_err(xlsx_error)?;
        row += 1;
    }
    row += 1;

    worksheet
        .write(row, 0, "Nutritional Values")
        .map_err(xlsx_error)?;
    row += 1;
    for (label, value, _) in totals.entries() {
        worksheet.write(row, 0, label).map_err(xlsx_error)?;
        worksheet.write(row, 1, value).map_err(xlsx_error)?;
        row += 1;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn xlsx_error(err: XlsxError) -> CoreError {
    tracing::error!("Failed to render recipe spreadsheet: {}", err);
    CoreError::InternalServerError
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ingredient::entities::Ingredient, recipe::entities::RecipeIngredient};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn renders_a_zip_backed_workbook() {
        let now = Utc::now();
        let ingredient = Ingredient {
            id: Uuid::new_v4(),
            name: "Tomato".to_string(),
            nutritional_table: None,
            calories: 18.0,
            proteins: 0.9,
            carbohydrates: 3.9,
            fats: 0.2,
            fiber: 1.2,
            sodium: 5.0,
            created_at: now,
            updated_at: now,
        };
        let mut recipe = crate::domain::recipe::entities::Recipe::new(
            crate::domain::recipe::entities::RecipeConfig {
                name: "Tomato soup".to_string(),
                category: "Soup".to_string(),
                unit: "l".to_string(),
                correction_factor: 1.0,
                cooking_index: 1.0,
                servings: 4,
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
                preparation_steps: vec!["Blend".to_string()],
            },
        );
        recipe.ingredients = vec![RecipeIngredient {
            id: Uuid::new_v4(),
            ingredient_id: ingredient.id,
            quantity: 400.0,
            unit: "g".to_string(),
            gross_weight: None,
            net_weight: None,
            ingredient: Some(ingredient),
        }];
        let totals = crate::domain::nutrition::compute_totals(&recipe.ingredients).unwrap();

        let bytes = render_recipe_spreadsheet(&recipe, &totals).unwrap();
        // XLSX is a zip container.
        assert!(bytes.starts_with(b"PK"));
    }
}
