use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{NutritionSummary, NutritionTotals},
    recipe::entities::{Recipe, RecipeIngredient},
};

/// Denominator the ingredient nutrient fields are defined against.
/// Quantities are interpreted per this basis regardless of the line item's
/// unit label; entering a quantity in a non-commensurate unit is a data
/// entry error, not something this function can detect.
const REFERENCE_BASIS: f64 = 100.0;

/// Sums the nutrient contributions of every line item, scaling each
/// ingredient's per-100 profile by `quantity / 100`.
///
/// An empty list yields all-zero totals. A line item whose ingredient
/// snapshot is unresolved fails the whole computation; missing nutrient
/// data is never silently treated as zero.
pub fn compute_totals(items: &[RecipeIngredient]) -> Result<NutritionTotals, CoreError> {
    let mut totals = NutritionTotals::default();

    for item in items {
        let ingredient = item.ingredient.as_ref().ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "line item {} references unresolved ingredient {}",
                item.id, item.ingredient_id
            ))
        })?;

        let factor = item.quantity / REFERENCE_BASIS;

        totals.calories += ingredient.calories * factor;
        totals.proteins += ingredient.proteins * factor;
        totals.carbohydrates += ingredient.carbohydrates * factor;
        totals.fats += ingredient.fats * factor;
        totals.fiber += ingredient.fiber * factor;
        totals.sodium += ingredient.sodium * factor;
    }

    Ok(totals)
}

/// Divides every field by `servings`. Rejects `servings < 1` instead of
/// falling back to a default: boundary validation guarantees persisted
/// recipes carry at least one serving, so this branch only catches
/// programmatic misuse.
pub fn per_serving(totals: &NutritionTotals, servings: i32) -> Result<NutritionTotals, CoreError> {
    if servings < 1 {
        return Err(CoreError::InvalidInput(format!(
            "servings must be at least 1, got {servings}"
        )));
    }

    let servings = f64::from(servings);

    Ok(NutritionTotals {
        calories: totals.calories / servings,
        proteins: totals.proteins / servings,
        carbohydrates: totals.carbohydrates / servings,
        fats: totals.fats / servings,
        fiber: totals.fiber / servings,
        sodium: totals.sodium / servings,
    })
}

/// Total and per-serving values for a recipe, recomputed from scratch on
/// every call.
pub fn summarize(recipe: &Recipe) -> Result<NutritionSummary, CoreError> {
    let total = compute_totals(&recipe.ingredients)?;
    let per_serving = per_serving(&total, recipe.servings)?;

    Ok(NutritionSummary { total, per_serving })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ingredient::entities::Ingredient,
        recipe::entities::{Recipe, RecipeConfig},
        recipe::value_objects::RecipeIngredientInput,
    };
    use uuid::Uuid;

    fn ingredient(calories: f64) -> Ingredient {
        ingredient_with(calories, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    fn ingredient_with(
        calories: f64,
        proteins: f64,
        carbohydrates: f64,
        fats: f64,
        fiber: f64,
        sodium: f64,
    ) -> Ingredient {
        let now = chrono::Utc::now();
        Ingredient {
            id: Uuid::new_v4(),
            name: "test".to_string(),
            nutritional_table: None,
            calories,
            proteins,
            carbohydrates,
            fats,
            fiber,
            sodium,
            created_at: now,
            updated_at: now,
        }
    }

    fn line_item(quantity: f64, ingredient: Option<Ingredient>) -> RecipeIngredient {
        RecipeIngredient {
            id: Uuid::new_v4(),
            ingredient_id: ingredient
                .as_ref()
                .map(|i| i.id)
                .unwrap_or_else(Uuid::new_v4),
            quantity,
            unit: "g".to_string(),
            gross_weight: None,
            net_weight: None,
            ingredient,
        }
    }

    fn assert_totals_eq(a: &NutritionTotals, b: &NutritionTotals) {
        for ((label, left, _), (_, right, _)) in a.entries().iter().zip(b.entries().iter()) {
            assert!(
                (left - right).abs() < 1e-9,
                "{label}: {left} != {right}"
            );
        }
    }

    #[test]
    fn empty_line_items_yield_zero_totals() {
        let totals = compute_totals(&[]).unwrap();
        assert_eq!(totals, NutritionTotals::default());
    }

    #[test]
    fn single_item_scales_linearly_with_quantity() {
        let item = line_item(250.0, Some(ingredient_with(80.0, 4.0, 10.0, 2.0, 1.5, 30.0)));
        let totals = compute_totals(std::slice::from_ref(&item)).unwrap();

        assert!((totals.calories - 200.0).abs() < 1e-9);
        assert!((totals.proteins - 10.0).abs() < 1e-9);
        assert!((totals.carbohydrates - 25.0).abs() < 1e-9);
        assert!((totals.fats - 5.0).abs() < 1e-9);
        assert!((totals.fiber - 3.75).abs() < 1e-9);
        assert!((totals.sodium - 75.0).abs() < 1e-9);
    }

    #[test]
    fn totals_are_order_independent() {
        let items = vec![
            line_item(120.0, Some(ingredient(55.0))),
            line_item(30.0, Some(ingredient(700.0))),
            line_item(500.0, Some(ingredient(12.5))),
        ];
        let reversed: Vec<_> = items.iter().rev().cloned().collect();
        let rotated: Vec<_> = items[1..]
            .iter()
            .chain(items[..1].iter())
            .cloned()
            .collect();

        let base = compute_totals(&items).unwrap();
        assert_totals_eq(&base, &compute_totals(&reversed).unwrap());
        assert_totals_eq(&base, &compute_totals(&rotated).unwrap());
    }

    #[test]
    fn totals_are_additive_over_concatenation() {
        let a = vec![
            line_item(100.0, Some(ingredient(120.0))),
            line_item(40.0, Some(ingredient(95.0))),
        ];
        let b = vec![line_item(75.0, Some(ingredient(310.0)))];
        let combined: Vec<_> = a.iter().chain(b.iter()).cloned().collect();

        let sum_a = compute_totals(&a).unwrap();
        let sum_b = compute_totals(&b).unwrap();
        let sum_ab = compute_totals(&combined).unwrap();

        assert!((sum_ab.calories - (sum_a.calories + sum_b.calories)).abs() < 1e-9);
    }

    #[test]
    fn per_serving_divides_every_field() {
        let totals = NutritionTotals {
            calories: 129.0,
            proteins: 9.0,
            carbohydrates: 24.0,
            fats: 3.0,
            fiber: 6.0,
            sodium: 15.0,
        };

        let per = per_serving(&totals, 3).unwrap();
        assert!((per.calories - 43.0).abs() < 1e-9);
        assert!((per.proteins - 3.0).abs() < 1e-9);
        assert!((per.carbohydrates - 8.0).abs() < 1e-9);
        assert!((per.fats - 1.0).abs() < 1e-9);
        assert!((per.fiber - 2.0).abs() < 1e-9);
        assert!((per.sodium - 5.0).abs() < 1e-9);
    }

    #[test]
    fn per_serving_rejects_non_positive_servings() {
        let totals = NutritionTotals::default();

        for servings in [0, -1, -100] {
            let err = per_serving(&totals, servings).unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)));
        }
    }

    #[test]
    fn quinoa_and_tomato_scenario() {
        // Quinoa: 120 kcal per 100g, 100g used -> 120 kcal.
        // Tomato: 18 kcal per 100g, 50g used -> 9 kcal.
        let quinoa = line_item(100.0, Some(ingredient(120.0)));
        let tomato = line_item(50.0, Some(ingredient(18.0)));

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
            ingredients: vec![
                RecipeIngredientInput {
                    ingredient_id: quinoa.ingredient_id,
                    quantity: 100.0,
                    unit: "g".to_string(),
                    gross_weight: None,
                    net_weight: None,
                },
                RecipeIngredientInput {
                    ingredient_id: tomato.ingredient_id,
                    quantity: 50.0,
                    unit: "g".to_string(),
                    gross_weight: None,
                    net_weight: None,
                },
            ],
            preparation_steps: vec!["Mix".to_string()],
        });
        recipe.ingredients = vec![quinoa, tomato];

        let summary = summarize(&recipe).unwrap();
        assert!((summary.total.calories - 129.0).abs() < 1e-9);
        assert!((summary.per_serving.calories - 64.5).abs() < 1e-9);
    }

    #[test]
    fn unresolved_ingredient_fails_instead_of_zeroing() {
        let items = vec![
            line_item(100.0, Some(ingredient(120.0))),
            line_item(50.0, None),
        ];

        let err = compute_totals(&items).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
