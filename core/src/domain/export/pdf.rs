use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::NutritionTotals,
    recipe::entities::Recipe,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const INDENT_MM: f32 = 30.0;
const LINE_HEIGHT_MM: f32 = 7.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

/// Column width (in characters) long preparation steps are wrapped to.
const WRAP_COLUMNS: usize = 90;

/// Renders the recipe as a paginated A4 document: title, ingredient lines,
/// numbered preparation steps, then one labeled line per nutrient total.
pub fn render_recipe_pdf(recipe: &Recipe, totals: &NutritionTotals) -> Result<Vec<u8>, CoreError> {
    let (doc, page, layer) = PdfDocument::new(
        recipe.name.clone(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        font,
        y: MARGIN_MM,
    };

    cursor.line(&recipe.name, TITLE_SIZE, MARGIN_MM);
    cursor.space(LINE_HEIGHT_MM);

    cursor.line("Ingredients:", HEADING_SIZE, MARGIN_MM);
    for item in &recipe.ingredients {
        let name = item
            .ingredient
            .as_ref()
            .map(|i| i.name.as_str())
            .unwrap_or("unknown ingredient");
        let text = format!("- {}{} {}", format_quantity(item.quantity), item.unit, name);
        cursor.line(&text, BODY_SIZE, INDENT_MM);
    }
    cursor.space(LINE_HEIGHT_MM);

    cursor.line("Preparation:", HEADING_SIZE, MARGIN_MM);
    for (index, step) in recipe.preparation_steps.iter().enumerate() {
        let numbered = format!("{}. {}", index + 1, step);
        for line in wrap_text(&numbered, WRAP_COLUMNS) {
            cursor.line(&line, BODY_SIZE, INDENT_MM);
        }
    }
    cursor.space(LINE_HEIGHT_MM);

    cursor.line("Nutritional values:", HEADING_SIZE, MARGIN_MM);
    for (label, value, unit) in totals.entries() {
        cursor.line(&format!("{label}: {value:.2} {unit}"), BODY_SIZE, INDENT_MM);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    /// Distance from the top edge, in millimeters.
    y: f32,
}

impl Cursor<'_> {
    fn line(&mut self, text: &str, size: f32, x: f32) {
        if self.y > PAGE_HEIGHT_MM - MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = MARGIN_MM;
        }

        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT_MM - self.y), &self.font);
        self.y += LINE_HEIGHT_MM;
    }

    fn space(&mut self, mm: f32) {
        self.y += mm;
    }
}

fn pdf_error(err: printpdf::Error) -> CoreError {
    tracing::error!("Failed to render recipe document: {}", err);
    CoreError::InternalServerError
}

/// Prints whole quantities without a decimal point, matching how they were
/// entered ("100g", not "100.0g").
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        format!("{quantity}")
    }
}

/// Greedy word wrap to `width` characters. Words longer than the width are
/// hard-split so they can never push a line past the column limit.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let (head, tail) = word.split_at(split_at);
            lines.push(head.to_string());
            word = tail;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ingredient::entities::Ingredient, recipe::entities::RecipeIngredient};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("mix well", 20), vec!["mix well"]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let lines = wrap_text("stir the sauce until it thickens", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "stir the sauce until it thickens");
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_text("aaaaaaaaaaaaaaaaaaaa", 8);
        assert_eq!(lines, vec!["aaaaaaaa", "aaaaaaaa", "aaaa"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn quantities_print_like_they_were_entered() {
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(0.5), "0.5");
    }

    #[test]
    fn renders_a_pdf_byte_stream() {
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
        let mut recipe = crate::domain::recipe::entities::Recipe::new(
            crate::domain::recipe::entities::RecipeConfig {
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
                preparation_steps: vec![
                    "Rinse the quinoa under cold water".to_string(),
                    "Simmer for fifteen minutes and let it rest before fluffing with a fork, \
                     then season to taste with olive oil, lemon juice, salt and pepper"
                        .to_string(),
                ],
            },
        );
        recipe.ingredients = vec![RecipeIngredient {
            id: Uuid::new_v4(),
            ingredient_id: ingredient.id,
            quantity: 100.0,
            unit: "g".to_string(),
            gross_weight: None,
            net_weight: None,
            ingredient: Some(ingredient),
        }];
        let totals = crate::domain::nutrition::compute_totals(&recipe.ingredients).unwrap();

        let bytes = render_recipe_pdf(&recipe, &totals).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
