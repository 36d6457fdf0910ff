pub mod create_recipe;
pub mod delete_recipe;
pub mod export_recipe_pdf;
pub mod export_recipe_spreadsheet;
pub mod get_recipe;
pub mod get_recipes;
pub mod update_recipe;
pub mod upload_recipe_image;
