pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipe_steps;
pub mod recipes;
