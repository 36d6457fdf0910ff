pub mod entities;
pub mod services;

pub use entities::{NutritionSummary, NutritionTotals};
pub use services::{compute_totals, per_serving, summarize};
