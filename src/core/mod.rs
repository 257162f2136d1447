pub mod ingredient;
pub mod recipe;
pub mod report;

pub use ingredient::{Ingredient, IngredientCategory, IngredientUnit};
pub use recipe::{DietaryTag, Difficulty, Nutrition, Recipe, RecipeCategory};
pub use report::MatchReport;
