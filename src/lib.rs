//! # Recipe Match Engine
//!
//! Ingredient-recipe matching and ranking engine with:
//! - Heuristic ingredient name matching (word-boundary + substring rules)
//! - Coverage / blended / boosted match scoring
//! - Missing-ingredient resolution
//! - Recipe-to-recipe similarity search
//! - Multi-key recipe index (id, category, difficulty)
//! - Tiered ranking and declarative filtering
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_match_engine::{Ingredient, Recipe, RecipeEngine};
//!
//! let mut pancakes = Recipe::new("r-1", "Pancakes");
//! pancakes.ingredients = vec![
//!     Ingredient::new("i-1", "Flour"),
//!     Ingredient::new("i-2", "Milk"),
//!     Ingredient::new("i-3", "Eggs"),
//! ];
//!
//! let mut engine = RecipeEngine::new();
//! engine.load(vec![pancakes]);
//!
//! let pantry = vec![Ingredient::new("p-1", "milk"), Ingredient::new("p-2", "flour")];
//! let report = engine.rank_pantry(&pantry);
//! let top = report.top().unwrap();
//! println!("{} - {:.2} ({} missing)", top.recipe.name, top.score, top.missing.len());
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod filter;
pub mod index;
pub mod matcher;
pub mod ranking;
pub mod scoring;
pub mod similarity;

// Re-export primary types
pub use crate::core::{
    DietaryTag, Difficulty, Ingredient, IngredientCategory, IngredientUnit, MatchReport,
    Nutrition, Recipe, RecipeCategory,
};
pub use engine::{EngineOptions, RecipeEngine};
pub use error::{EngineError, Result};
pub use filter::RecipeFilter;
pub use index::{IndexStats, RecipeIndex};
pub use ranking::{MatchTier, RankConfig, ScoredRecipe, ScoringMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
