//! Declarative recipe filters
//!
//! Stateless predicates over a recipe sequence, independent of match
//! scoring. Filters compose by sequential AND; the `All` filter is the
//! identity and returns the input unchanged.

use serde::{Deserialize, Serialize};

use crate::core::{DietaryTag, Difficulty, Recipe, RecipeCategory};

/// A single filter predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeFilter {
    /// Matches every recipe (identity filter)
    All,
    /// Meal category equality
    Category(RecipeCategory),
    /// Recipe carries the dietary tag
    Dietary(DietaryTag),
    /// Total time at most this many minutes
    MaxTotalMinutes(u32),
    /// Difficulty equality
    Difficulty(Difficulty),
    /// Free-text search: every whitespace-separated term must appear
    /// (case-insensitive substring) in name, category, difficulty or tags
    Search(String),
}

impl RecipeFilter {
    /// Whether a recipe passes this filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::Category(category) => recipe.category == *category,
            RecipeFilter::Dietary(tag) => recipe.has_tag(*tag),
            RecipeFilter::MaxTotalMinutes(max) => recipe.total_minutes <= *max,
            RecipeFilter::Difficulty(difficulty) => recipe.difficulty == *difficulty,
            RecipeFilter::Search(query) => search_matches(recipe, query),
        }
    }
}

fn search_haystack(recipe: &Recipe) -> String {
    let tags: Vec<&str> = recipe.dietary_tags.iter().map(|tag| tag.as_str()).collect();
    format!(
        "{} {:?} {:?} {}",
        recipe.name,
        recipe.category,
        recipe.difficulty,
        tags.join(" ")
    )
    .to_lowercase()
}

fn search_matches(recipe: &Recipe, query: &str) -> bool {
    let haystack = search_haystack(recipe);
    query
        .split_whitespace()
        .all(|term| haystack.contains(&term.to_lowercase()))
}

/// Apply filters to a recipe sequence by sequential AND
///
/// An empty filter list (or `All` alone) returns the input unchanged:
/// same elements, same order.
pub fn apply(recipes: Vec<Recipe>, filters: &[RecipeFilter]) -> Vec<Recipe> {
    if filters.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| filters.iter().all(|f| f.matches(recipe)))
        .collect()
}
