//! Match scoring between a recipe and the user's available ingredients
//!
//! Three scorers with distinct, non-interchangeable semantics:
//!
//! - [`coverage`]: fraction of the recipe's ingredients the user can
//!   satisfy. The shopping-list refresh path ranks with this alone.
//! - [`blended`]: coverage blended with utilization (how much of the
//!   user's list the recipe consumes). The general pantry ranking path.
//! - [`boosted`]: presentation-boosted coverage over raw free-text
//!   ingredient names, used only when generating suggestions. Perfect
//!   matches stay exactly 1.0; boosted partial matches are capped below it.

use crate::core::{Ingredient, Recipe};
use crate::matcher::names_match;

/// Weight of coverage in the blended score
const COVERAGE_WEIGHT: f64 = 0.7;
/// Weight of utilization in the blended score
const UTILIZATION_WEIGHT: f64 = 0.3;
/// Presentation boost applied to partial-coverage suggestions
const BOOST_FACTOR: f64 = 1.2;
/// Boosted partial matches never reach a perfect score
const BOOST_CEILING: f64 = 0.99;

#[inline]
fn coverage_over_names(recipe: &Recipe, available_names: &[&str]) -> f64 {
    if recipe.ingredients.is_empty() {
        return 0.0;
    }

    let matched = recipe
        .ingredients
        .iter()
        .filter(|needed| {
            available_names
                .iter()
                .any(|have| names_match(have, &needed.name))
        })
        .count();

    matched as f64 / recipe.ingredients.len() as f64
}

/// Fraction of the recipe's ingredients satisfied by the available set
///
/// Empty recipe ingredient list scores 0.0, never NaN.
pub fn coverage(recipe: &Recipe, available: &[Ingredient]) -> f64 {
    let names: Vec<&str> = available.iter().map(|i| i.name.as_str()).collect();
    coverage_over_names(recipe, &names)
}

/// Fraction of the user's available items that this recipe uses
pub fn utilization(recipe: &Recipe, available: &[Ingredient]) -> f64 {
    if available.is_empty() {
        return 0.0;
    }

    let used = available
        .iter()
        .filter(|have| {
            recipe
                .ingredients
                .iter()
                .any(|needed| names_match(&have.name, &needed.name))
        })
        .count();

    used as f64 / available.len() as f64
}

/// Blended match score: `0.7 * coverage + 0.3 * utilization`
pub fn blended(recipe: &Recipe, available: &[Ingredient]) -> f64 {
    COVERAGE_WEIGHT * coverage(recipe, available)
        + UTILIZATION_WEIGHT * utilization(recipe, available)
}

/// Boosted suggestion score over raw free-text ingredient names
///
/// A full-coverage match is pinned to exactly 1.0; anything less is
/// boosted for presentation but capped below 1.0.
pub fn boosted(recipe: &Recipe, available_names: &[&str]) -> f64 {
    let raw = coverage_over_names(recipe, available_names);
    if raw >= 1.0 {
        1.0
    } else {
        (raw * BOOST_FACTOR).min(BOOST_CEILING)
    }
}

/// Recipe ingredients not covered by any available item, in recipe order
///
/// Pure function over its inputs, O(recipe × available).
pub fn missing_ingredients(recipe: &Recipe, available: &[Ingredient]) -> Vec<Ingredient> {
    recipe
        .ingredients
        .iter()
        .filter(|needed| {
            !available
                .iter()
                .any(|have| names_match(&have.name, &needed.name))
        })
        .cloned()
        .collect()
}
