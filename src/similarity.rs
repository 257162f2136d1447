//! Recipe-to-recipe similarity
//!
//! Used to populate "similar recipes" rails and auto-fill collections.
//! Weighted sum over category, difficulty, ingredient-name overlap and
//! dietary-tag overlap, clamped to 1.0.

use std::collections::HashSet;

use crate::core::Recipe;

/// Weight for matching meal category
const CATEGORY_WEIGHT: f64 = 0.4;
/// Weight for matching difficulty
const DIFFICULTY_WEIGHT: f64 = 0.1;
/// Weight for ingredient-name Jaccard overlap
const INGREDIENT_WEIGHT: f64 = 0.3;
/// Weight for dietary-tag Jaccard overlap
const TAG_WEIGHT: f64 = 0.2;

/// Jaccard index `|A∩B| / |A∪B|` over two hash sets
pub fn jaccard<T: std::hash::Hash + Eq>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

fn ingredient_names(recipe: &Recipe) -> HashSet<String> {
    recipe
        .ingredients
        .iter()
        .map(|i| i.name.to_lowercase())
        .collect()
}

/// Similarity score in `[0,1]` between two recipes
///
/// The overlap terms are skipped (not scored as zero-overlap) when either
/// side has nothing to compare, so a tag-less recipe is not penalized
/// against a tagged one.
pub fn similarity(a: &Recipe, b: &Recipe) -> f64 {
    let mut score = 0.0;

    if a.category == b.category {
        score += CATEGORY_WEIGHT;
    }
    if a.difficulty == b.difficulty {
        score += DIFFICULTY_WEIGHT;
    }

    let names_a = ingredient_names(a);
    let names_b = ingredient_names(b);
    if !names_a.is_empty() && !names_b.is_empty() {
        score += INGREDIENT_WEIGHT * jaccard(&names_a, &names_b);
    }

    let tags_a: HashSet<_> = a.dietary_tags.iter().copied().collect();
    let tags_b: HashSet<_> = b.dietary_tags.iter().copied().collect();
    if !tags_a.is_empty() && !tags_b.is_empty() {
        score += TAG_WEIGHT * jaccard(&tags_a, &tags_b);
    }

    score.min(1.0)
}

/// Most similar recipes to `anchor` among `candidates`
///
/// Excludes the anchor itself by identity, sorts descending by similarity
/// (stable, ties keep collection order) and returns at most `limit`.
pub fn find_similar(anchor: &Recipe, candidates: &[Recipe], limit: usize) -> Vec<(Recipe, f64)> {
    let mut scored: Vec<(Recipe, f64)> = candidates
        .iter()
        .filter(|candidate| candidate.id != anchor.id)
        .map(|candidate| (candidate.clone(), similarity(anchor, candidate)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}
