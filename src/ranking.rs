//! Ranking pipeline: score, sort, tie-break and tier a recipe collection
//!
//! Scoring semantics (which scorer, which boundaries, which tie window)
//! are carried in [`RankConfig`] and [`ScoringMode`] so that every call
//! site shares one set of constants.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Ingredient, Recipe};
use crate::error::{EngineError, Result};
use crate::scoring;

/// A recipe annotated with its score and missing ingredients for one query
///
/// Owned copy, never a view into shared mutable state: two concurrent
/// queries over the same collection each get their own annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    /// Match score in `[0,1]`
    pub score: f64,
    /// Recipe ingredients not covered by the query's available set
    pub missing: Vec<Ingredient>,
}

impl ScoredRecipe {
    pub fn new(recipe: Recipe, score: f64, missing: Vec<Ingredient>) -> Self {
        Self {
            recipe,
            score,
            missing,
        }
    }
}

/// Which scorer a ranking pass uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Plain ingredient coverage (shopping-list refresh path)
    Coverage,
    /// Coverage blended with pantry utilization (general ranking path)
    Blended,
}

/// Presentation tier for a ranked recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Score at or above the upper boundary
    CookTonight,
    /// Score between the boundaries
    AlmostThere,
    /// Everything below the lower boundary
    WorthExploring,
}

impl MatchTier {
    /// UI label for the tier
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::CookTonight => "Cook Tonight",
            MatchTier::AlmostThere => "Almost There",
            MatchTier::WorthExploring => "Worth Exploring",
        }
    }
}

/// Tier boundaries and tie-break window for a ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Lower bound (inclusive) of the Cook Tonight tier
    pub cook_tonight_min: f64,
    /// Lower bound (inclusive) of the Almost There tier
    pub almost_there_min: f64,
    /// Scores within this window of each other count as tied; ties are
    /// broken by ascending missing-ingredient count
    pub tie_window: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            cook_tonight_min: 0.7,
            almost_there_min: 0.4,
            tie_window: 0.1,
        }
    }
}

impl RankConfig {
    /// Create a validated configuration
    pub fn new(cook_tonight_min: f64, almost_there_min: f64, tie_window: f64) -> Result<Self> {
        if !(0.0 < almost_there_min && almost_there_min < cook_tonight_min && cook_tonight_min <= 1.0)
        {
            return Err(EngineError::InvalidConfig(format!(
                "tier boundaries must satisfy 0 < almost_there_min < cook_tonight_min <= 1, got {} / {}",
                almost_there_min, cook_tonight_min
            )));
        }
        if !tie_window.is_finite() || tie_window < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "tie window must be a non-negative number, got {}",
                tie_window
            )));
        }
        Ok(Self {
            cook_tonight_min,
            almost_there_min,
            tie_window,
        })
    }

    /// Tier for a score under these boundaries
    pub fn tier_for(&self, score: f64) -> MatchTier {
        if score >= self.cook_tonight_min {
            MatchTier::CookTonight
        } else if score >= self.almost_there_min {
            MatchTier::AlmostThere
        } else {
            MatchTier::WorthExploring
        }
    }
}

/// Score every recipe against the available ingredients and sort
///
/// Output is descending by score; runs of scores within
/// `config.tie_window` of the run head are reordered so that recipes with
/// fewer missing ingredients come first. Pure over its inputs: identical
/// inputs produce identical order and scores.
pub fn rank(
    recipes: &[Recipe],
    available: &[Ingredient],
    mode: ScoringMode,
    config: &RankConfig,
) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = recipes
        .iter()
        .map(|recipe| {
            let score = match mode {
                ScoringMode::Coverage => scoring::coverage(recipe, available),
                ScoringMode::Blended => scoring::blended(recipe, available),
            };
            let missing = scoring::missing_ingredients(recipe, available);
            ScoredRecipe::new(recipe.clone(), score, missing)
        })
        .collect();

    sort_ranked(&mut scored, config.tie_window);

    debug!(
        candidates = recipes.len(),
        mode = ?mode,
        "Ranked recipes"
    );

    scored
}

/// Ranked suggestions from a raw free-text ingredient list
///
/// Uses the boosted scorer: full coverage stays exactly 1.0, partial
/// coverage is boosted but capped below 1.0. Returns at most `limit`.
pub fn suggest(
    recipes: &[Recipe],
    available_names: &[&str],
    limit: usize,
    config: &RankConfig,
) -> Vec<ScoredRecipe> {
    let as_items: Vec<Ingredient> = available_names
        .iter()
        .map(|name| Ingredient::new("", *name))
        .collect();

    let mut scored: Vec<ScoredRecipe> = recipes
        .iter()
        .map(|recipe| {
            let score = scoring::boosted(recipe, available_names);
            let missing = scoring::missing_ingredients(recipe, &as_items);
            ScoredRecipe::new(recipe.clone(), score, missing)
        })
        .collect();

    sort_ranked(&mut scored, config.tie_window);
    scored.truncate(limit);
    scored
}

/// Partition ranked recipes into tiers, preserving rank order
///
/// Tiers appear best-first; tiers with no members are omitted.
pub fn tier(scored: Vec<ScoredRecipe>, config: &RankConfig) -> Vec<(MatchTier, Vec<ScoredRecipe>)> {
    let mut cook_tonight = Vec::new();
    let mut almost_there = Vec::new();
    let mut worth_exploring = Vec::new();

    for item in scored {
        match config.tier_for(item.score) {
            MatchTier::CookTonight => cook_tonight.push(item),
            MatchTier::AlmostThere => almost_there.push(item),
            MatchTier::WorthExploring => worth_exploring.push(item),
        }
    }

    [
        (MatchTier::CookTonight, cook_tonight),
        (MatchTier::AlmostThere, almost_there),
        (MatchTier::WorthExploring, worth_exploring),
    ]
    .into_iter()
    .filter(|(_, members)| !members.is_empty())
    .collect()
}

/// Stable descending sort with the fuzzy tie-break
///
/// A fuzzy comparator inside a single `sort_by` would not be a total
/// order, so the tie-break runs as a second pass: walk the sorted list,
/// group consecutive items whose scores stay within `window` of the
/// group's head, and order each group by ascending missing count.
fn sort_ranked(scored: &mut [ScoredRecipe], window: f64) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut start = 0;
    while start < scored.len() {
        let head = scored[start].score;
        let mut end = start + 1;
        while end < scored.len() && (head - scored[end].score) <= window {
            end += 1;
        }
        scored[start..end].sort_by_key(|item| item.missing.len());
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecipeCategory;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        let mut r = Recipe::new(id, format!("Recipe {}", id));
        r.category = RecipeCategory::Dinner;
        r.ingredients = ingredients
            .iter()
            .enumerate()
            .map(|(i, name)| Ingredient::new(format!("{}-{}", id, i), *name))
            .collect();
        r
    }

    fn pantry(names: &[&str]) -> Vec<Ingredient> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Ingredient::new(format!("p-{}", i), *name))
            .collect()
    }

    #[test]
    fn test_rank_orders_by_score() {
        let recipes = vec![
            recipe("low", &["saffron", "truffle"]),
            recipe("high", &["flour", "milk"]),
        ];
        let available = pantry(&["flour", "milk"]);

        let ranked = rank(&recipes, &available, ScoringMode::Coverage, &RankConfig::default());
        assert_eq!(ranked[0].recipe.id, "high");
        assert_eq!(ranked[0].score, 1.0);
        assert!(ranked[0].missing.is_empty());
        assert_eq!(ranked[1].missing.len(), 2);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let recipes = vec![
            recipe("a", &["flour", "milk", "sugar"]),
            recipe("b", &["flour", "eggs"]),
            recipe("c", &["rice", "beans"]),
        ];
        let available = pantry(&["flour", "milk"]);
        let config = RankConfig::default();

        let first = rank(&recipes, &available, ScoringMode::Blended, &config);
        let second = rank(&recipes, &available, ScoringMode::Blended, &config);

        let ids: Vec<&str> = first.iter().map(|s| s.recipe.id.as_str()).collect();
        let ids2: Vec<&str> = second.iter().map(|s| s.recipe.id.as_str()).collect();
        assert_eq!(ids, ids2);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_exact_tie_prefers_fewer_missing() {
        // 2/4 vs 1/2: both score 0.5, so the recipe missing one
        // ingredient ranks above the one missing two.
        let recipes = vec![
            recipe("many-missing", &["flour", "milk", "yeast", "cumin"]),
            recipe("few-missing", &["flour", "butter"]),
        ];
        let available = pantry(&["flour", "milk"]);

        let ranked = rank(&recipes, &available, ScoringMode::Coverage, &RankConfig::default());
        assert_eq!(ranked[0].recipe.id, "few-missing");
        assert_eq!(ranked[1].recipe.id, "many-missing");
    }

    #[test]
    fn test_tie_window_is_fuzzy_not_exact() {
        // 6/8 = 0.75 vs 2/3 ≈ 0.667: scores differ but stay inside the
        // 0.1 window, so the lower-scored recipe with fewer missing
        // ingredients still wins the tie.
        let recipes = vec![
            recipe(
                "big",
                &[
                    "apple", "banana", "carrot", "daikon", "endive", "fennel", "walnut", "yogurt",
                ],
            ),
            recipe("small", &["apple", "banana", "zucchini"]),
        ];
        let available = pantry(&["apple", "banana", "carrot", "daikon", "endive", "fennel"]);

        let ranked = rank(&recipes, &available, ScoringMode::Coverage, &RankConfig::default());
        assert_eq!(ranked[0].recipe.id, "small");
        assert_eq!(ranked[1].recipe.id, "big");
        assert!(ranked[1].score > ranked[0].score);
    }

    #[test]
    fn test_outside_window_score_wins() {
        // 1.0 vs 0.5: far outside the window, missing counts are ignored
        let recipes = vec![
            recipe("half", &["flour", "cocoa"]),
            recipe("full", &["flour", "milk"]),
        ];
        let available = pantry(&["flour", "milk"]);

        let ranked = rank(&recipes, &available, ScoringMode::Coverage, &RankConfig::default());
        assert_eq!(ranked[0].recipe.id, "full");
    }

    #[test]
    fn test_suggest_boosted_and_limited() {
        let recipes = vec![
            recipe("full", &["flour", "milk"]),
            recipe("partial", &["flour", "milk", "butter", "sugar"]),
            recipe("none", &["anchovies"]),
        ];

        let suggested = suggest(&recipes, &["flour", "milk"], 2, &RankConfig::default());
        assert_eq!(suggested.len(), 2);
        assert_eq!(suggested[0].recipe.id, "full");
        assert_eq!(suggested[0].score, 1.0);
        // 2/4 coverage boosted: 0.5 * 1.2 = 0.6
        assert!((suggested[1].score - 0.6).abs() < 1e-9);
        assert!(suggested[1].score < 1.0);
    }

    #[test]
    fn test_tier_partition() {
        let config = RankConfig::default();
        let scored = vec![
            ScoredRecipe::new(recipe("a", &[]), 0.95, Vec::new()),
            ScoredRecipe::new(recipe("b", &[]), 0.7, Vec::new()),
            ScoredRecipe::new(recipe("c", &[]), 0.5, Vec::new()),
            ScoredRecipe::new(recipe("d", &[]), 0.1, Vec::new()),
        ];

        let tiers = tier(scored, &config);
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].0, MatchTier::CookTonight);
        assert_eq!(tiers[0].1.len(), 2); // 0.95 and the inclusive 0.7
        assert_eq!(tiers[1].0, MatchTier::AlmostThere);
        assert_eq!(tiers[1].1.len(), 1);
        assert_eq!(tiers[2].0, MatchTier::WorthExploring);
        assert_eq!(tiers[2].1.len(), 1);
    }

    #[test]
    fn test_tier_omits_empty() {
        let config = RankConfig::default();
        let scored = vec![ScoredRecipe::new(recipe("a", &[]), 0.9, Vec::new())];
        let tiers = tier(scored, &config);
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].0, MatchTier::CookTonight);
    }

    #[test]
    fn test_config_validation() {
        assert!(RankConfig::new(0.7, 0.4, 0.1).is_ok());
        assert!(RankConfig::new(0.4, 0.7, 0.1).is_err());
        assert!(RankConfig::new(1.2, 0.4, 0.1).is_err());
        assert!(RankConfig::new(0.7, 0.0, 0.1).is_err());
        assert!(RankConfig::new(0.7, 0.4, -0.1).is_err());
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(MatchTier::CookTonight.label(), "Cook Tonight");
        assert_eq!(MatchTier::AlmostThere.label(), "Almost There");
        assert_eq!(MatchTier::WorthExploring.label(), "Worth Exploring");
    }

    #[test]
    fn test_rank_empty_inputs() {
        let config = RankConfig::default();
        assert!(rank(&[], &pantry(&["milk"]), ScoringMode::Blended, &config).is_empty());

        let ranked = rank(
            &[recipe("a", &["milk"])],
            &[],
            ScoringMode::Blended,
            &config,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.0);
        assert_eq!(ranked[0].missing.len(), 1);
    }
}
