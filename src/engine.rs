use std::time::Instant;

use tracing::{debug, warn};

use crate::core::{Ingredient, MatchReport, Recipe};
use crate::filter::{self, RecipeFilter};
use crate::index::{IndexStats, RecipeIndex};
use crate::ranking::{self, RankConfig, ScoredRecipe, ScoringMode};
use crate::similarity;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Tier boundaries and tie-break window for ranking passes
    pub rank: RankConfig,
    /// Maximum suggestions returned for a free-text ingredient list
    pub max_suggestions: usize,
    /// Maximum results from a similar-recipes lookup
    pub max_similar: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            rank: RankConfig::default(),
            max_suggestions: 10,
            max_similar: 5,
        }
    }
}

/// Main matching engine orchestrator
///
/// Owns the recipe index and the ranking configuration; composes the
/// matcher, scorers, similarity and filters over the indexed collection.
/// All query methods are pure reads returning freshly annotated copies,
/// so results from one call never alias results from another.
pub struct RecipeEngine {
    index: RecipeIndex,
    options: EngineOptions,
}

impl Default for RecipeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeEngine {
    /// Create an empty engine with default options
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Create an empty engine with custom options
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            index: RecipeIndex::new(),
            options,
        }
    }

    /// Replace the indexed collection with `recipes`
    pub fn load(&mut self, recipes: Vec<Recipe>) {
        self.index.rebuild_all(recipes);
    }

    /// Add or replace a single recipe
    pub fn insert(&mut self, recipe: Recipe) {
        self.index.insert(recipe);
    }

    /// Remove a recipe by id
    pub fn remove(&mut self, id: &str) -> Option<Recipe> {
        self.index.remove(id)
    }

    /// Read access to the index
    pub fn index(&self) -> &RecipeIndex {
        &self.index
    }

    /// Index statistics
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    fn collection(&self) -> Vec<Recipe> {
        self.index.all().into_iter().cloned().collect()
    }

    /// Rank the whole collection against the user's pantry
    ///
    /// Blended scoring (coverage + utilization), tiered for presentation.
    pub fn rank_pantry(&self, available: &[Ingredient]) -> MatchReport {
        let start = Instant::now();
        let recipes = self.collection();
        let candidates = recipes.len();

        let ranked = ranking::rank(&recipes, available, ScoringMode::Blended, &self.options.rank);
        let tiers = ranking::tier(ranked, &self.options.rank);

        let report = MatchReport {
            tiers,
            mode: ScoringMode::Blended,
            candidates,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!("{}", report.display());
        report
    }

    /// Re-score the collection for a shopping-list change
    ///
    /// Coverage scoring only: the shopping-list view cares about "how much
    /// of this recipe can I already make", not pantry utilization.
    pub fn refresh_shopping_list(&self, available: &[Ingredient]) -> Vec<ScoredRecipe> {
        let recipes = self.collection();
        ranking::rank(&recipes, available, ScoringMode::Coverage, &self.options.rank)
    }

    /// Ranked suggestions from a raw free-text ingredient list
    pub fn suggest(&self, ingredient_names: &[&str]) -> Vec<ScoredRecipe> {
        if ingredient_names.is_empty() {
            warn!("Suggestion request with no ingredient names");
        }
        let recipes = self.collection();
        ranking::suggest(
            &recipes,
            ingredient_names,
            self.options.max_suggestions,
            &self.options.rank,
        )
    }

    /// Most similar recipes to the one with `recipe_id`
    ///
    /// Unknown ids yield an empty result, not an error.
    pub fn find_similar(&self, recipe_id: &str) -> Vec<(Recipe, f64)> {
        let Some(anchor) = self.index.get(recipe_id) else {
            warn!(id = %recipe_id, "Similar-recipes lookup for unknown id");
            return Vec::new();
        };
        let recipes = self.collection();
        similarity::find_similar(anchor, &recipes, self.options.max_similar)
    }

    /// Filter the collection with declarative predicates
    pub fn filter(&self, filters: &[RecipeFilter]) -> Vec<Recipe> {
        filter::apply(self.collection(), filters)
    }
}
