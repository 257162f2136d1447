//! Multi-key recipe index
//!
//! Pure derived cache over the recipe collection: id, category and
//! difficulty lookups backed by maps that change only through
//! [`RecipeIndex::insert`], [`RecipeIndex::remove`] and
//! [`RecipeIndex::rebuild_all`]. There is no path that mutates the
//! underlying collection behind the index, so a lookup can never observe
//! stale buckets.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::core::{Difficulty, Recipe, RecipeCategory};

/// Index over a recipe collection with id/category/difficulty keys
#[derive(Debug, Default, Clone)]
pub struct RecipeIndex {
    /// Collection order of recipe ids
    order: Vec<String>,
    by_id: HashMap<String, Recipe>,
    by_category: HashMap<RecipeCategory, Vec<String>>,
    by_difficulty: HashMap<Difficulty, Vec<String>>,
    last_rebuilt: Option<DateTime<Utc>>,
}

/// Index statistics
#[derive(Debug, Clone)]
pub struct IndexStats {
    pub total_recipes: usize,
    pub categories: usize,
    pub difficulties: usize,
    pub last_rebuilt: Option<DateTime<Utc>>,
}

impl RecipeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a recipe collection in one pass
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut index = Self::new();
        index.rebuild_all(recipes);
        index
    }

    /// Number of indexed recipes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a recipe by id
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id)
    }

    /// All recipes in collection order
    pub fn all(&self) -> Vec<&Recipe> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }

    /// Recipes of a category, in collection order (empty for absent keys)
    pub fn by_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.bucket_view(self.by_category.get(&category))
    }

    /// Recipes of a difficulty, in collection order (empty for absent keys)
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Recipe> {
        self.bucket_view(self.by_difficulty.get(&difficulty))
    }

    fn bucket_view(&self, bucket: Option<&Vec<String>>) -> Vec<&Recipe> {
        bucket
            .map(|ids| ids.iter().filter_map(|id| self.by_id.get(id)).collect())
            .unwrap_or_default()
    }

    /// Insert a recipe, patching only the affected buckets
    ///
    /// Re-inserting an existing id replaces the stored recipe and moves it
    /// to the end of the collection order.
    pub fn insert(&mut self, recipe: Recipe) {
        if self.by_id.contains_key(&recipe.id) {
            self.remove(&recipe.id);
        }

        debug!(recipe = %recipe.name, id = %recipe.id, "Indexing recipe");

        self.order.push(recipe.id.clone());
        self.by_category
            .entry(recipe.category)
            .or_default()
            .push(recipe.id.clone());
        self.by_difficulty
            .entry(recipe.difficulty)
            .or_default()
            .push(recipe.id.clone());
        self.by_id.insert(recipe.id.clone(), recipe);
    }

    /// Remove a recipe by id, patching only the affected buckets
    ///
    /// Returns the removed recipe, or `None` for an unknown id.
    pub fn remove(&mut self, id: &str) -> Option<Recipe> {
        let recipe = self.by_id.remove(id)?;

        self.order.retain(|entry| entry != id);
        if let Some(bucket) = self.by_category.get_mut(&recipe.category) {
            bucket.retain(|entry| entry != id);
            if bucket.is_empty() {
                self.by_category.remove(&recipe.category);
            }
        }
        if let Some(bucket) = self.by_difficulty.get_mut(&recipe.difficulty) {
            bucket.retain(|entry| entry != id);
            if bucket.is_empty() {
                self.by_difficulty.remove(&recipe.difficulty);
            }
        }

        debug!(id = %id, "Removed recipe from index");
        Some(recipe)
    }

    /// Clear all maps and re-populate from `recipes` in one O(N) pass
    pub fn rebuild_all(&mut self, recipes: Vec<Recipe>) {
        self.order.clear();
        self.by_id.clear();
        self.by_category.clear();
        self.by_difficulty.clear();

        let count = recipes.len();
        for recipe in recipes {
            self.insert(recipe);
        }
        self.last_rebuilt = Some(Utc::now());

        info!(recipes = count, "Rebuilt recipe index");
    }

    /// Index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_recipes: self.order.len(),
            categories: self.by_category.len(),
            difficulties: self.by_difficulty.len(),
            last_rebuilt: self.last_rebuilt,
        }
    }
}
