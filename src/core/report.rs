use serde::{Deserialize, Serialize};

use crate::ranking::{MatchTier, ScoredRecipe, ScoringMode};

/// Result of a full rank-and-tier pass over the recipe collection
///
/// Tiers appear in descending score order and preserve the rank order of
/// their members; tiers with no members are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Ranked recipes grouped into match tiers
    pub tiers: Vec<(MatchTier, Vec<ScoredRecipe>)>,

    /// Scoring mode that produced the ranking
    pub mode: ScoringMode,

    /// Number of recipes considered
    pub candidates: usize,

    /// Ranking latency in milliseconds
    pub latency_ms: f64,
}

impl MatchReport {
    /// Best-scoring recipe, if any recipe was ranked
    pub fn top(&self) -> Option<&ScoredRecipe> {
        self.tiers.first().and_then(|(_, scored)| scored.first())
    }

    /// Total number of ranked recipes across all tiers
    pub fn total_ranked(&self) -> usize {
        self.tiers.iter().map(|(_, scored)| scored.len()).sum()
    }

    /// Recipes in a given tier (empty slice when the tier is absent)
    pub fn tier(&self, tier: MatchTier) -> &[ScoredRecipe] {
        self.tiers
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, scored)| scored.as_slice())
            .unwrap_or(&[])
    }

    /// Display string for logging
    pub fn display(&self) -> String {
        let top = self
            .top()
            .map(|s| format!("{} ({:.2})", s.recipe.name, s.score))
            .unwrap_or_else(|| "none".to_string());
        format!(
            "{} ranked / {} candidates in {:.2}ms [{:?}], top: {}",
            self.total_ranked(),
            self.candidates,
            self.latency_ms,
            self.mode,
            top
        )
    }
}
