use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Ingredient;

/// Meal category of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Appetizer,
    Side,
    Dessert,
    Snack,
    Main,
    Salad,
    Soup,
    Beverage,
    Other,
}

impl Default for RecipeCategory {
    fn default() -> Self {
        RecipeCategory::Other
    }
}

/// Preparation difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Dietary tag attached to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
    Keto,
    Paleo,
}

impl DietaryTag {
    /// Wire/display name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
            DietaryTag::LowCarb => "low-carb",
            DietaryTag::Keto => "keto",
            DietaryTag::Paleo => "paleo",
        }
    }
}

/// Per-serving nutrition summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

/// A recipe as supplied by the recipe store / JSON import collaborators
///
/// Plain value type: match scores and missing-ingredient lists are NOT
/// fields here. They are per-query view state and live on
/// [`ScoredRecipe`](crate::ranking::ScoredRecipe), so a recipe shared
/// between call sites can never carry stale annotations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Stable identity
    #[serde(default)]
    pub id: String,

    /// Recipe name
    #[serde(default)]
    pub name: String,

    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Ordered instruction steps
    #[serde(default)]
    pub steps: Vec<String>,

    /// Total time in minutes
    #[serde(default)]
    pub total_minutes: u32,

    /// Preparation time in minutes
    #[serde(default)]
    pub prep_minutes: u32,

    /// Cooking time in minutes
    #[serde(default)]
    pub cook_minutes: u32,

    /// Serving count
    #[serde(default)]
    pub servings: u32,

    /// Nutrition summary, if known
    #[serde(default)]
    pub nutrition: Option<Nutrition>,

    /// Meal category
    #[serde(default)]
    pub category: RecipeCategory,

    /// Preparation difficulty
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Dietary tags
    #[serde(default)]
    pub dietary_tags: Vec<DietaryTag>,

    /// Whether the recipe was created by the user
    #[serde(default)]
    pub custom: bool,

    /// Source attribution (site, book, ...)
    #[serde(default)]
    pub source: Option<String>,

    /// Image reference
    #[serde(default)]
    pub image_url: Option<String>,

    /// Timestamp when the recipe entered the collection
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe with required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            total_minutes: 0,
            prep_minutes: 0,
            cook_minutes: 0,
            servings: 1,
            nutrition: None,
            category: RecipeCategory::Other,
            difficulty: Difficulty::Medium,
            dietary_tags: Vec::new(),
            custom: false,
            source: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether the recipe carries a dietary tag
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary_tags.contains(&tag)
    }

    /// Display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{} ({} min)", self.name, self.total_minutes)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new("", "Untitled Recipe")
    }
}
