use serde::{Deserialize, Serialize};

/// Measurement unit for an ingredient amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    Piece,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Cup,
    Tablespoon,
    Teaspoon,
    Pound,
    Ounce,
}

impl Default for IngredientUnit {
    fn default() -> Self {
        IngredientUnit::Piece
    }
}

/// Store aisle / pantry category of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Dairy,
    Produce,
    Pantry,
    Meat,
    Frozen,
    Bakery,
    Beverage,
    Other,
}

impl Default for IngredientCategory {
    fn default() -> Self {
        IngredientCategory::Other
    }
}

/// A shopping-list or recipe ingredient
///
/// Immutable as far as the engine is concerned: scoring and matching only
/// ever read from it. Amount/order adjustments belong to the owning
/// collaborator (shopping list).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Stable identity
    #[serde(default)]
    pub id: String,

    /// Display name, free text ("Whole Milk", "flour", ...)
    #[serde(default)]
    pub name: String,

    /// Numeric amount in `unit`
    #[serde(default)]
    pub amount: f64,

    /// Measurement unit
    #[serde(default)]
    pub unit: IngredientUnit,

    /// Store category
    #[serde(default)]
    pub category: IngredientCategory,

    /// Whether the ingredient spoils
    #[serde(default)]
    pub perishable: bool,

    /// Shelf life in days, if known
    #[serde(default)]
    pub shelf_life_days: Option<u32>,

    /// Free-text note ("organic", "for Sunday", ...)
    #[serde(default)]
    pub note: Option<String>,

    /// Explicit ordering key within the owning list
    #[serde(default)]
    pub sort_key: Option<u32>,
}

impl Ingredient {
    /// Create a new ingredient with required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: 1.0,
            unit: IngredientUnit::Piece,
            category: IngredientCategory::Other,
            perishable: false,
            shelf_life_days: None,
            note: None,
            sort_key: None,
        }
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

impl Default for Ingredient {
    fn default() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_creation() {
        let item = Ingredient::new("ing-1", "Whole Milk");
        assert_eq!(item.id, "ing-1");
        assert_eq!(item.name, "Whole Milk");
        assert_eq!(item.unit, IngredientUnit::Piece);
        assert!(!item.perishable);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut item = Ingredient::new("ing-2", "Butter");
        item.amount = 250.0;
        item.unit = IngredientUnit::Gram;
        item.category = IngredientCategory::Dairy;
        item.perishable = true;
        item.shelf_life_days = Some(30);

        let json = item.to_json().unwrap();
        let parsed = Ingredient::from_json(&json).unwrap();
        assert_eq!(item, parsed);
    }

    #[test]
    fn test_partial_json() {
        // Collaborators may send sparse objects; defaults fill the rest
        let item = Ingredient::from_json(r#"{"id":"x","name":"Salt"}"#).unwrap();
        assert_eq!(item.name, "Salt");
        assert_eq!(item.category, IngredientCategory::Other);
        assert_eq!(item.shelf_life_days, None);
    }
}
