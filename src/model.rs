//! # Menu, Dish, Recipe, and Aggregation Data Model
//!
//! Plain value types exchanged with the host application. Inputs (menu items,
//! dishes, recipes, ingredients) arrive pre-fetched from whatever storage the
//! host uses; outputs (section aggregates with source attribution) are handed
//! back for the host to serialize. Nothing here is persisted by this crate;
//! everything is constructed per aggregation run and discarded afterwards.
//!
//! ## Core Concepts
//!
//! - **Section**: a kitchen-area grouping ("Grill", "Uncategorized") used to
//!   bucket aggregated prep requirements
//! - **Source attribution**: the record of which recipe or dish, and how
//!   much, contributed to an aggregated ingredient total
//! - **Merge key**: `(ingredient_id, unit)` — contributions merge only when
//!   both match, so differing units never mix silently

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_multiplier() -> f64 {
    1.0
}

/// One structured ingredient attached to a recipe or dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe and its ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    /// Preparation steps, carried through for the host's display needs
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Join row attaching a recipe to a dish with a serving multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecipeJoin {
    pub recipe_id: String,
    /// How many recipe batches this dish uses; defaults to 1
    #[serde(default = "default_multiplier")]
    pub quantity: f64,
}

/// A dish: a kitchen-section assignment plus attached recipes and any
/// standalone ingredients that belong to the dish directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub recipes: Vec<DishRecipeJoin>,
    /// Dish-scoped ingredients, already at final quantity (not multiplied)
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

/// One entry on a menu, referencing a dish or a recipe.
///
/// An item with neither reference (or a dangling one) is skipped during
/// aggregation and recorded for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(default)]
    pub dish_id: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<String>,
}

/// Pre-fetched lookups the aggregation engine needs from its collaborators.
///
/// The engine performs no I/O; the caller supplies every dish and recipe a
/// menu might reference before aggregation starts.
#[derive(Debug, Clone, Default)]
pub struct MenuResolvers {
    pub dishes: HashMap<String, DishRecord>,
    pub recipes: HashMap<String, RecipeRecord>,
}

impl MenuResolvers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dish(mut self, dish: DishRecord) -> Self {
        self.dishes.insert(dish.id.clone(), dish);
        self
    }

    pub fn with_recipe(mut self, recipe: RecipeRecord) -> Self {
        self.recipes.insert(recipe.id.clone(), recipe);
        self
    }
}

/// Whether a contribution came from a dish-scoped ingredient or a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Dish,
    Recipe,
}

/// Provenance of one contribution to an aggregated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSource {
    pub kind: SourceKind,
    pub id: String,
    pub name: String,
    /// Contributed amount in the aggregate's unit, post-multiplier
    pub quantity: Option<f64>,
}

/// Running total for one `(ingredient_id, unit)` pair within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub ingredient_id: String,
    pub name: String,
    pub total_quantity: f64,
    pub unit: String,
    pub sources: Vec<IngredientSource>,
}

/// Scaled ingredient line inside a [`RecipeGroupedItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedIngredient {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Per-recipe (optionally per-dish) ingredient breakdown before aggregation,
/// scaled by the recipe's effective multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeGroupedItem {
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(default)]
    pub dish_id: Option<String>,
    #[serde(default)]
    pub dish_name: Option<String>,
    pub ingredients: Vec<GroupedIngredient>,
}

/// Aggregated prep requirements for one kitchen section.
///
/// `section_id = None` is the Uncategorized bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAggregate {
    pub section_id: Option<String>,
    pub section_name: String,
    pub aggregated_ingredients: Vec<AggregatedIngredient>,
    pub recipe_grouped: Vec<RecipeGroupedItem>,
}

/// Full result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuAggregation {
    /// Sections in first-seen order
    pub sections: Vec<SectionAggregate>,
    /// Direct-recipe items (no dish), also folded into Uncategorized
    pub unassigned_items: Vec<RecipeGroupedItem>,
    /// IDs of menu items skipped because their dish/recipe could not be
    /// resolved; kept for caller diagnostics
    pub skipped_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_builders() {
        let resolvers = MenuResolvers::new()
            .with_recipe(RecipeRecord {
                id: "r1".into(),
                name: "Stock".into(),
                ingredients: vec![],
                instructions: vec![],
            })
            .with_dish(DishRecord {
                id: "d1".into(),
                name: "Soup".into(),
                section_id: None,
                section_name: None,
                recipes: vec![],
                ingredients: vec![],
            });

        assert!(resolvers.recipes.contains_key("r1"));
        assert!(resolvers.dishes.contains_key("d1"));
    }

    #[test]
    fn test_dish_recipe_join_default_multiplier() {
        let join: DishRecipeJoin = serde_json::from_str(r#"{"recipe_id": "r1"}"#).unwrap();
        assert_eq!(join.quantity, 1.0);
    }

    #[test]
    fn test_source_kind_serialization() {
        assert_eq!(serde_json::to_string(&SourceKind::Dish).unwrap(), "\"dish\"");
        assert_eq!(serde_json::to_string(&SourceKind::Recipe).unwrap(), "\"recipe\"");
    }
}
