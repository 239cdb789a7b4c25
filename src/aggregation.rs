//! # Menu Aggregation Engine
//!
//! Walks a menu's items (direct recipes, or dishes containing recipes and/or
//! standalone ingredients), multiplies ingredient quantities along the
//! menu -> dish -> recipe -> ingredient edges, and merges same-ingredient
//! same-unit contributions into running totals per kitchen section, keeping a
//! source list for every total.
//!
//! The engine is synchronous and performs no I/O: every dish and recipe a
//! menu references must be supplied pre-fetched through [`MenuResolvers`].
//! One unresolvable item never aborts the rest of the menu; it is skipped and
//! recorded. Section and ingredient ordering is strict insertion order — the
//! engine applies no sort, so any display ordering is the caller's job.

use crate::localization::localize_name;
use crate::model::{
    AggregatedIngredient, DishRecord, GroupedIngredient, IngredientRecord, IngredientSource,
    MenuAggregation, MenuItem, MenuResolvers, RecipeGroupedItem, RecipeRecord, SectionAggregate,
    SourceKind,
};
use crate::units::normalize_unit;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Section display name for dishes without a kitchen section and for
/// direct-recipe items.
const UNCATEGORIZED: &str = "Uncategorized";

/// Insertion-ordered accumulator for section aggregates.
///
/// Owns all mutable state for one aggregation run; merge identity within a
/// section is the typed key `(ingredient_id, unit)`.
#[derive(Default)]
struct Accumulator {
    sections: Vec<SectionAggregate>,
    section_index: HashMap<Option<String>, usize>,
    /// Parallel to `sections`: merge key -> position in `aggregated_ingredients`
    ingredient_index: Vec<HashMap<(String, String), usize>>,
}

impl Accumulator {
    /// Index of the section for `section_id`, created on first sight.
    fn section(&mut self, section_id: Option<String>, section_name: &str) -> usize {
        if let Some(&index) = self.section_index.get(&section_id) {
            return index;
        }
        let index = self.sections.len();
        self.sections.push(SectionAggregate {
            section_id: section_id.clone(),
            section_name: section_name.to_string(),
            aggregated_ingredients: Vec::new(),
            recipe_grouped: Vec::new(),
        });
        self.section_index.insert(section_id, index);
        self.ingredient_index.push(HashMap::new());
        index
    }

    /// Merge one scaled contribution into a section's running totals.
    fn merge(&mut self, section: usize, ingredient: &GroupedIngredient, source: IngredientSource) {
        let key = (ingredient.ingredient_id.clone(), ingredient.unit.clone());
        let aggregates = &mut self.sections[section].aggregated_ingredients;

        if let Some(&position) = self.ingredient_index[section].get(&key) {
            let entry = &mut aggregates[position];
            entry.total_quantity += ingredient.quantity;
            entry.sources.push(source);
        } else {
            self.ingredient_index[section].insert(key, aggregates.len());
            aggregates.push(AggregatedIngredient {
                ingredient_id: ingredient.ingredient_id.clone(),
                name: ingredient.name.clone(),
                total_quantity: ingredient.quantity,
                unit: ingredient.unit.clone(),
                sources: vec![source],
            });
        }
    }
}

/// Aggregate a menu's items into per-section prep totals.
///
/// # Examples
///
/// ```rust
/// use prepline::aggregation::aggregate_menu;
/// use prepline::model::{IngredientRecord, MenuItem, MenuResolvers, RecipeRecord};
///
/// let resolvers = MenuResolvers::new().with_recipe(RecipeRecord {
///     id: "r1".into(),
///     name: "Stock".into(),
///     ingredients: vec![IngredientRecord {
///         id: "i1".into(),
///         name: "onion".into(),
///         quantity: 2.0,
///         unit: "pc".into(),
///     }],
///     instructions: vec![],
/// });
/// let menu = vec![MenuItem { id: "m1".into(), dish_id: None, recipe_id: Some("r1".into()) }];
///
/// let result = aggregate_menu(&menu, &resolvers);
/// assert_eq!(result.sections.len(), 1);
/// assert_eq!(result.sections[0].section_name, "Uncategorized");
/// ```
pub fn aggregate_menu(menu_items: &[MenuItem], resolvers: &MenuResolvers) -> MenuAggregation {
    let mut accumulator = Accumulator::default();
    let mut unassigned: Vec<RecipeGroupedItem> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();

    debug!("aggregating menu with {} items", menu_items.len());

    for item in menu_items {
        if let Some(dish_id) = &item.dish_id {
            match resolvers.dishes.get(dish_id) {
                Some(dish) => aggregate_dish(dish, resolvers, &mut accumulator, &mut skipped),
                None => {
                    warn!("menu item '{}' references unknown dish '{}', skipping", item.id, dish_id);
                    skipped.push(item.id.clone());
                }
            }
        } else if let Some(recipe_id) = &item.recipe_id {
            match resolvers.recipes.get(recipe_id) {
                Some(recipe) => unassigned.push(group_recipe(recipe, 1.0, None, None)),
                None => {
                    warn!(
                        "menu item '{}' references unknown recipe '{}', skipping",
                        item.id, recipe_id
                    );
                    skipped.push(item.id.clone());
                }
            }
        } else {
            warn!("menu item '{}' references neither dish nor recipe, skipping", item.id);
            skipped.push(item.id.clone());
        }
    }

    // Direct-recipe items have no section of their own; fold them into the
    // synthetic Uncategorized bucket with the same merge rule.
    if !unassigned.is_empty() {
        let section = accumulator.section(None, UNCATEGORIZED);
        for grouped in &unassigned {
            for ingredient in &grouped.ingredients {
                accumulator.merge(
                    section,
                    ingredient,
                    IngredientSource {
                        kind: SourceKind::Recipe,
                        id: grouped.recipe_id.clone(),
                        name: grouped.recipe_name.clone(),
                        quantity: Some(ingredient.quantity),
                    },
                );
            }
            accumulator.sections[section].recipe_grouped.push(grouped.clone());
        }
    }

    info!(
        "aggregation produced {} sections ({} unassigned recipes, {} skipped items)",
        accumulator.sections.len(),
        unassigned.len(),
        skipped.len()
    );

    MenuAggregation {
        sections: accumulator.sections,
        unassigned_items: unassigned,
        skipped_items: skipped,
    }
}

/// Aggregate one dish: its attached recipes at their join multipliers, then
/// its standalone ingredients at x1 (dish ingredients are already
/// dish-scoped).
fn aggregate_dish(
    dish: &DishRecord,
    resolvers: &MenuResolvers,
    accumulator: &mut Accumulator,
    skipped: &mut Vec<String>,
) {
    let section_name = dish.section_name.as_deref().unwrap_or(UNCATEGORIZED);
    let section = accumulator.section(dish.section_id.clone(), section_name);

    for join in &dish.recipes {
        let Some(recipe) = resolvers.recipes.get(&join.recipe_id) else {
            warn!(
                "dish '{}' references unknown recipe '{}', skipping that join",
                dish.id, join.recipe_id
            );
            skipped.push(join.recipe_id.clone());
            continue;
        };

        let grouped = group_recipe(
            recipe,
            join.quantity,
            Some(dish.id.clone()),
            Some(dish.name.clone()),
        );
        for ingredient in &grouped.ingredients {
            accumulator.merge(
                section,
                ingredient,
                IngredientSource {
                    kind: SourceKind::Recipe,
                    id: recipe.id.clone(),
                    name: recipe.name.clone(),
                    quantity: Some(ingredient.quantity),
                },
            );
        }
        accumulator.sections[section].recipe_grouped.push(grouped);
    }

    for ingredient in &dish.ingredients {
        let scaled = scale_ingredient(ingredient, 1.0);
        accumulator.merge(
            section,
            &scaled,
            IngredientSource {
                kind: SourceKind::Dish,
                id: dish.id.clone(),
                name: dish.name.clone(),
                quantity: Some(scaled.quantity),
            },
        );
    }
}

/// Build the per-recipe breakdown at the recipe's effective multiplier.
///
/// Appended to its section even when every ingredient is zero-valued; the
/// grouping is independent of aggregation success.
fn group_recipe(
    recipe: &RecipeRecord,
    multiplier: f64,
    dish_id: Option<String>,
    dish_name: Option<String>,
) -> RecipeGroupedItem {
    RecipeGroupedItem {
        recipe_id: recipe.id.clone(),
        recipe_name: recipe.name.clone(),
        dish_id,
        dish_name,
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ingredient| scale_ingredient(ingredient, multiplier))
            .collect(),
    }
}

/// Scale one ingredient and normalize its display name and unit.
fn scale_ingredient(ingredient: &IngredientRecord, multiplier: f64) -> GroupedIngredient {
    GroupedIngredient {
        ingredient_id: ingredient.id.clone(),
        name: localize_name(&ingredient.name),
        quantity: ingredient.quantity * multiplier,
        unit: normalize_unit(&ingredient.unit),
    }
}
