//! Demonstrates the full pipeline: parse free-text ingredient lines into a
//! recipe, attach it to a dish, and aggregate a small menu into per-section
//! prep totals.
//!
//! Run with: `cargo run --example prep_list`

use anyhow::Result;
use prepline::aggregation::aggregate_menu;
use prepline::conversion::smart_scale;
use prepline::model::{
    DishRecipeJoin, DishRecord, IngredientRecord, MenuItem, MenuResolvers, RecipeRecord,
};
use prepline::parser::parse_ingredient_lines;

fn main() -> Result<()> {
    env_logger::init();

    // Imported recipe text, as it might arrive from an AI generator
    let text = "400g crushed tomatoes\n1 large onion\n2 cloves garlic\n1/2 cup olive oil\nsalt to taste";
    let parsed = parse_ingredient_lines(text);

    println!("Parsed {} ingredient lines:", parsed.ingredients.len());
    for ingredient in &parsed.ingredients {
        println!(
            "  {} {} {}",
            ingredient.quantity, ingredient.unit, ingredient.name
        );
    }
    for line in &parsed.unparsed_lines {
        println!("  (un-parseable: {line})");
    }

    let sauce = RecipeRecord {
        id: "sauce".into(),
        name: "Tomato Sauce".into(),
        ingredients: parsed
            .ingredients
            .iter()
            .enumerate()
            .map(|(index, ingredient)| IngredientRecord {
                id: format!("ing-{index}"),
                name: ingredient.name.clone(),
                quantity: ingredient.quantity,
                unit: ingredient.unit.clone(),
            })
            .collect(),
        instructions: vec!["Simmer everything for 40 minutes.".into()],
    };

    let resolvers = MenuResolvers::new()
        .with_recipe(sauce)
        .with_dish(DishRecord {
            id: "pasta".into(),
            name: "Pasta al Pomodoro".into(),
            section_id: Some("hot-line".into()),
            section_name: Some("Hot Line".into()),
            recipes: vec![DishRecipeJoin {
                recipe_id: "sauce".into(),
                quantity: 4.0,
            }],
            ingredients: vec![IngredientRecord {
                id: "spaghetti".into(),
                name: "spaghetti".into(),
                quantity: 2000.0,
                unit: "g".into(),
            }],
        });

    let menu = vec![MenuItem {
        id: "monday-special".into(),
        dish_id: Some("pasta".into()),
        recipe_id: None,
    }];

    let result = aggregate_menu(&menu, &resolvers);

    for section in &result.sections {
        println!("\n== {} ==", section.section_name);
        for aggregate in &section.aggregated_ingredients {
            let (quantity, unit) = smart_scale(aggregate.total_quantity, &aggregate.unit);
            println!(
                "  {quantity} {unit} {} ({} sources)",
                aggregate.name,
                aggregate.sources.len()
            );
        }
    }

    println!("\nFull result as JSON:");
    println!("{}", serde_json::to_string_pretty(&result.sections)?);

    Ok(())
}
