//! # Unit Conversion Engine
//!
//! Converts quantities between units of the same category, to and from the
//! category's standard unit (`g`, `ml`, `pc`), and across the weight/volume
//! boundary when the ingredient's density is known.
//!
//! Conversion failure is silent and non-fatal: a missing factor returns the
//! original value labeled with the requested unit, never a guess and never an
//! error. Density-based conversion only activates on a category mismatch; it
//! never overrides a same-category conversion.

use crate::localization::localize_name;
use crate::units::{
    conversion_factor, get_unit_category, normalize_unit, standard_unit, UnitCategory,
};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a conversion, carrying the pre-conversion value for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value (equal to `original_value` when no factor applied)
    pub value: f64,
    /// Canonical unit the value is expressed in
    pub unit: String,
    /// Value before conversion
    pub original_value: f64,
    /// Canonical unit before conversion
    pub original_unit: String,
}

lazy_static! {
    /// Ingredient density in grams per milliliter, keyed by canonical name.
    ///
    /// Values derived from USDA grams-per-cup figures at 240 ml per cup.
    static ref DENSITY_G_PER_ML: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("water", 1.0);
        map.insert("milk", 1.03);
        map.insert("heavy cream", 1.0);
        map.insert("all-purpose flour", 0.52);
        map.insert("flour", 0.52);
        map.insert("whole wheat flour", 0.5);
        map.insert("sugar", 0.83);
        map.insert("superfine sugar", 0.85);
        map.insert("powdered sugar", 0.5);
        map.insert("brown sugar", 0.9);
        map.insert("butter", 0.95);
        map.insert("honey", 1.42);
        map.insert("olive oil", 0.92);
        map.insert("vegetable oil", 0.92);
        map.insert("oil", 0.92);
        map.insert("rice", 0.85);
        map.insert("salt", 1.2);
        map.insert("rolled oats", 0.41);
        map.insert("cornstarch", 0.54);
        map.insert("cocoa powder", 0.41);
        map.insert("bell pepper", 0.62);
        map.insert("tomato", 0.75);
        map
    };
}

/// Look up a mass-per-volume factor for a named ingredient.
///
/// The name passes through the localizer first so regional variants
/// ("Capsicum") resolve to their canonical density entry.
pub fn density_for(ingredient_name: &str) -> Option<f64> {
    let canonical = localize_name(ingredient_name).to_lowercase();
    DENSITY_G_PER_ML.get(canonical.as_str()).copied()
}

/// Convert a value between two units.
///
/// Identity when both normalize to the same token. A missing conversion
/// factor returns the value unchanged but labeled with the target unit,
/// so callers can detect the soft failure by comparing magnitudes.
///
/// # Examples
///
/// ```rust
/// use prepline::conversion::convert;
///
/// let result = convert(2.0, "kg", "g");
/// assert_eq!(result.value, 2000.0);
/// assert_eq!(result.unit, "g");
/// ```
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult {
    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);

    if from == to {
        return ConversionResult {
            value,
            unit: to,
            original_value: value,
            original_unit: from,
        };
    }

    let category = get_unit_category(&from);
    match conversion_factor(category, &from, &to) {
        Some(factor) => ConversionResult {
            value: value * factor,
            unit: to,
            original_value: value,
            original_unit: from,
        },
        None => {
            debug!(
                "no conversion factor from '{}' to '{}' ({:?}), leaving value unchanged",
                from, to, category
            );
            ConversionResult {
                value,
                unit: to,
                original_value: value,
                original_unit: from,
            }
        }
    }
}

/// Convert a value to its category's standard unit (`g`, `ml`, or `pc`).
///
/// With an ingredient name, a volume-measured quantity whose density is known
/// converts across categories to grams; without a density hit (or without a
/// name) the volume converts to `ml` as usual. Same-category conversions are
/// never overridden by the density path.
pub fn convert_to_standard_unit(
    value: f64,
    unit: &str,
    ingredient_name: Option<&str>,
) -> ConversionResult {
    let from = normalize_unit(unit);
    let category = get_unit_category(&from);

    // Density path: only for a volume measure aimed at the weight standard
    if category == UnitCategory::Volume {
        if let Some(density) = ingredient_name.and_then(density_for) {
            let in_ml = convert(value, &from, "ml");
            return ConversionResult {
                value: in_ml.value * density,
                unit: "g".to_string(),
                original_value: value,
                original_unit: from,
            };
        }
    }

    convert(value, &from, standard_unit(category))
}

/// Convert a value from its category's standard unit into `unit`.
pub fn convert_from_standard_unit(value: f64, unit: &str) -> ConversionResult {
    let to = normalize_unit(unit);
    let category = get_unit_category(&to);
    convert(value, standard_unit(category), &to)
}

/// Rescale a quantity into a friendlier unit for display.
///
/// Applies only to grams at or above 1000 (-> kg) and milliliters at or above
/// 1000 (-> l); every other quantity passes through unchanged. This is a
/// presentation step and is never applied inside the core conversion path.
///
/// # Examples
///
/// ```rust
/// use prepline::conversion::smart_scale;
///
/// assert_eq!(smart_scale(1000.0, "g"), (1.0, "kg".to_string()));
/// assert_eq!(smart_scale(999.0, "g"), (999.0, "g".to_string()));
/// ```
pub fn smart_scale(quantity: f64, unit: &str) -> (f64, String) {
    let normalized = normalize_unit(unit);
    match normalized.as_str() {
        "g" if quantity >= 1000.0 => (quantity / 1000.0, "kg".to_string()),
        "ml" if quantity >= 1000.0 => (quantity / 1000.0, "l".to_string()),
        _ => (quantity, normalized),
    }
}
