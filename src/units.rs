//! # Unit Vocabulary
//!
//! Static tables for measurement units: alias normalization, unit categories,
//! conversion factors, and the container-unit set used by the package pattern.
//!
//! ## Features
//!
//! - Normalize free-form unit spellings to canonical tokens ("Tablespoons" -> "tbsp")
//! - Support English and French unit spellings
//! - Classify units into weight, volume, and piece categories
//! - Provide multiplicative conversion factors between same-category units
//!
//! All lookups are pure functions over static tables; nothing here mutates
//! after initialization, so the module is safe to use from concurrent callers.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Measurement category of a canonical unit.
///
/// Every canonical unit belongs to exactly one category; unknown units
/// default to [`UnitCategory::Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    /// Mass units (g, kg, oz, lb, ...)
    Weight,
    /// Volume units (ml, l, tsp, tbsp, cup, ...)
    Volume,
    /// Countable units (pc, clove, slice, can, ...) and anything unrecognized
    Piece,
}

lazy_static! {
    /// Alias spellings -> canonical unit token.
    static ref UNIT_ALIASES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();

        // Weight units
        map.insert("g", "g");
        map.insert("gr", "g");
        map.insert("gram", "g");
        map.insert("grams", "g");
        map.insert("gramme", "g");
        map.insert("grammes", "g");
        map.insert("kg", "kg");
        map.insert("kilo", "kg");
        map.insert("kilos", "kg");
        map.insert("kilogram", "kg");
        map.insert("kilograms", "kg");
        map.insert("kilogramme", "kg");
        map.insert("kilogrammes", "kg");
        map.insert("mg", "mg");
        map.insert("milligram", "mg");
        map.insert("milligrams", "mg");
        map.insert("oz", "oz");
        map.insert("ounce", "oz");
        map.insert("ounces", "oz");
        map.insert("lb", "lb");
        map.insert("lbs", "lb");
        map.insert("pound", "lb");
        map.insert("pounds", "lb");

        // Volume units
        map.insert("ml", "ml");
        map.insert("milliliter", "ml");
        map.insert("milliliters", "ml");
        map.insert("millilitre", "ml");
        map.insert("millilitres", "ml");
        map.insert("cl", "cl");
        map.insert("dl", "dl");
        map.insert("l", "l");
        map.insert("liter", "l");
        map.insert("liters", "l");
        map.insert("litre", "l");
        map.insert("litres", "l");
        map.insert("tsp", "tsp");
        map.insert("teaspoon", "tsp");
        map.insert("teaspoons", "tsp");
        map.insert("cuillère à café", "tsp");
        map.insert("cuillères à café", "tsp");
        map.insert("cac", "tsp");
        map.insert("tbsp", "tbsp");
        map.insert("tbs", "tbsp");
        map.insert("tablespoon", "tbsp");
        map.insert("tablespoons", "tbsp");
        map.insert("cuillère à soupe", "tbsp");
        map.insert("cuillères à soupe", "tbsp");
        map.insert("cas", "tbsp");
        map.insert("cup", "cup");
        map.insert("cups", "cup");
        map.insert("tasse", "cup");
        map.insert("tasses", "cup");
        map.insert("fl oz", "fl oz");
        map.insert("floz", "fl oz");
        map.insert("fluid ounce", "fl oz");
        map.insert("fluid ounces", "fl oz");
        map.insert("pint", "pint");
        map.insert("pints", "pint");
        map.insert("pt", "pint");
        map.insert("quart", "quart");
        map.insert("quarts", "quart");
        map.insert("qt", "quart");
        map.insert("gallon", "gallon");
        map.insert("gallons", "gallon");
        map.insert("gal", "gallon");

        // Piece/count units
        map.insert("pc", "pc");
        map.insert("pcs", "pc");
        map.insert("piece", "pc");
        map.insert("pieces", "pc");
        map.insert("pièce", "pc");
        map.insert("pièces", "pc");
        map.insert("each", "pc");
        map.insert("ea", "pc");
        map.insert("unit", "pc");
        map.insert("units", "pc");
        map.insert("dozen", "dozen");
        map.insert("doz", "dozen");
        map.insert("pinch", "pinch");
        map.insert("pinches", "pinch");
        map.insert("dash", "dash");
        map.insert("dashes", "dash");
        map.insert("clove", "clove");
        map.insert("cloves", "clove");
        map.insert("gousse", "clove");
        map.insert("gousses", "clove");
        map.insert("slice", "slice");
        map.insert("slices", "slice");
        map.insert("tranche", "slice");
        map.insert("tranches", "slice");
        map.insert("bunch", "bunch");
        map.insert("bunches", "bunch");
        map.insert("sprig", "sprig");
        map.insert("sprigs", "sprig");

        // Container units (the package pattern gates on these)
        map.insert("can", "can");
        map.insert("cans", "can");
        map.insert("boîte", "can");
        map.insert("boîtes", "can");
        map.insert("bottle", "bottle");
        map.insert("bottles", "bottle");
        map.insert("bouteille", "bottle");
        map.insert("bouteilles", "bottle");
        map.insert("jar", "jar");
        map.insert("jars", "jar");
        map.insert("pack", "pack");
        map.insert("packs", "pack");
        map.insert("packet", "pack");
        map.insert("packets", "pack");
        map.insert("paquet", "pack");
        map.insert("paquets", "pack");
        map.insert("package", "package");
        map.insert("packages", "package");
        map.insert("pkg", "package");
        map.insert("bag", "bag");
        map.insert("bags", "bag");
        map.insert("sachet", "bag");
        map.insert("sachets", "bag");
        map.insert("container", "container");
        map.insert("containers", "container");
        map.insert("box", "box");
        map.insert("boxes", "box");
        map.insert("head", "head");
        map.insert("heads", "head");
        map.insert("stick", "stick");
        map.insert("sticks", "stick");

        map
    };

    /// Canonical unit -> category. Units absent from this table are `Piece`.
    static ref UNIT_CATEGORIES: HashMap<&'static str, UnitCategory> = {
        let mut map = HashMap::new();

        map.insert("g", UnitCategory::Weight);
        map.insert("kg", UnitCategory::Weight);
        map.insert("mg", UnitCategory::Weight);
        map.insert("oz", UnitCategory::Weight);
        map.insert("lb", UnitCategory::Weight);

        map.insert("ml", UnitCategory::Volume);
        map.insert("cl", UnitCategory::Volume);
        map.insert("dl", UnitCategory::Volume);
        map.insert("l", UnitCategory::Volume);
        map.insert("tsp", UnitCategory::Volume);
        map.insert("tbsp", UnitCategory::Volume);
        map.insert("cup", UnitCategory::Volume);
        map.insert("fl oz", UnitCategory::Volume);
        map.insert("pint", UnitCategory::Volume);
        map.insert("quart", UnitCategory::Volume);
        map.insert("gallon", UnitCategory::Volume);

        map.insert("pc", UnitCategory::Piece);
        map.insert("dozen", UnitCategory::Piece);

        map
    };

    /// Canonical weight unit -> grams per unit.
    static ref WEIGHT_IN_GRAMS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("mg", 0.001);
        map.insert("g", 1.0);
        map.insert("kg", 1000.0);
        map.insert("oz", 28.3495);
        map.insert("lb", 453.592);
        map
    };

    /// Canonical volume unit -> milliliters per unit.
    ///
    /// Culinary metric values for spoon/cup measures (5/15/240), US customary
    /// factors for the imperial volumes.
    static ref VOLUME_IN_MILLILITERS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("ml", 1.0);
        map.insert("cl", 10.0);
        map.insert("dl", 100.0);
        map.insert("l", 1000.0);
        map.insert("tsp", 5.0);
        map.insert("tbsp", 15.0);
        map.insert("cup", 240.0);
        map.insert("fl oz", 29.5735);
        map.insert("pint", 473.176);
        map.insert("quart", 946.353);
        map.insert("gallon", 3785.41);
        map
    };

    /// Canonical piece unit -> pieces per unit.
    static ref PIECE_COUNTS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("pc", 1.0);
        map.insert("dozen", 12.0);
        map
    };

    /// Canonical container units accepted by the package parse pattern.
    static ref CONTAINER_UNITS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for unit in [
            "can", "bottle", "jar", "pack", "package", "bag", "container", "box", "head",
            "stick",
        ] {
            set.insert(unit);
        }
        set
    };
}

/// Normalize a free-form unit spelling to its canonical token.
///
/// Lowercases, trims, strips trailing punctuation, and maps through the alias
/// table, with a singularization fallback for regular plurals. Unknown tokens
/// pass through unchanged and are treated as opaque piece-category units.
///
/// # Examples
///
/// ```rust
/// use prepline::units::normalize_unit;
///
/// assert_eq!(normalize_unit("Tablespoons"), "tbsp");
/// assert_eq!(normalize_unit("Tbsp."), "tbsp");
/// assert_eq!(normalize_unit("grammes"), "g");
/// assert_eq!(normalize_unit("widget"), "widget");
/// ```
pub fn normalize_unit(raw: &str) -> String {
    let token = raw
        .trim()
        .trim_end_matches(['.', ',', ';', ':'])
        .to_lowercase();

    if let Some(canonical) = UNIT_ALIASES.get(token.as_str()) {
        return (*canonical).to_string();
    }

    // Regular plural fallback ("widgets" -> "widget")
    if token.len() > 1 && token.ends_with('s') {
        let singular = &token[..token.len() - 1];
        if let Some(canonical) = UNIT_ALIASES.get(singular) {
            return (*canonical).to_string();
        }
    }

    token
}

/// Look up the category of a canonical unit; unknown units are `Piece`.
pub fn get_unit_category(unit: &str) -> UnitCategory {
    UNIT_CATEGORIES
        .get(normalize_unit(unit).as_str())
        .copied()
        .unwrap_or(UnitCategory::Piece)
}

/// The category-wide reference unit used for internal comparison.
pub fn standard_unit(category: UnitCategory) -> &'static str {
    match category {
        UnitCategory::Weight => "g",
        UnitCategory::Volume => "ml",
        UnitCategory::Piece => "pc",
    }
}

/// Multiplicative factor converting `from` into `to` within one category.
///
/// Returns the factor such that `value_in_to = value_in_from * factor`, or
/// `None` when either unit has no table entry for the category. Callers must
/// leave the value unconverted on `None` rather than guess.
pub fn conversion_factor(category: UnitCategory, from: &str, to: &str) -> Option<f64> {
    let table: &HashMap<&'static str, f64> = match category {
        UnitCategory::Weight => &WEIGHT_IN_GRAMS,
        UnitCategory::Volume => &VOLUME_IN_MILLILITERS,
        UnitCategory::Piece => &PIECE_COUNTS,
    };

    let from_standard = table.get(normalize_unit(from).as_str())?;
    let to_standard = table.get(normalize_unit(to).as_str())?;
    Some(from_standard / to_standard)
}

/// Whether a unit spelling normalizes to one of the known container units.
pub fn is_container_unit(unit: &str) -> bool {
    CONTAINER_UNITS.contains(normalize_unit(unit).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_unit("tbsp"), "tbsp");
        assert_eq!(normalize_unit("Tablespoon"), "tbsp");
        assert_eq!(normalize_unit("TBSP"), "tbsp");
        assert_eq!(normalize_unit("Tbsp."), "tbsp");
        assert_eq!(normalize_unit("cups"), "cup");
        assert_eq!(normalize_unit(" Grams "), "g");
        assert_eq!(normalize_unit("litres"), "l");
    }

    #[test]
    fn test_normalize_french_aliases() {
        assert_eq!(normalize_unit("grammes"), "g");
        assert_eq!(normalize_unit("cuillère à soupe"), "tbsp");
        assert_eq!(normalize_unit("gousses"), "clove");
        assert_eq!(normalize_unit("boîte"), "can");
    }

    #[test]
    fn test_normalize_unknown_passthrough() {
        assert_eq!(normalize_unit("widget"), "widget");
        assert_eq!(normalize_unit("Large"), "large");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Tablespoons", "KG", "fl oz", "widget", "pièces", "lbs."] {
            let once = normalize_unit(raw);
            assert_eq!(normalize_unit(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(get_unit_category("kg"), UnitCategory::Weight);
        assert_eq!(get_unit_category("Tablespoons"), UnitCategory::Volume);
        assert_eq!(get_unit_category("pc"), UnitCategory::Piece);
        assert_eq!(get_unit_category("mystery"), UnitCategory::Piece);
    }

    #[test]
    fn test_standard_units() {
        assert_eq!(standard_unit(UnitCategory::Weight), "g");
        assert_eq!(standard_unit(UnitCategory::Volume), "ml");
        assert_eq!(standard_unit(UnitCategory::Piece), "pc");
    }

    #[test]
    fn test_conversion_factors() {
        let f = conversion_factor(UnitCategory::Weight, "kg", "g").unwrap();
        assert_eq!(f, 1000.0);

        let f = conversion_factor(UnitCategory::Volume, "tbsp", "tsp").unwrap();
        assert!((f - 3.0).abs() < 1e-9);

        assert!(conversion_factor(UnitCategory::Weight, "kg", "widget").is_none());
        assert!(conversion_factor(UnitCategory::Piece, "clove", "pc").is_none());
    }

    #[test]
    fn test_container_units() {
        assert!(is_container_unit("can"));
        assert!(is_container_unit("Cans"));
        assert!(is_container_unit("pkg"));
        assert!(!is_container_unit("cup"));
        assert!(!is_container_unit("g"));
    }
}
