//! # Ingredient Name Localizer
//!
//! Maps regional ingredient name variants to a single canonical display name
//! ("capsicum" -> "bell pepper", "coriander" -> "cilantro"). This is a simple
//! spell-table substitution over a static variant map, not natural-language
//! processing: an exact (case-insensitive) match returns the canonical form
//! directly, otherwise every variant occurring in the input is replaced with
//! a case-insensitive whole-word regex pass.

use lazy_static::lazy_static;
use regex::Regex;

/// Regional variant spellings and their canonical display names.
///
/// Multi-word variants are listed before their single-word substrings so the
/// substitution pass rewrites the longest form first.
const NAME_VARIANTS: &[(&str, &str)] = &[
    ("bicarbonate of soda", "baking soda"),
    ("plain flour", "all-purpose flour"),
    ("wholemeal flour", "whole wheat flour"),
    ("strong flour", "bread flour"),
    ("caster sugar", "superfine sugar"),
    ("icing sugar", "powdered sugar"),
    ("double cream", "heavy cream"),
    ("single cream", "light cream"),
    ("porridge oats", "rolled oats"),
    ("spring onions", "scallions"),
    ("spring onion", "scallion"),
    ("broad beans", "fava beans"),
    ("mange tout", "snow peas"),
    ("minced beef", "ground beef"),
    ("capsicums", "bell peppers"),
    ("capsicum", "bell pepper"),
    ("aubergines", "eggplants"),
    ("aubergine", "eggplant"),
    ("courgettes", "zucchinis"),
    ("courgette", "zucchini"),
    ("coriander", "cilantro"),
    ("rocket", "arugula"),
    ("beetroots", "beets"),
    ("beetroot", "beet"),
    ("swede", "rutabaga"),
    ("gherkins", "pickles"),
    ("gherkin", "pickle"),
    ("prawns", "shrimp"),
    ("prawn", "shrimp"),
    ("cornflour", "cornstarch"),
];

lazy_static! {
    /// Compiled whole-word patterns, one per variant, in table order.
    static ref VARIANT_PATTERNS: Vec<(Regex, &'static str)> = NAME_VARIANTS
        .iter()
        .map(|(variant, canonical)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(variant));
            (
                Regex::new(&pattern).expect("variant pattern should be valid"),
                *canonical,
            )
        })
        .collect();
}

/// Canonicalize regional name variants within an ingredient name.
///
/// An input that matches a variant exactly (case-insensitively) returns the
/// canonical form directly; otherwise all pairs are applied as whole-word
/// replacements so multi-word inputs localize every occurring variant.
///
/// # Examples
///
/// ```rust
/// use prepline::localization::localize_name;
///
/// assert_eq!(localize_name("Capsicum"), "bell pepper");
/// assert_eq!(localize_name("roasted aubergine slices"), "roasted eggplant slices");
/// assert_eq!(localize_name("garlic"), "garlic");
/// ```
pub fn localize_name(name: &str) -> String {
    let trimmed = name.trim();
    let lowered = trimmed.to_lowercase();

    // Exact match takes precedence over partial substitution
    for (variant, canonical) in NAME_VARIANTS {
        if lowered == *variant {
            return (*canonical).to_string();
        }
    }

    let mut result = trimmed.to_string();
    for (pattern, canonical) in VARIANT_PATTERNS.iter() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *canonical).into_owned();
        }
    }
    result
}
