//! # Ingredient String Parser
//!
//! Converts one free-text ingredient line into structured
//! `{quantity, unit, name}` data using an ordered set of grammar patterns.
//!
//! ## Features
//!
//! - Ordered pattern list with fixed precedence (first match wins)
//! - Unicode vulgar fraction handling ("½ lb beef" -> 0.5 lb beef)
//! - Mixed and simple ASCII fractions ("1 1/2 cups flour")
//! - Package notation ("1 (14-oz.) can chickpeas")
//! - Decimal commas alongside decimal points ("1,5 l")
//! - Unit normalization and regional name localization on every match
//!
//! A line with no discernible quantity (e.g. "salt") is un-parseable by
//! design and yields `None`, never an error. A token grammar cannot always
//! tell a unit word from a descriptor: "1 cinnamon stick" parses "cinnamon"
//! as a pseudo-unit. That trade-off is intentional and covered by tests
//! asserting the current behavior.

use crate::localization::localize_name;
use crate::units::{is_container_unit, normalize_unit};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A structured ingredient extracted from one line of text.
///
/// Invariant: `quantity > 0` whenever a pattern matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Parsed amount (fractions resolved to their decimal value)
    pub quantity: f64,
    /// Canonical unit token; `pc` when the line carried no unit word
    pub unit: String,
    /// Localized ingredient name
    pub name: String,
}

/// Configuration options for line parsing.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Whether to pass extracted names through the regional name localizer
    pub localize_names: bool,
    /// Maximum length for extracted names (longer captures are truncated)
    pub max_name_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            localize_names: true,
            max_name_length: 100,
        }
    }
}

/// Result of parsing a multi-line block of ingredient text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLines {
    /// Successfully parsed ingredients, in input order
    pub ingredients: Vec<ParsedIngredient>,
    /// Lines no pattern matched, kept for caller diagnostics
    pub unparsed_lines: Vec<String>,
}

/// Unicode vulgar fraction glyphs and their ASCII equivalents.
const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('¼', " 1/4"),
    ('½', " 1/2"),
    ('¾', " 3/4"),
    ('⅓', " 1/3"),
    ('⅔', " 2/3"),
    ('⅕', " 1/5"),
    ('⅖', " 2/5"),
    ('⅗', " 3/5"),
    ('⅘', " 4/5"),
    ('⅙', " 1/6"),
    ('⅚', " 5/6"),
    ('⅛', " 1/8"),
    ('⅜', " 3/8"),
    ('⅝', " 5/8"),
    ('⅞', " 7/8"),
];

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("pattern should be valid");

    /// Package notation: `1 (14-oz.) can chickpeas`
    static ref PACKAGE: Regex = Regex::new(
        r"^(?P<qty>\d+(?:[.,]\d+)?)\s*\(\s*(?P<pkg_qty>\d+(?:[.,]\d+)?)\s*[- ]?\s*(?P<pkg_unit>[a-zA-Zà-ÿ]+\.?)\s*\)\s*(?P<container>[a-zA-Zà-ÿ]+\.?)\s+(?P<name>.+)$"
    )
    .expect("pattern should be valid");

    /// Mixed fraction: `1 1/2 cups flour`
    static ref MIXED_FRACTION: Regex = Regex::new(
        r"^(?P<whole>\d+)\s+(?P<num>\d+)\s*/\s*(?P<den>\d+)\s+(?P<unit>[-–]?[a-zA-Zà-ÿ]+\.?)\s+(?P<name>.+)$"
    )
    .expect("pattern should be valid");

    /// Simple fraction: `1/2 lb chicken`
    static ref SIMPLE_FRACTION: Regex = Regex::new(
        r"^(?P<num>\d+)\s*/\s*(?P<den>\d+)\s+(?P<unit>[-–]?[a-zA-Zà-ÿ]+\.?)\s+(?P<name>.+)$"
    )
    .expect("pattern should be valid");

    /// Parenthetical prefix: `(380 g) arborio rice`
    static ref PAREN_PREFIX: Regex = Regex::new(
        r"^\(\s*(?P<qty>\d+(?:[.,]\d+)?)\s*(?P<unit>[a-zA-Zà-ÿ]+\.?)\s*\)\s*(?P<name>.+)$"
    )
    .expect("pattern should be valid");

    /// Generic leading number: `1.2 l chicken broth`, `400g tomato`, `2 eggs`
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^(?P<qty>\d+(?:[.,]\d+)?)\s*(?:(?P<unit>[-–]?[a-zA-Zà-ÿ]+\.?)\s+)?(?P<name>.+)$"
    )
    .expect("pattern should be valid");
}

/// One parse attempt over a preprocessed line.
type Strategy = fn(&str) -> Option<RawMatch>;

/// The ordered strategy list; precedence is the slice order.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("package", match_package),
    ("mixed_fraction", match_mixed_fraction),
    ("simple_fraction", match_simple_fraction),
    ("paren_prefix", match_paren_prefix),
    ("leading_number", match_leading_number),
];

/// A strategy match before unit normalization and name localization.
struct RawMatch {
    quantity: f64,
    unit: Option<String>,
    name: String,
}

/// Parse one ingredient line with the default configuration.
///
/// # Examples
///
/// ```rust
/// use prepline::parser::parse_ingredient;
///
/// let parsed = parse_ingredient("1 1/2 cups flour").unwrap();
/// assert_eq!(parsed.quantity, 1.5);
/// assert_eq!(parsed.unit, "cup");
/// assert_eq!(parsed.name, "flour");
///
/// assert!(parse_ingredient("salt").is_none());
/// ```
pub fn parse_ingredient(line: &str) -> Option<ParsedIngredient> {
    parse_ingredient_with_config(line, &ParserConfig::default())
}

/// Parse one ingredient line with explicit configuration.
pub fn parse_ingredient_with_config(line: &str, config: &ParserConfig) -> Option<ParsedIngredient> {
    let prepared = preprocess(line);
    if prepared.is_empty() {
        return None;
    }

    for (strategy_name, strategy) in STRATEGIES {
        if let Some(raw) = strategy(&prepared) {
            trace!("line {:?} matched strategy '{}'", prepared, strategy_name);
            if raw.quantity <= 0.0 || !raw.quantity.is_finite() {
                debug!(
                    "strategy '{}' matched {:?} with non-positive quantity, treating as un-parseable",
                    strategy_name, prepared
                );
                return None;
            }
            return Some(finalize(raw, config));
        }
    }

    debug!("no quantity/unit pattern matched line {:?}", prepared);
    None
}

/// Parse a multi-line block of ingredient text, one ingredient per line.
///
/// Blank lines are skipped; lines no pattern matches are collected in
/// `unparsed_lines` rather than dropped.
pub fn parse_ingredient_lines(text: &str) -> ParsedLines {
    let mut result = ParsedLines {
        ingredients: Vec::new(),
        unparsed_lines: Vec::new(),
    };

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_ingredient(line) {
            Some(ingredient) => result.ingredients.push(ingredient),
            None => result.unparsed_lines.push(line.to_string()),
        }
    }

    debug!(
        "parsed {} ingredient lines, {} un-parseable",
        result.ingredients.len(),
        result.unparsed_lines.len()
    );
    result
}

/// Trim, expand unicode vulgar fractions, and collapse whitespace runs.
fn preprocess(line: &str) -> String {
    let mut text = line.trim().to_string();
    for (glyph, ascii) in VULGAR_FRACTIONS {
        if text.contains(*glyph) {
            text = text.replace(*glyph, ascii);
        }
    }
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Apply unit normalization, name cleanup, and localization to a raw match.
fn finalize(raw: RawMatch, config: &ParserConfig) -> ParsedIngredient {
    let unit = match raw.unit {
        Some(token) => normalize_unit(token.trim_start_matches(['-', '–'])),
        None => "pc".to_string(),
    };

    let mut name = clean_name(&raw.name);
    if name.chars().count() > config.max_name_length {
        name = name.chars().take(config.max_name_length).collect();
        name = name.trim_end().to_string();
    }
    if config.localize_names {
        name = localize_name(&name);
    }

    ParsedIngredient {
        quantity: raw.quantity,
        unit,
        name,
    }
}

/// Strip leading connective words and stray punctuation from a name capture.
fn clean_name(raw: &str) -> String {
    let mut name = raw.trim().trim_matches([',', ';']).trim();
    for preposition in ["of ", "de ", "d'"] {
        if name.len() > preposition.len() {
            if let (Some(prefix), Some(rest)) =
                (name.get(..preposition.len()), name.get(preposition.len()..))
            {
                if prefix.eq_ignore_ascii_case(preposition) {
                    name = rest.trim_start();
                    break;
                }
            }
        }
    }
    name.to_string()
}

/// Parse a numeric literal, accepting decimal commas.
fn parse_number(text: &str) -> Option<f64> {
    text.replace(',', ".").parse::<f64>().ok()
}

fn match_package(line: &str) -> Option<RawMatch> {
    let captures = PACKAGE.captures(line)?;
    // Only container units qualify; otherwise fall through to later patterns
    let container = captures.name("container")?.as_str();
    if !is_container_unit(container) {
        return None;
    }
    Some(RawMatch {
        quantity: parse_number(&captures["qty"])?,
        unit: Some(container.to_string()),
        name: captures["name"].to_string(),
    })
}

fn match_mixed_fraction(line: &str) -> Option<RawMatch> {
    let captures = MIXED_FRACTION.captures(line)?;
    let whole: f64 = parse_number(&captures["whole"])?;
    let num: f64 = parse_number(&captures["num"])?;
    let den: f64 = parse_number(&captures["den"])?;
    if den == 0.0 {
        return None;
    }
    Some(RawMatch {
        quantity: whole + num / den,
        unit: Some(captures["unit"].to_string()),
        name: captures["name"].to_string(),
    })
}

fn match_simple_fraction(line: &str) -> Option<RawMatch> {
    let captures = SIMPLE_FRACTION.captures(line)?;
    let num: f64 = parse_number(&captures["num"])?;
    let den: f64 = parse_number(&captures["den"])?;
    if den == 0.0 {
        return None;
    }
    Some(RawMatch {
        quantity: num / den,
        unit: Some(captures["unit"].to_string()),
        name: captures["name"].to_string(),
    })
}

fn match_paren_prefix(line: &str) -> Option<RawMatch> {
    let captures = PAREN_PREFIX.captures(line)?;
    Some(RawMatch {
        quantity: parse_number(&captures["qty"])?,
        unit: Some(captures["unit"].to_string()),
        name: captures["name"].to_string(),
    })
}

fn match_leading_number(line: &str) -> Option<RawMatch> {
    let captures = LEADING_NUMBER.captures(line)?;
    Some(RawMatch {
        quantity: parse_number(&captures["qty"])?,
        unit: captures.name("unit").map(|m| m.as_str().to_string()),
        name: captures["name"].to_string(),
    })
}
