//! # prepline
//!
//! Recipe-ingredient normalization and menu-level aggregation.
//!
//! The crate takes free-text or loosely-structured ingredient records,
//! extracts structured quantity/unit/name triples, converts them within a
//! canonical unit system (including density-based mass/volume conversion for
//! known foods), and aggregates quantities across many recipes and dishes
//! into per-section prep totals with full source attribution.
//!
//! Persistence, HTTP, and auth are the caller's responsibility: every entry
//! point consumes plain in-memory records and returns plain values.
//!
//! ## Usage
//!
//! ```rust
//! use prepline::parser::parse_ingredient;
//! use prepline::conversion::smart_scale;
//!
//! let parsed = parse_ingredient("1 1/2 cups flour").unwrap();
//! assert_eq!(parsed.quantity, 1.5);
//!
//! assert_eq!(smart_scale(1500.0, "g"), (1.5, "kg".to_string()));
//! ```

pub mod aggregation;
pub mod conversion;
pub mod localization;
pub mod model;
pub mod parser;
pub mod units;

pub use aggregation::aggregate_menu;
pub use conversion::{convert, convert_from_standard_unit, convert_to_standard_unit, smart_scale};
pub use localization::localize_name;
pub use parser::{parse_ingredient, parse_ingredient_lines, ParsedIngredient};
pub use units::{get_unit_category, normalize_unit, UnitCategory};
