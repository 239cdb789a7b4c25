#[cfg(test)]
mod tests {
    use prepline::conversion::{
        convert, convert_from_standard_unit, convert_to_standard_unit, smart_scale,
    };
    use prepline::units::{get_unit_category, normalize_unit, UnitCategory};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_round_trip_within_tolerance() {
        let pairs = [
            ("g", "kg"),
            ("g", "oz"),
            ("lb", "g"),
            ("ml", "l"),
            ("cup", "ml"),
            ("tsp", "tbsp"),
            ("pc", "dozen"),
        ];
        for (u, v) in pairs {
            let there = convert(7.25, u, v);
            let back = convert(there.value, v, u);
            assert!(
                (back.value - 7.25).abs() < EPSILON,
                "round trip {u}<->{v}: got {}",
                back.value
            );
        }
    }

    #[test]
    fn test_normalization_idempotent() {
        for raw in ["Tablespoons", "TBSP.", "grammes", "Cups", "widget", "fl oz", "lbs"] {
            let once = normalize_unit(raw);
            assert_eq!(normalize_unit(&once), once);
        }
    }

    #[test]
    fn test_unknown_units_default_to_piece() {
        assert_eq!(get_unit_category("scoop"), UnitCategory::Piece);
        assert_eq!(get_unit_category("large"), UnitCategory::Piece);
    }

    #[test]
    fn test_missing_factor_leaves_value_unchanged() {
        let result = convert(5.0, "scoop", "ml");
        assert_eq!(result.value, 5.0);
        assert_eq!(result.unit, "ml");
        assert_eq!(result.original_unit, "scoop");
    }

    #[test]
    fn test_standard_unit_conversions() {
        assert_eq!(convert_to_standard_unit(2.0, "kg", None).value, 2000.0);
        assert_eq!(convert_to_standard_unit(2.0, "kg", None).unit, "g");

        let volume = convert_to_standard_unit(2.0, "cups", None);
        assert!((volume.value - 480.0).abs() < EPSILON);
        assert_eq!(volume.unit, "ml");

        let piece = convert_to_standard_unit(3.0, "pc", None);
        assert_eq!(piece.value, 3.0);
        assert_eq!(piece.unit, "pc");
    }

    #[test]
    fn test_density_conversion_for_named_ingredient() {
        // 2 cups of honey: 480 ml * 1.42 g/ml
        let result = convert_to_standard_unit(2.0, "cup", Some("honey"));
        assert!((result.value - 681.6).abs() < 1e-6);
        assert_eq!(result.unit, "g");
    }

    #[test]
    fn test_density_alias_through_localizer() {
        let direct = convert_to_standard_unit(100.0, "ml", Some("bell pepper"));
        let via_alias = convert_to_standard_unit(100.0, "ml", Some("Capsicum"));
        assert_eq!(direct.value, via_alias.value);
        assert_eq!(via_alias.unit, "g");
    }

    #[test]
    fn test_density_inactive_for_weight_measure() {
        let result = convert_to_standard_unit(500.0, "g", Some("honey"));
        assert_eq!(result.value, 500.0);
        assert_eq!(result.unit, "g");
    }

    #[test]
    fn test_from_standard_inverts_to_standard() {
        let to_standard = convert_to_standard_unit(3.0, "lb", None);
        let back = convert_from_standard_unit(to_standard.value, "lb");
        assert!((back.value - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_smart_scale_thresholds_and_passthrough() {
        assert_eq!(smart_scale(1000.0, "g"), (1.0, "kg".to_string()));
        assert_eq!(smart_scale(999.0, "g"), (999.0, "g".to_string()));
        assert_eq!(smart_scale(1000.0, "milliliters"), (1.0, "l".to_string()));
        assert_eq!(smart_scale(3.0, "cup"), (3.0, "cup".to_string()));
        assert_eq!(smart_scale(1000000.0, "kg"), (1000000.0, "kg".to_string()));
    }
}
