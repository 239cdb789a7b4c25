#[cfg(test)]
mod tests {
    use prepline::localization::localize_name;

    #[test]
    fn test_exact_variant_match() {
        assert_eq!(localize_name("capsicum"), "bell pepper");
        assert_eq!(localize_name("Aubergine"), "eggplant");
        assert_eq!(localize_name("PRAWNS"), "shrimp");
    }

    #[test]
    fn test_variant_inside_longer_name() {
        assert_eq!(localize_name("grilled capsicum strips"), "grilled bell pepper strips");
        assert_eq!(localize_name("fresh coriander, chopped"), "fresh cilantro, chopped");
    }

    #[test]
    fn test_every_occurring_variant_replaced() {
        assert_eq!(
            localize_name("courgette, aubergine and capsicum medley"),
            "zucchini, eggplant and bell pepper medley"
        );
    }

    #[test]
    fn test_localization_is_idempotent() {
        for name in ["capsicum", "roast beetroot salad", "garlic", "spring onion pancakes"] {
            let once = localize_name(name);
            assert_eq!(localize_name(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_no_partial_word_replacement() {
        assert_eq!(localize_name("sprocket wrench"), "sprocket wrench");
        assert_eq!(localize_name("swedenborgian bread"), "swedenborgian bread");
    }

    #[test]
    fn test_non_variant_passthrough_preserves_case() {
        assert_eq!(localize_name("San Marzano Tomatoes"), "San Marzano Tomatoes");
    }
}
