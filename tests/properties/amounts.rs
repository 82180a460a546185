//! Property tests for payment amount parsing.

use proptest::prelude::*;

use dishdesk::Purchase;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_amount` never panics on arbitrary small input.
    #[test]
    fn property_parse_amount_never_panics(input in "(?s).{0,64}") {
        let _ = Purchase::parse_amount(&input);
    }

    /// PROPERTY: Any non-negative decimal with up to two fraction digits
    /// parses, and surrounding whitespace is ignored.
    #[test]
    fn property_parse_amount_accepts_plain_decimals(
        whole in 0u32..100_000,
        cents in 0u32..100,
    ) {
        let raw = format!(" {whole}.{cents:02} ");
        let parsed = Purchase::parse_amount(&raw).expect("plain decimal parses");
        prop_assert!(parsed >= 0.0);
        prop_assert!((parsed - (f64::from(whole) + f64::from(cents) / 100.0)).abs() < 1e-9);
    }

    /// PROPERTY: Negative input is always rejected.
    #[test]
    fn property_parse_amount_rejects_negatives(amount in 0.001f64..100_000.0) {
        let raw = format!("-{amount}");
        prop_assert!(Purchase::parse_amount(&raw).is_err());
    }
}
