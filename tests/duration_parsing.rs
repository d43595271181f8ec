use std::time::Duration;

use proptest::prelude::*;
use runwrap::types::parse_duration;

proptest! {
    #[test]
    fn every_supported_unit_round_trips(value in 0u64..1_000_000, unit in prop_oneof!["ms", "s", "m", "h"]) {
        let parsed = parse_duration(&format!("{value}{unit}")).unwrap();
        let expected = match unit.as_str() {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value * 60),
            _ => Duration::from_secs(value * 3600),
        };
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn unitless_numbers_are_rejected(value in any::<u64>()) {
        prop_assert!(parse_duration(&value.to_string()).is_err());
    }
}
