//! Property tests for the copy freshness rule.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use modbuild::domain::services::needs_copy;
use modbuild::domain::value_objects::FileStamp;

fn stamp() -> impl Strategy<Value = FileStamp> {
    (0u64..1 << 20, proptest::option::of(0u64..1 << 32)).prop_map(|(len, secs)| {
        FileStamp::new(len, secs.map(|s| SystemTime::UNIX_EPOCH + Duration::from_secs(s)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A missing destination is always copied.
    #[test]
    fn property_missing_destination_needs_copy(source in stamp()) {
        prop_assert!(needs_copy(&source, None));
    }

    /// PROPERTY: An identical stamp never triggers a copy.
    #[test]
    fn property_identical_stamp_is_current(source in stamp()) {
        prop_assert!(!needs_copy(&source, Some(&source)));
    }

    /// PROPERTY: Any length or mtime difference triggers a copy.
    #[test]
    fn property_any_difference_needs_copy(source in stamp(), dest in stamp()) {
        prop_assert_eq!(needs_copy(&source, Some(&dest)), source != dest);
    }
}
