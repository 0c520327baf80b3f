//! Property tests for junk classification.

use proptest::prelude::*;

use modbuild::domain::value_objects::{JunkKind, JunkRules};

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,24}").unwrap()
}

/// Flip the ASCII case of each character according to `mask`
fn mixed_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Static web asset manifests match in any letter case.
    #[test]
    fn property_suffix_match_ignores_case(
        stem in file_stem(),
        xml in any::<bool>(),
        mask in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let suffix = if xml { ".StaticWebAssets.xml" } else { ".staticwebassets.runtime.json" };
        let name = format!("{stem}{}", mixed_case(suffix, &mask));
        prop_assert_eq!(JunkRules::default().classify(&name, false), Some(JunkKind::File));
    }

    /// PROPERTY: Names matching no rule are never junk.
    #[test]
    fn property_plain_files_are_kept(
        stem in file_stem()
    ) {
        let name = format!("{stem}.dll");
        prop_assert_eq!(JunkRules::default().classify(&name, false), None);
    }

    /// PROPERTY: Directories match only by exact name.
    #[test]
    fn property_directories_match_exactly(
        name in file_stem()
    ) {
        let rules = JunkRules::default();
        let expected = (name == "ref" || name == "refs").then_some(JunkKind::Directory);
        prop_assert_eq!(rules.classify(&name, true), expected);
        // A file named like a junk directory is not a directory match
        prop_assert_eq!(rules.classify(&name, false), None);
    }

    /// PROPERTY: The data assembly prefix is case-sensitive.
    #[test]
    fn property_prefix_match_is_case_sensitive(
        stem in file_stem()
    ) {
        let rules = JunkRules::default();
        let exact = format!("Smartstore.Data.{stem}.dll");
        let lowered = format!("smartstore.data.{stem}.dll");
        prop_assert_eq!(rules.classify(&exact, false), Some(JunkKind::File));
        prop_assert_eq!(rules.classify(&lowered, false), None);
    }
}
