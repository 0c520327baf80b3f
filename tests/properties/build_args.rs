//! Property tests for option string parsing.

use proptest::prelude::*;

use modbuild::BuildArgs;

fn path_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

fn module_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(path_segment(), 1..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,256}"
    ) {
        let args = BuildArgs::parse(&s);
        let _ = args.module_paths();
        let _ = args.unknown_keys().count();
    }

    /// PROPERTY: Every listed module path comes back once, in input order.
    #[test]
    fn property_module_paths_preserve_order(
        paths in proptest::collection::vec(module_path(), 1..=6)
    ) {
        let input = format!("ModulePath={}", paths.join(";"));
        prop_assert_eq!(BuildArgs::parse(&input).module_paths(), paths);
    }

    /// PROPERTY: Whitespace and empty tokens around paths are ignored.
    #[test]
    fn property_padding_is_ignored(
        paths in proptest::collection::vec(module_path(), 1..=4),
        pad in "[ \t]{0,3}"
    ) {
        let padded: Vec<String> = paths.iter().map(|p| format!("{pad}{p}{pad}")).collect();
        let input = format!("ModulePath={};;", padded.join(";;"));
        prop_assert_eq!(BuildArgs::parse(&input).module_paths(), paths);
    }

    /// PROPERTY: A later `key=value` option ends the module path list.
    #[test]
    fn property_following_option_ends_list(
        paths in proptest::collection::vec(module_path(), 1..=4),
        value in path_segment()
    ) {
        let input = format!("ModulePath={};Configuration={value}", paths.join(";"));
        let args = BuildArgs::parse(&input);
        prop_assert_eq!(args.module_paths(), paths);
        prop_assert_eq!(args.get("Configuration"), Some(value.as_str()));
    }
}
