//! Junk Rules Value Object
//!
//! Naming rules for build byproducts that are pruned from module directories.

use std::fmt;

/// Directory names produced by reference-assembly generation
pub const DEFAULT_JUNK_DIRECTORIES: &[&str] = &["ref", "refs"];

/// Host data assemblies that must never ship inside a module
pub const DEFAULT_JUNK_FILE_PREFIXES: &[&str] = &["Smartstore.Data."];

/// Static web asset manifests (matched case-insensitively)
pub const DEFAULT_JUNK_FILE_SUFFIXES: &[&str] =
    &[".StaticWebAssets.xml", ".staticwebassets.runtime.json"];

/// What kind of junk entry was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunkKind {
    /// Whole directory, removed recursively
    Directory,
    /// Single file
    File,
}

impl fmt::Display for JunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JunkKind::Directory => write!(f, "directory"),
            JunkKind::File => write!(f, "file"),
        }
    }
}

/// Rules deciding which immediate children of a module directory are junk
///
/// - directories match by exact name
/// - files match by case-sensitive prefix or case-insensitive suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkRules {
    directories: Vec<String>,
    file_prefixes: Vec<String>,
    file_suffixes: Vec<String>,
}

impl JunkRules {
    pub fn new(
        directories: Vec<String>,
        file_prefixes: Vec<String>,
        file_suffixes: Vec<String>,
    ) -> Self {
        Self {
            directories,
            file_prefixes,
            file_suffixes: file_suffixes
                .into_iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Classify a directory entry by name
    pub fn classify(&self, name: &str, is_dir: bool) -> Option<JunkKind> {
        if is_dir {
            return self
                .directories
                .iter()
                .any(|d| d == name)
                .then_some(JunkKind::Directory);
        }

        let lower = name.to_ascii_lowercase();
        let matched = self.file_prefixes.iter().any(|p| name.starts_with(p.as_str()))
            || self.file_suffixes.iter().any(|s| lower.ends_with(s.as_str()));
        matched.then_some(JunkKind::File)
    }

    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn file_prefixes(&self) -> &[String] {
        &self.file_prefixes
    }

    pub fn file_suffixes(&self) -> &[String] {
        &self.file_suffixes
    }
}

impl Default for JunkRules {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self::new(
            owned(DEFAULT_JUNK_DIRECTORIES),
            owned(DEFAULT_JUNK_FILE_PREFIXES),
            owned(DEFAULT_JUNK_FILE_SUFFIXES),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_directories_are_junk() {
        let rules = JunkRules::default();
        assert_eq!(rules.classify("ref", true), Some(JunkKind::Directory));
        assert_eq!(rules.classify("refs", true), Some(JunkKind::Directory));
        assert_eq!(rules.classify("Refs", true), None);
        assert_eq!(rules.classify("wwwroot", true), None);
    }

    #[test]
    fn ref_named_file_is_not_junk() {
        let rules = JunkRules::default();
        assert_eq!(rules.classify("ref", false), None);
    }

    #[test]
    fn data_assemblies_are_junk() {
        let rules = JunkRules::default();
        assert_eq!(
            rules.classify("Smartstore.Data.SqlServer.dll", false),
            Some(JunkKind::File)
        );
        assert_eq!(rules.classify("smartstore.data.x.dll", false), None);
        assert_eq!(rules.classify("Smartstore.Core.dll", false), None);
    }

    #[test]
    fn data_prefix_does_not_match_directories() {
        let rules = JunkRules::default();
        assert_eq!(rules.classify("Smartstore.Data.Stuff", true), None);
    }

    #[test]
    fn static_asset_manifests_match_case_insensitively() {
        let rules = JunkRules::default();
        assert_eq!(
            rules.classify("Smartstore.Blog.StaticWebAssets.xml", false),
            Some(JunkKind::File)
        );
        assert_eq!(
            rules.classify("Smartstore.Blog.staticwebassets.xml", false),
            Some(JunkKind::File)
        );
        assert_eq!(
            rules.classify("Smartstore.Blog.StaticWebAssets.Runtime.JSON", false),
            Some(JunkKind::File)
        );
        assert_eq!(rules.classify("Smartstore.Blog.deps.json", false), None);
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let rules = JunkRules::new(
            vec!["obj".to_string()],
            vec!["Tmp.".to_string()],
            vec![".PDB".to_string()],
        );
        assert_eq!(rules.classify("obj", true), Some(JunkKind::Directory));
        assert_eq!(rules.classify("ref", true), None);
        assert_eq!(rules.classify("Tmp.a", false), Some(JunkKind::File));
        assert_eq!(rules.classify("Module.pdb", false), Some(JunkKind::File));
    }
}
