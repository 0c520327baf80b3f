//! Module descriptor (`module.json`)

use serde::Deserialize;

/// The subset of `module.json` the deployer reads
///
/// Unknown fields are ignored. Field names are matched case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleDescriptor {
    /// Module identifier (informational only)
    #[serde(rename = "SystemName", default)]
    pub system_name: Option<String>,

    /// Libraries that must be copied next to the module assembly
    #[serde(rename = "PrivateReferences", default)]
    pub private_references: Option<Vec<String>>,
}

impl ModuleDescriptor {
    /// Parse from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Private references, or `None` when the module declares none
    pub fn private_references(&self) -> Option<&[String]> {
        self.private_references.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields_and_ignores_others() {
        let json = r#"{
            "SystemName": "Smartstore.Blog",
            "FriendlyName": "Blog",
            "Version": "5.0.0",
            "PrivateReferences": ["Markdig", "AngleSharp"]
        }"#;
        let descriptor = ModuleDescriptor::from_json(json).unwrap();
        assert_eq!(descriptor.system_name.as_deref(), Some("Smartstore.Blog"));
        assert_eq!(
            descriptor.private_references(),
            Some(&["Markdig".to_string(), "AngleSharp".to_string()][..])
        );
    }

    #[test]
    fn missing_or_null_references_are_none() {
        let missing = ModuleDescriptor::from_json(r#"{"SystemName":"X"}"#).unwrap();
        assert!(missing.private_references().is_none());

        let null = ModuleDescriptor::from_json(r#"{"PrivateReferences":null}"#).unwrap();
        assert!(null.private_references().is_none());
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let descriptor = ModuleDescriptor::from_json(r#"{"privateReferences":["Foo"]}"#).unwrap();
        assert!(descriptor.private_references().is_none());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(ModuleDescriptor::from_json(r#"{"PrivateReferences":"Foo"}"#).is_err());
        assert!(ModuleDescriptor::from_json("not json").is_err());
    }
}
