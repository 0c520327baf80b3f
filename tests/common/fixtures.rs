//! Test fixtures - reusable manifest content.

#![allow(dead_code)]

/// Package the default fixtures publish into the package folder
pub const MARKDIG_PACKAGE_PATH: &str = "markdig/0.33.0";

/// Compile asset of the Markdig package, relative to its package folder
pub const MARKDIG_ASSET: &str = "lib/net6.0/Markdig.dll";

/// Content of the published Markdig assembly
pub const MARKDIG_CONTENT: &str = "markdig-binary";

/// Dependency manifest shared by fixture modules.
///
/// `Markdig` resolves from the package folder, `Ghost` is listed but never
/// published, and the module itself is a project library.
pub const DEPS_JSON: &str = r#"{
  "runtimeTarget": { "name": ".NETCoreApp,Version=v8.0" },
  "targets": {
    ".NETCoreApp,Version=v8.0": {
      "Smartstore.Blog/5.0.0": { "compile": { "Smartstore.Blog.dll": {} } },
      "Markdig/0.33.0": { "compile": { "lib/net6.0/Markdig.dll": {} } },
      "Ghost/1.0.0": { "compile": { "lib/net6.0/Ghost.dll": {} } }
    }
  },
  "libraries": {
    "Smartstore.Blog/5.0.0": { "type": "project" },
    "Markdig/0.33.0": { "type": "package", "path": "markdig/0.33.0" },
    "Ghost/1.0.0": { "type": "package", "path": "ghost/1.0.0" }
  }
}"#;

/// Descriptor JSON for a module with the given private references
pub fn module_json(name: &str, references: &[&str]) -> String {
    serde_json::json!({
        "SystemName": name,
        "FriendlyName": name,
        "PrivateReferences": references,
    })
    .to_string()
}
