//! Dependency context (`<module>.deps.json`)
//!
//! The build emits a dependency manifest next to every module assembly. Only
//! the compile-time view is used here: which libraries the module compiled
//! against and which assembly files each of them contributed.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// How a library entered the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryKind {
    /// Package restored into a package cache folder
    Package,
    /// Another project in the same build
    Project,
    /// Plain assembly reference
    Reference,
    /// Targeting-pack reference assembly
    ReferenceAssembly,
    /// Anything else, kept verbatim
    Other(String),
}

impl LibraryKind {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "package" => LibraryKind::Package,
            "project" => LibraryKind::Project,
            "reference" => LibraryKind::Reference,
            "referenceassembly" => LibraryKind::ReferenceAssembly,
            _ => LibraryKind::Other(raw.to_string()),
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryKind::Package => write!(f, "package"),
            LibraryKind::Project => write!(f, "project"),
            LibraryKind::Reference => write!(f, "reference"),
            LibraryKind::ReferenceAssembly => write!(f, "referenceassembly"),
            LibraryKind::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// A library the module was compiled against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileLibrary {
    pub name: String,
    pub version: String,
    pub kind: LibraryKind,
    /// Compile assets, relative to the library root (e.g. `lib/net8.0/Foo.dll`)
    pub assemblies: Vec<String>,
    /// Package folder relative path (e.g. `foo/1.0.0`)
    pub path: Option<String>,
    pub hash_path: Option<String>,
    pub serviceable: bool,
}

impl CompileLibrary {
    /// Relative directory of this library inside a package cache folder
    pub fn package_relative_path(&self) -> String {
        match &self.path {
            Some(path) if !path.is_empty() => path.clone(),
            _ => format!(
                "{}/{}",
                self.name.to_lowercase(),
                self.version.to_lowercase()
            ),
        }
    }
}

/// Compile-time dependency graph of one module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyContext {
    target_framework: Option<String>,
    compile_libraries: Vec<CompileLibrary>,
}

impl DependencyContext {
    pub fn new(target_framework: Option<String>, compile_libraries: Vec<CompileLibrary>) -> Self {
        Self {
            target_framework,
            compile_libraries,
        }
    }

    /// Parse the JSON manifest
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let raw: RawDepsFile = serde_json::from_str(content)?;
        Ok(raw.into_context())
    }

    pub fn target_framework(&self) -> Option<&str> {
        self.target_framework.as_deref()
    }

    pub fn compile_libraries(&self) -> &[CompileLibrary] {
        &self.compile_libraries
    }

    /// First library whose name equals `name` exactly
    pub fn find_library(&self, name: &str) -> Option<&CompileLibrary> {
        self.compile_libraries.iter().find(|lib| lib.name == name)
    }
}

// === Wire format ===

#[derive(Debug, Deserialize)]
struct RawDepsFile {
    #[serde(rename = "runtimeTarget", default)]
    runtime_target: Option<RawRuntimeTarget>,
    #[serde(default)]
    targets: BTreeMap<String, BTreeMap<String, RawTargetLibrary>>,
    #[serde(default)]
    libraries: BTreeMap<String, RawLibrary>,
}

/// Older manifests store the runtime target as a bare string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuntimeTarget {
    Name(String),
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl RawRuntimeTarget {
    fn name(&self) -> Option<&str> {
        match self {
            RawRuntimeTarget::Name(name) => Some(name.as_str()),
            RawRuntimeTarget::Object { name } => name.as_deref(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTargetLibrary {
    #[serde(default)]
    compile: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawLibrary {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    serviceable: bool,
    #[serde(default)]
    path: Option<String>,
    #[serde(rename = "hashPath", default)]
    hash_path: Option<String>,
}

/// Targets containing `/` are runtime-identifier specific
fn is_runtime_target(name: &str) -> bool {
    name.contains('/')
}

impl RawDepsFile {
    fn into_context(mut self) -> DependencyContext {
        let runtime_name = self
            .runtime_target
            .as_ref()
            .and_then(RawRuntimeTarget::name)
            .map(str::to_string);

        let compile_target = runtime_name
            .as_deref()
            .filter(|name| !is_runtime_target(name) && self.targets.contains_key(*name))
            .map(str::to_string)
            .or_else(|| {
                self.targets
                    .keys()
                    .find(|name| !is_runtime_target(name))
                    .cloned()
            });

        let target_framework = compile_target.clone().or_else(|| {
            runtime_name
                .as_deref()
                .map(|name| name.split('/').next().unwrap_or(name).to_string())
        });

        let entries = compile_target
            .and_then(|name| self.targets.remove(&name))
            .unwrap_or_default();

        let compile_libraries = entries
            .into_iter()
            .map(|(key, entry)| {
                let (name, version) = key
                    .split_once('/')
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .unwrap_or_else(|| (key.clone(), String::new()));
                let library = self.libraries.get(&key);

                CompileLibrary {
                    name,
                    version,
                    kind: library
                        .and_then(|l| l.kind.as_deref())
                        .map(LibraryKind::parse)
                        .unwrap_or_else(|| LibraryKind::Other("unknown".to_string())),
                    assemblies: entry.compile.into_keys().collect(),
                    path: library.and_then(|l| l.path.clone()),
                    hash_path: library.and_then(|l| l.hash_path.clone()),
                    serviceable: library.map(|l| l.serviceable).unwrap_or(false),
                }
            })
            .collect();

        DependencyContext {
            target_framework,
            compile_libraries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPS: &str = r#"{
      "runtimeTarget": { "name": ".NETCoreApp,Version=v8.0", "signature": "" },
      "compilationOptions": {},
      "targets": {
        ".NETCoreApp,Version=v8.0": {
          "Smartstore.Blog/5.0.0": {
            "dependencies": { "Markdig": "0.33.0" },
            "compile": { "Smartstore.Blog.dll": {} }
          },
          "Markdig/0.33.0": {
            "runtime": { "lib/net6.0/Markdig.dll": {} },
            "compile": { "lib/net6.0/Markdig.dll": { "assemblyVersion": "0.33.0.0" } }
          },
          "Meta.Package/1.0.0": {}
        },
        ".NETCoreApp,Version=v8.0/win-x64": {
          "Runtime.Only/1.0.0": { "compile": { "lib/x.dll": {} } }
        }
      },
      "libraries": {
        "Smartstore.Blog/5.0.0": { "type": "project", "serviceable": false, "sha512": "" },
        "Markdig/0.33.0": {
          "type": "package",
          "serviceable": true,
          "sha512": "sha512-abc",
          "path": "markdig/0.33.0",
          "hashPath": "markdig.0.33.0.nupkg.sha512"
        },
        "Meta.Package/1.0.0": { "type": "package", "serviceable": true, "sha512": "" }
      }
    }"#;

    #[test]
    fn reads_compile_target_libraries() {
        let ctx = DependencyContext::from_json(DEPS).unwrap();
        assert_eq!(ctx.target_framework(), Some(".NETCoreApp,Version=v8.0"));
        assert_eq!(ctx.compile_libraries().len(), 3);
        assert!(ctx.find_library("Runtime.Only").is_none());
    }

    #[test]
    fn package_library_details() {
        let ctx = DependencyContext::from_json(DEPS).unwrap();
        let markdig = ctx.find_library("Markdig").unwrap();
        assert_eq!(markdig.version, "0.33.0");
        assert_eq!(markdig.kind, LibraryKind::Package);
        assert_eq!(markdig.assemblies, vec!["lib/net6.0/Markdig.dll"]);
        assert_eq!(markdig.path.as_deref(), Some("markdig/0.33.0"));
        assert_eq!(
            markdig.hash_path.as_deref(),
            Some("markdig.0.33.0.nupkg.sha512")
        );
        assert!(markdig.serviceable);
    }

    #[test]
    fn library_without_compile_assets_has_no_assemblies() {
        let ctx = DependencyContext::from_json(DEPS).unwrap();
        let meta = ctx.find_library("Meta.Package").unwrap();
        assert!(meta.assemblies.is_empty());
        assert_eq!(meta.package_relative_path(), "meta.package/1.0.0");
    }

    #[test]
    fn name_match_is_exact() {
        let ctx = DependencyContext::from_json(DEPS).unwrap();
        assert!(ctx.find_library("markdig").is_none());
        assert!(ctx.find_library("Markdig/0.33.0").is_none());
    }

    #[test]
    fn rid_specific_runtime_target_falls_back_to_portable_target() {
        let json = DEPS.replace(
            r#""name": ".NETCoreApp,Version=v8.0","#,
            r#""name": ".NETCoreApp,Version=v8.0/win-x64","#,
        );
        let ctx = DependencyContext::from_json(&json).unwrap();
        assert_eq!(ctx.target_framework(), Some(".NETCoreApp,Version=v8.0"));
        assert!(ctx.find_library("Markdig").is_some());
    }

    #[test]
    fn legacy_string_runtime_target() {
        let json = r#"{
          "runtimeTarget": "net48",
          "targets": { "net48": { "Foo/1.0.0": { "compile": { "Foo.dll": {} } } } },
          "libraries": { "Foo/1.0.0": { "type": "reference" } }
        }"#;
        let ctx = DependencyContext::from_json(json).unwrap();
        assert_eq!(ctx.find_library("Foo").unwrap().kind, LibraryKind::Reference);
    }

    #[test]
    fn empty_manifest_has_no_libraries() {
        let ctx = DependencyContext::from_json("{}").unwrap();
        assert!(ctx.compile_libraries().is_empty());
        assert!(ctx.target_framework().is_none());
    }

    #[test]
    fn library_kind_parse_is_case_insensitive() {
        assert_eq!(LibraryKind::parse("Package"), LibraryKind::Package);
        assert_eq!(
            LibraryKind::parse("ReferenceAssembly"),
            LibraryKind::ReferenceAssembly
        );
        assert_eq!(
            LibraryKind::parse("msbuildproject"),
            LibraryKind::Other("msbuildproject".to_string())
        );
    }
}
