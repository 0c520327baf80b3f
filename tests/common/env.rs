//! Test environment builder for isolated modbuild testing.
//!
//! Provides `TestEnv` - a temp workspace holding a `Modules/` directory, a
//! package folder and a HOME directory, plus helpers to run the modbuild CLI.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{module_json, DEPS_JSON, MARKDIG_ASSET, MARKDIG_CONTENT, MARKDIG_PACKAGE_PATH};

/// Result of running a modbuild CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid NDJSON line {l}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
///
/// Layout under the temp root:
/// - `Modules/<name>/` - module output directories
/// - `packages/` - package folder handed to the binary
/// - `home/` - HOME, so `~/.nuget/packages` never reaches the real one
pub struct TestEnv {
    dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Get path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Absolute path of a module directory
    pub fn module_path(&self, name: &str) -> PathBuf {
        self.path("Modules").join(name)
    }

    pub fn packages_path(&self) -> PathBuf {
        self.path("packages")
    }

    /// Run modbuild in this environment from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run modbuild with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root())
            .args(args)
            .env("HOME", self.path("home"))
            .env("USERPROFILE", self.path("home"))
            .env("MODBUILD_TEST_HOME", self.path("home"))
            .env("MODBUILD_PACKAGE_FOLDERS", self.packages_path())
            .env("NO_COLOR", "1")
            .env_remove("MODBUILD_CONFIG")
            .env_remove("MODBUILD_VERBOSITY")
            .env_remove("NUGET_PACKAGES")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute modbuild");
        Self::output_to_result(output)
    }

    /// Run modbuild with `ModulePath=` built from module names
    pub fn deploy(&self, modules: &[&str], flags: &[&str]) -> TestResult {
        let option_string = self.module_path_option(modules);
        let mut args: Vec<&str> = flags.to_vec();
        args.push(&option_string);
        self.run(&args)
    }

    /// `ModulePath=<abs>;<abs>` for the named modules
    pub fn module_path_option(&self, modules: &[&str]) -> String {
        let paths: Vec<String> = modules
            .iter()
            .map(|m| self.module_path(m).display().to_string())
            .collect();
        format!("ModulePath={}", paths.join(";"))
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file relative to the workspace root
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}

struct ModuleSpec {
    name: String,
    references: Option<Vec<String>>,
    deps: bool,
    files: Vec<(String, String)>,
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    modules: Vec<ModuleSpec>,
    publish_markdig: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            publish_markdig: true,
        }
    }

    /// Add a module with a descriptor, a dependency manifest and the given references
    pub fn with_module(mut self, name: &str, references: &[&str]) -> Self {
        self.modules.push(ModuleSpec {
            name: name.to_string(),
            references: Some(references.iter().map(|r| r.to_string()).collect()),
            deps: true,
            files: Vec::new(),
        });
        self
    }

    /// Add a directory with no `module.json`
    pub fn with_plain_directory(mut self, name: &str) -> Self {
        self.modules.push(ModuleSpec {
            name: name.to_string(),
            references: None,
            deps: false,
            files: Vec::new(),
        });
        self
    }

    /// Drop the dependency manifest of the last added module
    pub fn without_deps(mut self) -> Self {
        if let Some(module) = self.modules.last_mut() {
            module.deps = false;
        }
        self
    }

    /// Add a file to the last added module
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        if let Some(module) = self.modules.last_mut() {
            module.files.push((relative.to_string(), content.to_string()));
        }
        self
    }

    /// Do not publish Markdig into the package folder
    pub fn without_packages(mut self) -> Self {
        self.publish_markdig = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let env = TestEnv {
            dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_modbuild")),
        };

        std::fs::create_dir_all(env.path("home")).expect("Failed to create home");
        std::fs::create_dir_all(env.path("Modules")).expect("Failed to create Modules");
        std::fs::create_dir_all(env.packages_path()).expect("Failed to create packages");

        if self.publish_markdig {
            env.write_file(
                &format!("packages/{MARKDIG_PACKAGE_PATH}/{MARKDIG_ASSET}"),
                MARKDIG_CONTENT,
            );
        }

        for module in &self.modules {
            let root = env.module_path(&module.name);
            std::fs::create_dir_all(&root).expect("Failed to create module directory");

            if let Some(references) = &module.references {
                let refs: Vec<&str> = references.iter().map(String::as_str).collect();
                std::fs::write(root.join("module.json"), module_json(&module.name, &refs))
                    .expect("Failed to write module.json");
            }
            if module.deps {
                std::fs::write(root.join(format!("{}.deps.json", module.name)), DEPS_JSON)
                    .expect("Failed to write deps.json");
            }
            for (relative, content) in &module.files {
                env.write_file(&format!("Modules/{}/{relative}", module.name), content);
            }
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
