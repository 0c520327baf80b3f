//! Deploy Options
//!
//! Configuration types for deploy operations.

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Dry run (report copies and deletions, touch nothing)
    pub dry_run: bool,
    /// Prune build byproducts after deploying references
    pub prune: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            dry_run: false,
            prune: true,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}
