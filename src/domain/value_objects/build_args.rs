//! Build Arguments Value Object
//!
//! Parses the single `;`-delimited `key=value` option string that build
//! pipelines pass to the tool, e.g. `ModulePath=Modules/A;Modules/B`.

/// The only option key the deployer acts on
pub const MODULE_PATH_KEY: &str = "ModulePath";

/// Parsed option string
///
/// Tokens are split on `;`, trimmed, and empty tokens dropped. A token with
/// an `=` starts a new option; a token without one continues the value of the
/// previous option. That is how a list value such as `ModulePath=a;b;c`
/// survives the outer split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    options: Vec<(String, String)>,
}

impl BuildArgs {
    /// Parse an option string. Never fails; unusable tokens are dropped.
    pub fn parse(input: &str) -> Self {
        let mut options: Vec<(String, String)> = Vec::new();
        let mut current: Option<usize> = None;

        for token in input.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            match token.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    if key.is_empty() {
                        current = None;
                        continue;
                    }
                    options.push((key.to_string(), value.trim().to_string()));
                    current = Some(options.len() - 1);
                }
                None => {
                    // Leading tokens with no option to attach to are ignored
                    if let Some(idx) = current {
                        let value = &mut options[idx].1;
                        if !value.is_empty() {
                            value.push(';');
                        }
                        value.push_str(token);
                    }
                }
            }
        }

        Self { options }
    }

    /// Value of an option; the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Module directories named by `ModulePath`, in input order
    pub fn module_paths(&self) -> Vec<String> {
        self.get(MODULE_PATH_KEY)
            .map(|value| {
                value
                    .split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Keys that are present but not recognized
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| *k != MODULE_PATH_KEY)
    }
}
