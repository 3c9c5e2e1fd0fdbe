//! Targets of simulated work.

use std::fmt;

/// Identifier of a unit of simulated work, e.g. the name of an evil ninja.
///
/// Created by the caller, consumed once per attack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Creates a new target.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the target name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The evil ninjas every demonstration attacks unless told otherwise.
pub fn default_targets() -> Vec<Target> {
    ["Tommy", "Jony", "Bobby", "Andy"]
        .into_iter()
        .map(Target::from)
        .collect()
}
