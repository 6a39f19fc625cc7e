//! Read-only snapshot of the process environment.
//!
//! Captured once at startup; all configuration resolution reads from the
//! snapshot rather than from `std::env` directly, so tests can build one
//! from literals instead of mutating process-wide state.

use std::collections::HashMap;
use std::env;

use crate::error::AppError;

/// The process environment at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self { vars: env::vars().collect() }
    }

    /// Look up an optional variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up an optional variable, falling back to `default` when absent.
    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }

    /// Look up a required variable. Absence is fatal to startup: the error
    /// names the variable so the operator can supply it and restart.
    pub fn require(&self, name: &str) -> Result<String, AppError> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| AppError::missing_env(name))
    }
}

impl<S: Into<String>> FromIterator<(S, S)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
