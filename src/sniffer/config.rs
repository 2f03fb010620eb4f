use std::{env, ffi::OsString, path::PathBuf};

/// Where `rwmem.elf` lives on the target board.
pub const DEFAULT_TOOL: &str = "/fusion2/rwmem.elf";

/// Overrides [`DEFAULT_TOOL`] when set to a non-empty value.
pub const TOOL_ENV: &str = "RWMEM_TOOL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnifferConfig {
    pub tool: PathBuf,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
        }
    }
}

impl SnifferConfig {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn from_env() -> Self {
        Self::from_var(env::var_os(TOOL_ENV))
    }

    fn from_var(var: Option<OsString>) -> Self {
        match var {
            Some(tool) if !tool.is_empty() => Self::new(tool),
            _ => Self::default(),
        }
    }
}
