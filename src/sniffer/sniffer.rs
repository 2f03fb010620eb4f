use std::{ffi::OsString, path::Path};

use thiserror::Error;
use tracing::debug;

use crate::{
    process::{RunError, capture_stdout},
    sniffer::SnifferConfig,
};

/// Width of the header `rwmem.elf` prints before the value, in characters.
///
/// Nothing in the tool's output tells us this; it is assumed fixed.
pub const PREFIX_LEN: usize = 21;

#[derive(Debug, Error)]
pub enum SniffError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("tool output too short: got {len} characters, expected at least {needed}")]
    OutputTooShort { len: usize, needed: usize },
}

/// Builds the argv for reading `address`: the tool followed by the address.
pub fn command_line(tool: &Path, address: &str) -> [OsString; 2] {
    [tool.as_os_str().to_owned(), OsString::from(address)]
}

/// Drops the first [`PREFIX_LEN`] characters of `output`.
///
/// Output of exactly [`PREFIX_LEN`] characters gives an empty value; anything
/// shorter is an error. Nothing else is trimmed.
pub fn extract_value(output: &str) -> Result<&str, SniffError> {
    let mut chars = output.chars();
    for taken in 0..PREFIX_LEN {
        if chars.next().is_none() {
            return Err(SniffError::OutputTooShort {
                len: taken,
                needed: PREFIX_LEN,
            });
        }
    }
    Ok(chars.as_str())
}

#[derive(Debug, Clone)]
pub struct Sniffer {
    config: SnifferConfig,
}

impl Sniffer {
    pub fn new(config: SnifferConfig) -> Self {
        Self { config }
    }

    pub fn tool(&self) -> &Path {
        &self.config.tool
    }

    /// The command [`Sniffer::sniff`] runs, joined with single spaces.
    pub fn command(&self, address: &str) -> String {
        command_line(self.tool(), address)
            .iter()
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Asks the tool for the value at `address`.
    pub fn sniff(&self, address: &str) -> Result<String, SniffError> {
        let [program, address_arg] = command_line(self.tool(), address);

        let output = capture_stdout(&program, [&address_arg])?;
        let value = extract_value(&output)?;
        debug!("{} -> {} characters", address, value.chars().count());
        Ok(value.to_owned())
    }
}
