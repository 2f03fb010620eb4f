mod config;
mod sniffer;

pub use config::{DEFAULT_TOOL, SnifferConfig, TOOL_ENV};
pub use sniffer::{PREFIX_LEN, SniffError, Sniffer, command_line, extract_value};
