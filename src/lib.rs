//! Reads a memory value through the board's `rwmem.elf` tool.
//!
//! [`process`] runs the tool and captures what it prints, [`sniffer`] turns
//! an address into the value the tool reports, and [`app`] polls an address
//! in a terminal view.

pub mod app;
pub mod process;
pub mod sniffer;

pub use sniffer::{SniffError, Sniffer, SnifferConfig};
