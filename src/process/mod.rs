mod runner;

pub use runner::{CHUNK_SIZE, RunError, capture_stdout};
