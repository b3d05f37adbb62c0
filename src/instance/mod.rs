//! Benchmark instance files.
//!
//! Reads the plain-text coordinate files the benchmark runs are driven by.

mod reader;

pub use reader::{Instance, InstanceError};
