//! Deterministic, pure logic shared by the process builder.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod arguments;
pub mod error;
pub mod process;
pub mod quoting;
