//! Deterministic, pure patch logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! content and return deterministic outputs suitable for tests.

pub mod plan;
pub mod rule;
