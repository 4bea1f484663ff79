//! I/O operations for the patcher.

pub mod patch_file;
pub mod rule_file;
pub mod target;
