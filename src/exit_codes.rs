//! Stable exit codes for the portfix binary.

/// Patch applied, already applied, or benignly skipped.
pub const OK: i32 = 0;
/// Read or write failure on the target file, or bad invocation/rule file.
pub const IO_ERROR: i32 = 1;
