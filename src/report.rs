//! Boundary layer: render outcomes as status lines and exit codes.
//!
//! The io layer decides what happened; this module decides how to say it.
//! Glyph convention follows the surrounding install tooling: `✅` done,
//! `⚠️` benign skip, `❌` failure.

use std::path::Path;

use crate::core::rule::PatchRule;
use crate::exit_codes;
use crate::io::patch_file::PatchOutcome;

/// Human-readable status for one rule application.
///
/// `PatternNotFound` echoes the searched literal on a continuation line so
/// drift can be diagnosed by eye, and `TargetMissing` echoes the expected
/// path.
pub fn status_line(outcome: &PatchOutcome, rule: &PatchRule, target: &Path) -> String {
    match outcome {
        PatchOutcome::Patched => format!("✅ {}: patched", rule.name),
        PatchOutcome::AlreadyPatched => format!("✅ {}: already patched", rule.name),
        PatchOutcome::TargetMissing => format!(
            "⚠️  {}: target not found, skipping\n   expected: {}",
            rule.name,
            target.display()
        ),
        PatchOutcome::PatternNotFound => format!(
            "⚠️  {}: pattern not found, file may have changed\n   looking for: {}",
            rule.name, rule.before
        ),
        PatchOutcome::NoChangeProduced => format!("⚠️  {}: no changes made", rule.name),
        PatchOutcome::ReadError(err) => format!("❌ {}: error reading file: {err:#}", rule.name),
        PatchOutcome::WriteError(err) => format!("❌ {}: error writing file: {err:#}", rule.name),
    }
}

/// Exit code for one outcome.
pub fn exit_code(outcome: &PatchOutcome) -> i32 {
    if outcome.is_failure() {
        exit_codes::IO_ERROR
    } else {
        exit_codes::OK
    }
}
