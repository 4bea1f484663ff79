//! Applying a patch rule to a file on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Error, Result};
use tracing::debug;

use crate::core::plan::{PatchPlan, plan_patch};
use crate::core::rule::PatchRule;

/// Terminal outcome of applying one rule to one target file.
///
/// The error variants carry the underlying failure so the boundary layer can
/// render a diagnosable message; everything else is a benign no-op or a
/// successful rewrite.
#[derive(Debug)]
pub enum PatchOutcome {
    /// File rewritten and persisted.
    Patched,
    /// Already-applied marker found; no write performed.
    AlreadyPatched,
    /// Target file absent. Benign: the dependency may not be installed.
    TargetMissing,
    /// Before-pattern absent; upstream source has drifted. Soft warning.
    PatternNotFound,
    /// Replacement produced identical content. Defensive, see
    /// [`plan_patch`].
    NoChangeProduced,
    /// Could not read the target.
    ReadError(Error),
    /// Could not persist the rewritten content.
    WriteError(Error),
}

impl PatchOutcome {
    /// I/O failures are the only fatal outcomes.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ReadError(_) | Self::WriteError(_))
    }
}

/// Apply one rule to the file at `path`.
///
/// At most one read and one write; the write replaces the whole file via a
/// temp file and rename so a failure leaves the original content intact.
/// Safe to re-run any number of times: a patched file is detected by its
/// marker and left untouched.
pub fn apply_to_file(path: &Path, rule: &PatchRule) -> PatchOutcome {
    if !path.exists() {
        debug!(path = %path.display(), "target missing, skipping");
        return PatchOutcome::TargetMissing;
    }

    let content = match fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))
    {
        Ok(content) => content,
        Err(err) => return PatchOutcome::ReadError(err),
    };

    match plan_patch(&content, rule) {
        PatchPlan::AlreadyApplied => PatchOutcome::AlreadyPatched,
        PatchPlan::PatternMissing => PatchOutcome::PatternNotFound,
        PatchPlan::NoChange => PatchOutcome::NoChangeProduced,
        PatchPlan::Rewrite(rewritten) => match write_atomic(path, &rewritten) {
            Ok(()) => {
                debug!(path = %path.display(), rule = %rule.name, "patched");
                PatchOutcome::Patched
            }
            Err(err) => PatchOutcome::WriteError(err),
        },
    }
}

/// Replace `path`'s content via temp file + rename in the same directory.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("target path missing parent {}", path.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("target path missing file name {}", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = parent.join(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rule::http_utils_port_rule;
    use crate::test_support::{UNPATCHED_INDEX_JS, write_target};

    #[test]
    fn patches_unpatched_target() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = write_target(temp.path(), UNPATCHED_INDEX_JS).expect("fixture");
        let rule = http_utils_port_rule();

        let outcome = apply_to_file(&target, &rule);
        assert!(matches!(outcome, PatchOutcome::Patched), "{outcome:?}");

        let content = fs::read_to_string(&target).expect("read back");
        assert!(content.contains(&rule.marker));
        assert!(!content.contains(&rule.before));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = write_target(temp.path(), UNPATCHED_INDEX_JS).expect("fixture");
        let rule = http_utils_port_rule();

        let first = apply_to_file(&target, &rule);
        assert!(matches!(first, PatchOutcome::Patched), "{first:?}");
        let after_first = fs::read_to_string(&target).expect("read back");
        let mtime_first = fs::metadata(&target).expect("metadata").modified().ok();

        let second = apply_to_file(&target, &rule);
        assert!(matches!(second, PatchOutcome::AlreadyPatched), "{second:?}");
        let after_second = fs::read_to_string(&target).expect("read back");
        assert_eq!(after_first, after_second);
        // No write happened on the second run.
        let mtime_second = fs::metadata(&target).expect("metadata").modified().ok();
        assert_eq!(mtime_first, mtime_second);
    }

    #[test]
    fn missing_target_creates_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("absent/index.js");

        let outcome = apply_to_file(&target, &http_utils_port_rule());
        assert!(matches!(outcome, PatchOutcome::TargetMissing), "{outcome:?}");
        assert!(!target.exists());
    }

    #[test]
    fn drifted_target_is_left_unmodified() {
        let temp = tempfile::tempdir().expect("tempdir");
        let drifted = "port = Number(addresses.port);\n";
        let target = write_target(temp.path(), drifted).expect("fixture");

        let outcome = apply_to_file(&target, &http_utils_port_rule());
        assert!(matches!(outcome, PatchOutcome::PatternNotFound), "{outcome:?}");
        assert_eq!(fs::read_to_string(&target).expect("read back"), drifted);
    }

    #[test]
    fn directory_target_is_a_read_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("index.js");
        fs::create_dir(&target).expect("fixture");

        let outcome = apply_to_file(&target, &http_utils_port_rule());
        assert!(outcome.is_failure(), "{outcome:?}");
        assert!(matches!(outcome, PatchOutcome::ReadError(_)), "{outcome:?}");
    }

    #[test]
    fn non_utf8_target_is_a_read_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("index.js");
        fs::write(&target, [0xff, 0xfe, 0x00]).expect("fixture");

        let outcome = apply_to_file(&target, &http_utils_port_rule());
        assert!(matches!(outcome, PatchOutcome::ReadError(_)), "{outcome:?}");
    }
}
