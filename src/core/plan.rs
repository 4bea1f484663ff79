//! Pure decision contract: what a rule does to a given content string.

use crate::core::rule::PatchRule;

/// Outcome of planning one rule against in-memory content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchPlan {
    /// The already-applied marker is present; nothing to do.
    AlreadyApplied,
    /// Neither marker nor before-pattern found; upstream has drifted.
    PatternMissing,
    /// The before-pattern was found but replacement changed nothing.
    NoChange,
    /// Replacement produced new content to be written back.
    Rewrite(String),
}

/// Plan a rule against content.
///
/// Checks run in a fixed order: marker first (idempotence), then pattern
/// presence, then a global literal replace. The no-change branch guards
/// against inconsistent rule definitions; with a validated [`PatchRule`]
/// it is unreachable, but the contract keeps it explicit.
pub fn plan_patch(content: &str, rule: &PatchRule) -> PatchPlan {
    if content.contains(&rule.marker) {
        return PatchPlan::AlreadyApplied;
    }
    if !content.contains(&rule.before) {
        return PatchPlan::PatternMissing;
    }
    let rewritten = content.replace(&rule.before, &rule.after);
    if rewritten == content {
        return PatchPlan::NoChange;
    }
    PatchPlan::Rewrite(rewritten)
}
