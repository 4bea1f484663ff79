//! Patch rules: the literal marker/before/after triples applied to a target.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// One literal substring rewrite.
///
/// `marker` is the already-applied probe: its presence in a file proves the
/// rewrite is in place, whether or not this tool applied it. `before` is the
/// exact text to replace and `after` the replacement. Replacement is a
/// global, literal substring substitution; no regex semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchRule {
    /// Short human-readable label used in status lines.
    pub name: String,
    /// Substring whose presence means the patch is already applied.
    pub marker: String,
    /// Literal text to search for.
    pub before: String,
    /// Literal replacement text.
    pub after: String,
}

impl PatchRule {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("rule name must be non-empty"));
        }
        if self.marker.is_empty() {
            return Err(anyhow!("rule {}: marker must be non-empty", self.name));
        }
        if self.before.is_empty() {
            return Err(anyhow!("rule {}: before must be non-empty", self.name));
        }
        if self.after.is_empty() {
            return Err(anyhow!("rule {}: after must be non-empty", self.name));
        }
        // The marker is what makes re-runs a no-op. An `after` without the
        // marker would re-patch patched files; a `before` containing it
        // could never fire.
        if !self.after.contains(&self.marker) {
            return Err(anyhow!(
                "rule {}: after must contain the already-applied marker",
                self.name
            ));
        }
        if self.before.contains(&self.marker) {
            return Err(anyhow!(
                "rule {}: before must not contain the already-applied marker",
                self.name
            ));
        }
        Ok(())
    }
}

/// Built-in rule: default an empty URL port to the protocol's standard port.
pub fn http_utils_port_rule() -> PatchRule {
    PatchRule {
        name: "http-utils empty-port default".to_string(),
        marker: "addresses.port === '' ?".to_string(),
        before: "port = parseInt(addresses.port, 10);".to_string(),
        after: "port = parseInt(addresses.port === '' ? \
                (addresses.protocol === 'https:' ? '443' : '80') \
                : addresses.port, 10);"
            .to_string(),
    }
}
