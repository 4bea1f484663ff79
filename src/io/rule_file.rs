//! Optional TOML rule file.
//!
//! By default the built-in http-utils rule is applied. A rule file replaces
//! the built-in set, which keeps the tool usable when upstream ships a new
//! build shape before this crate is updated:
//!
//! ```toml
//! [[rule]]
//! name = "http-utils empty-port default"
//! marker = "addresses.port === '' ?"
//! before = "port = parseInt(addresses.port, 10);"
//! after = "port = parseInt(addresses.port === '' ? '80' : addresses.port, 10);"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::rule::{PatchRule, http_utils_port_rule};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct RuleFile {
    #[serde(rename = "rule")]
    rules: Vec<PatchRule>,
}

/// Load rules from a TOML file.
///
/// If the file is missing, returns the built-in rule set. Every loaded rule
/// is validated; an empty `[[rule]]` list is rejected rather than silently
/// patching nothing.
pub fn load_rules(path: &Path) -> Result<Vec<PatchRule>> {
    if !path.exists() {
        return Ok(builtin_rules());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let file: RuleFile =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    if file.rules.is_empty() {
        return Err(anyhow!("{}: no [[rule]] entries", path.display()));
    }
    for rule in &file.rules {
        rule.validate()
            .with_context(|| format!("invalid rule in {}", path.display()))?;
    }
    Ok(file.rules)
}

/// Rules applied when no rule file is given.
pub fn builtin_rules() -> Vec<PatchRule> {
    vec![http_utils_port_rule()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_builtin_rules() {
        let temp = tempfile::tempdir().expect("tempdir");
        let rules = load_rules(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(rules, builtin_rules());
    }

    #[test]
    fn loads_and_validates_rules() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rules.toml");
        fs::write(
            &path,
            r#"
[[rule]]
name = "demo"
marker = "patched:"
before = "original text"
after = "patched: replacement"
"#,
        )
        .expect("write");

        let rules = load_rules(&path).expect("load");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "demo");
    }

    #[test]
    fn rejects_invalid_rule() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rules.toml");
        fs::write(
            &path,
            r#"
[[rule]]
name = "broken"
marker = "MARK"
before = "original"
after = "replacement without the marker"
"#,
        )
        .expect("write");

        let err = load_rules(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid rule"));
    }

    #[test]
    fn rejects_empty_rule_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rules.toml");
        fs::write(&path, "rule = []\n").expect("write");

        assert!(load_rules(&path).is_err());
    }
}
