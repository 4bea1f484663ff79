//! Test-only fixtures for patcher tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::target::HTTP_UTILS_INDEX;

/// Minimal stand-in for the unpatched http-utils build output.
pub const UNPATCHED_INDEX_JS: &str = "export function toResource(addresses) {\n    \
     let port;\n    \
     port = parseInt(addresses.port, 10);\n    \
     return { host: addresses.host, port };\n\
     }\n";

/// Write `content` to `<root>/index.js` and return its path.
pub fn write_target(root: &Path, content: &str) -> Result<PathBuf> {
    let target = root.join("index.js");
    fs::write(&target, content).with_context(|| format!("write {}", target.display()))?;
    Ok(target)
}

/// Lay out a fake `node_modules` install of http-utils under `root`.
pub fn write_installed_target(root: &Path, content: &str) -> Result<PathBuf> {
    let target = root.join(HTTP_UTILS_INDEX);
    let parent = target.parent().context("target parent")?;
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    fs::write(&target, content).with_context(|| format!("write {}", target.display()))?;
    Ok(target)
}
