//! Resolution of the default patch target.

use std::path::{Path, PathBuf};

/// Installed location of the http-utils build output, relative to the
/// project root.
pub const HTTP_UTILS_INDEX: &str = "node_modules/@libp2p/http-utils/dist/src/index.js";

/// Resolve the default target file under a project root.
pub fn default_target(project_root: &Path) -> PathBuf {
    project_root.join(HTTP_UTILS_INDEX)
}
