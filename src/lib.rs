//! Post-install patcher for `@libp2p/http-utils`.
//!
//! The published build of `@libp2p/http-utils` parses a URL's port with a
//! bare `parseInt`, so an empty port string becomes `NaN` instead of the
//! protocol's standard port (443 for `https:`, 80 otherwise). This crate
//! rewrites the installed `dist/src/index.js` in place to add the default.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rule validation, patch
//!   planning). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (target resolution, file read,
//!   atomic rewrite, rule-file loading). Isolated to enable testing against
//!   temporary directories.
//!
//! [`report`] maps each outcome to a status line and an exit code, keeping
//! the decision of what happened separate from how it is reported.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
