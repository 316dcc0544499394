//! Constants used across the confpatch workspace.

/// The filename for confpatch's manifest.
pub const CONFIG_FILE: &str = "confpatch.toml";

/// The identifier rewritten when a manifest does not name one.
pub const DEFAULT_IDENTIFIER: &str = "firebaseConfig";
