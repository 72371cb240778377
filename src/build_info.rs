//! Build-time information
//!
//! This module provides access to build metadata captured at compile time,
//! including build timestamps, git state, cargo configuration, and compiler
//! version.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, x86_64-apple-darwin)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.75.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git commit SHA the binary was built from
pub const GIT_SHA: &str = env!("VERGEN_GIT_SHA");

/// Git branch the binary was built from
pub const GIT_BRANCH: &str = env!("VERGEN_GIT_BRANCH");

/// Whether the working tree was dirty at build time ("true"/"false")
pub const GIT_DIRTY: &str = env!("VERGEN_GIT_DIRTY");

/// Returns the short form of the git SHA (first 7 characters)
pub fn git_sha_short() -> &'static str {
    let end = GIT_SHA.len().min(7);
    &GIT_SHA[..end]
}

/// Returns true if the working tree was dirty at build time
pub fn is_git_dirty() -> bool {
    GIT_DIRTY == "true"
}

/// Returns a formatted build version string
///
/// Format: `{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!("{}-opt{}", CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}

/// Returns a detailed build info string
pub fn detailed_info() -> String {
    format!(
        "Built: {}\nGit: {}@{}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        BUILD_TIMESTAMP,
        GIT_BRANCH,
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_contains_target() {
        let version = version_string();
        assert!(version.contains(CARGO_TARGET_TRIPLE));
        assert!(version.contains("-opt"));
    }

    #[test]
    fn test_git_sha_short_never_exceeds_seven_chars() {
        assert!(git_sha_short().len() <= 7);
    }
}
