//! Build identification for log output.

/// Returns `pkg_version (git_sha)`, with `unknown` when git metadata is missing.
#[must_use]
pub fn build_version() -> String {
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!("{} ({git_sha})", env!("CARGO_PKG_VERSION"))
}
