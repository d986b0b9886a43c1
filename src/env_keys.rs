// Centralized environment variable keys to avoid repeated string literals.

pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const ENV_GITHUB_ENV: &str = "GITHUB_ENV";
pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
pub const ENV_GH_PROPS_MOCK_FILE: &str = "GH_PROPS_MOCK_FILE";

/// Prefix the runner puts in front of every action input.
pub const INPUT_PREFIX: &str = "INPUT_";
