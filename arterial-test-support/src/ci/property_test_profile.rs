//! Property-test run profile parsing for CI and local overrides.
//!
//! Property suites across the workspace read their case count and fork mode
//! from here so a single pair of environment variables tunes them all.

use std::env;
use std::fmt;

/// Environment variable controlling proptest case counts.
pub const CASES_ENV_KEY: &str = "ARTERIAL_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const FORK_ENV_KEY: &str = "ARTERIAL_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged at `warn` and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use arterial_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = read_env_or_default(CASES_ENV_KEY, default_cases, parse_cases);
        let fork = read_env_or_default(FORK_ENV_KEY, default_fork, parse_bool);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Reasons an override was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    ZeroCases,
    NotABool,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "expected a positive integer",
            Self::ZeroCases => "cases must be > 0",
            Self::NotABool => "expected one of: true/false/1/0/yes/no/on/off",
        })
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    F: Fn(&str) -> Result<T, OverrideError>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
