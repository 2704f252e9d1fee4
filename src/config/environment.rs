//! Environment variable handling.
//!
//! The process environment is read exactly once, into an [`EnvSnapshot`],
//! when the configuration is built. Pipeline stages only ever see the
//! snapshot, so tests can describe any environment without touching the
//! real one.

use std::collections::HashMap;

/// Variable whose presence marks an externally managed (conda) environment.
pub const ISOLATED_ENV_VAR: &str = "CONDA_PREFIX";

/// pip flag that allows installing into an externally managed environment.
pub const OVERRIDE_FLAG: &str = "--break-system-packages";

/// Variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Immutable copy of the process environment: variables plus whether the
/// process runs as root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    root: bool,
}

impl EnvSnapshot {
    /// Capture the current process environment. Non-UTF-8 entries are
    /// skipped.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            root: running_as_root(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            root: false,
        }
    }

    /// Override the root flag.
    pub fn with_root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    /// Whether the effective user was root at capture time.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Get a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is set to a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Whether the snapshot looks like a CI environment.
    pub fn is_ci(&self) -> bool {
        CI_VARS.iter().any(|var| self.vars.contains_key(*var))
    }
}

fn running_as_root() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// Whether the interpreter lives in an externally managed environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentMode {
    /// Conda-like environment: installs need [`OVERRIDE_FLAG`] and pip
    /// must not upgrade itself.
    Isolated,
    /// Regular interpreter.
    Normal,
}

impl EnvironmentMode {
    /// Classify the environment from the snapshot.
    pub fn classify(env: &EnvSnapshot) -> Self {
        if env.is_set(ISOLATED_ENV_VAR) {
            Self::Isolated
        } else {
            Self::Normal
        }
    }

    /// Extra flags appended to every `pip install`.
    pub fn install_flags(&self) -> &'static [&'static str] {
        match self {
            Self::Isolated => &[OVERRIDE_FLAG],
            Self::Normal => &[],
        }
    }

    /// Whether pip should upgrade itself before installing packages.
    pub fn upgrades_installer(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Normal => "normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_isolated_when_variable_set() {
        let env = EnvSnapshot::from_pairs([(ISOLATED_ENV_VAR, "/opt/conda/envs/work")]);
        let mode = EnvironmentMode::classify(&env);
        assert_eq!(mode, EnvironmentMode::Isolated);
        assert_eq!(mode.install_flags(), &[OVERRIDE_FLAG]);
        assert!(!mode.upgrades_installer());
    }

    #[test]
    fn classify_normal_when_variable_absent() {
        let env = EnvSnapshot::from_pairs([("HOME", "/home/dev")]);
        let mode = EnvironmentMode::classify(&env);
        assert_eq!(mode, EnvironmentMode::Normal);
        assert!(mode.install_flags().is_empty());
        assert!(mode.upgrades_installer());
    }

    #[test]
    fn classify_normal_when_variable_empty() {
        let env = EnvSnapshot::from_pairs([(ISOLATED_ENV_VAR, "")]);
        assert_eq!(EnvironmentMode::classify(&env), EnvironmentMode::Normal);
    }

    #[test]
    fn is_set_ignores_empty_values() {
        let env = EnvSnapshot::from_pairs([("A", ""), ("B", "1")]);
        assert!(!env.is_set("A"));
        assert!(env.is_set("B"));
        assert!(!env.is_set("C"));
    }

    #[test]
    fn is_ci_detects_provider_variables() {
        assert!(EnvSnapshot::from_pairs([("GITHUB_ACTIONS", "true")]).is_ci());
        assert!(!EnvSnapshot::from_pairs([("HOME", "/root")]).is_ci());
    }

    #[test]
    fn capture_reads_process_environment() {
        let env = EnvSnapshot::capture();
        assert_eq!(env.get("PATH").is_some(), std::env::var("PATH").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn capture_reads_effective_uid() {
        let uid_zero = unsafe { libc::geteuid() == 0 };
        assert_eq!(EnvSnapshot::capture().is_root(), uid_zero);
    }

    #[test]
    fn explicit_pairs_are_not_root() {
        let env = EnvSnapshot::from_pairs([("USER", "root")]);
        assert!(!env.is_root());
        assert!(env.with_root(true).is_root());
    }
}
