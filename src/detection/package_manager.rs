//! System package manager detection.

use crate::shell::{CommandRunner, CommandSpec};

/// Detected system package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    /// Debian/Ubuntu `apt-get`.
    AptLike,
    /// Homebrew.
    BrewLike,
    /// Nothing supported found.
    Unknown,
}

/// Detection order. The first manager whose check succeeds wins.
const CANDIDATES: &[(PackageManagerKind, &str)] = &[
    (PackageManagerKind::AptLike, "apt-get"),
    (PackageManagerKind::BrewLike, "brew"),
];

impl PackageManagerKind {
    /// Detect the system package manager by running `<tool> --version`.
    ///
    /// Never fails; falls back to [`PackageManagerKind::Unknown`].
    pub fn detect(runner: &dyn CommandRunner) -> Self {
        for (kind, program) in CANDIDATES {
            if runner.succeeds(&CommandSpec::new(*program).arg("--version")) {
                tracing::debug!("Detected package manager: {}", program);
                return *kind;
            }
        }
        tracing::debug!("No supported package manager found");
        Self::Unknown
    }

    /// Command that installs the Python interpreter.
    pub fn runtime_install_command(&self, elevated: bool) -> Option<CommandSpec> {
        match self {
            Self::AptLike => Some(apt_install(&["python3"], elevated)),
            Self::BrewLike => Some(CommandSpec::new("brew").args(["install", "python"]).streamed()),
            Self::Unknown => None,
        }
    }

    /// Command that installs pip for the system interpreter.
    ///
    /// Homebrew's python formula ships pip, so reinstalling it is the fix.
    pub fn pip_install_command(&self, elevated: bool) -> Option<CommandSpec> {
        match self {
            Self::AptLike => Some(apt_install(&["python3-pip"], elevated)),
            Self::BrewLike => Some(
                CommandSpec::new("brew")
                    .args(["reinstall", "python"])
                    .streamed(),
            ),
            Self::Unknown => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AptLike => "apt-get",
            Self::BrewLike => "brew",
            Self::Unknown => "unknown",
        }
    }
}

fn apt_install(packages: &[&str], elevated: bool) -> CommandSpec {
    let spec = if elevated {
        CommandSpec::new("apt-get")
    } else {
        CommandSpec::new("sudo").arg("apt-get")
    };
    spec.args(["install", "-y"])
        .args(packages.iter().copied())
        .streamed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn detect_apt_first() {
        let mut runner = MockRunner::new();
        runner.succeed("apt-get --version");
        runner.succeed("brew --version");

        assert_eq!(
            PackageManagerKind::detect(&runner),
            PackageManagerKind::AptLike
        );
        assert!(!runner.ran("brew"));
    }

    #[test]
    fn detect_brew_when_apt_missing() {
        let mut runner = MockRunner::new();
        runner.succeed("brew --version");

        assert_eq!(
            PackageManagerKind::detect(&runner),
            PackageManagerKind::BrewLike
        );
        assert_eq!(
            runner.invocations(),
            vec!["apt-get --version", "brew --version"]
        );
    }

    #[test]
    fn detect_unknown_when_nothing_matches() {
        let runner = MockRunner::new();
        assert_eq!(
            PackageManagerKind::detect(&runner),
            PackageManagerKind::Unknown
        );
    }

    #[test]
    fn apt_install_uses_sudo_unless_elevated() {
        let cmd = PackageManagerKind::AptLike
            .runtime_install_command(false)
            .unwrap();
        assert_eq!(cmd.to_string(), "sudo apt-get install -y python3");

        let cmd = PackageManagerKind::AptLike
            .pip_install_command(true)
            .unwrap();
        assert_eq!(cmd.to_string(), "apt-get install -y python3-pip");
    }

    #[test]
    fn brew_installs_python() {
        let cmd = PackageManagerKind::BrewLike
            .runtime_install_command(false)
            .unwrap();
        assert_eq!(cmd.to_string(), "brew install python");
        assert!(!cmd.capture);
    }

    #[test]
    fn unknown_has_no_install_commands() {
        assert!(PackageManagerKind::Unknown
            .runtime_install_command(false)
            .is_none());
        assert!(PackageManagerKind::Unknown.pip_install_command(false).is_none());
    }
}
