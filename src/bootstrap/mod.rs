//! The bootstrap pipeline.
//!
//! [`Bootstrapper::run`] walks the stages in a fixed order:
//!
//! 1. Detect the system package manager
//! 2. Classify the environment (conda or not)
//! 3. Find a Python interpreter, offering to install one
//! 4. Make sure pip works, offering to install it
//! 5. Upgrade pip (skipped in isolated environments, failure is a warning)
//! 6. Find which required packages are missing
//! 7. Install them in one batch after a single confirmation
//! 8. Make sure PyInstaller is installed
//! 9. Freeze the target script with `--onefile`
//! 10. Print PATH guidance for the executable
//!
//! Every stage either succeeds or returns the error that ends the run.
//! Nothing is retried and no stage is revisited.

mod build;
mod guidance;
mod installer;
mod packages;
mod runtime;

pub use guidance::{path_guidance, PathGuidance};
pub use packages::missing_packages;

use std::path::PathBuf;

use crate::config::{BootstrapConfig, EnvironmentMode};
use crate::detection::{PackageManagerKind, RuntimeHandle};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::shell::{CommandResult, CommandRunner, CommandSpec};
use crate::ui::{Prompt, UserInterface};

/// What a completed run found and did.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// Detected system package manager.
    pub package_manager: PackageManagerKind,
    /// Environment classification.
    pub mode: EnvironmentMode,
    /// Interpreter used for every Python command.
    pub runtime: RuntimeHandle,
    /// Whether pip self-upgrade ran and succeeded.
    pub installer_upgraded: bool,
    /// Packages installed by this run (empty when all were present).
    pub installed_packages: Vec<String>,
    /// Whether the bundler was installed by this run.
    pub bundler_installed: bool,
    /// Path of the built executable.
    pub artifact: PathBuf,
}

/// Runs the pipeline against injected capabilities.
pub struct Bootstrapper<'a> {
    config: &'a BootstrapConfig,
    runner: &'a dyn CommandRunner,
    fetcher: &'a dyn Fetcher,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper.
    pub fn new(
        config: &'a BootstrapConfig,
        runner: &'a dyn CommandRunner,
        fetcher: &'a dyn Fetcher,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            config,
            runner,
            fetcher,
            ui,
        }
    }

    /// Run every stage in order.
    pub fn run(&mut self) -> Result<BootstrapReport> {
        self.ui.show_header(&format!(
            "freezeup: building {}",
            self.config.target
        ));

        let package_manager = self.discover_package_manager();
        let mode = self.classify_environment();
        let runtime = self.discover_runtime(package_manager)?;
        self.ensure_package_installer(&runtime, package_manager, mode)?;
        let installer_upgraded = self.upgrade_installer(&runtime, mode);

        let missing = self.resolve_missing(&runtime);
        self.install_missing(&runtime, mode, &missing)?;
        let bundler_installed = self.ensure_bundler(&runtime, mode)?;

        let artifact = self.build_executable(&runtime)?;
        self.emit_path_guidance(&artifact);
        tracing::info!("Built {} with {}", artifact.display(), runtime.label());

        Ok(BootstrapReport {
            package_manager,
            mode,
            runtime,
            installer_upgraded,
            installed_packages: missing,
            bundler_installed,
            artifact,
        })
    }

    /// Look for a supported system package manager.
    pub fn discover_package_manager(&mut self) -> PackageManagerKind {
        let kind = PackageManagerKind::detect(self.runner);
        match kind {
            PackageManagerKind::Unknown => {
                self.ui.info("No supported system package manager found");
            }
            _ => self.ui.info(&format!("Package manager: {}", kind.name())),
        }
        kind
    }

    /// Decide whether installs target an externally managed environment.
    pub fn classify_environment(&mut self) -> EnvironmentMode {
        let mode = EnvironmentMode::classify(&self.config.env);
        if mode == EnvironmentMode::Isolated {
            self.ui
                .info("Isolated (conda) environment detected; installs will override its protection");
        }
        tracing::debug!("Environment mode: {}", mode.name());
        mode
    }

    /// Run a command, echoing it when the operator will see its output.
    fn execute(&mut self, spec: &CommandSpec) -> CommandResult {
        if !spec.capture || self.ui.output_mode().shows_commands() {
            self.ui.message(&format!("$ {}", spec));
        }
        self.runner.run(spec)
    }

    fn confirm(&mut self, key: &str, question: &str) -> Result<bool> {
        let answer = self.ui.confirm(&Prompt::confirm(key, question))?;
        tracing::debug!("Prompt '{}' answered {}", key, answer);
        Ok(answer)
    }

    /// Root can run the system package manager without sudo.
    fn is_elevated(&self) -> bool {
        self.config.env.is_root()
    }
}

fn describe_exit(result: &CommandResult) -> String {
    match result.exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "could not be started".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvSnapshot, ISOLATED_ENV_VAR, OVERRIDE_FLAG};
    use crate::error::FreezeupError;
    use crate::fetch::MockFetcher;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PIP: &str = "python3 -m pip";

    fn project(env: EnvSnapshot) -> (TempDir, BootstrapConfig) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("report.py"), "print('hi')\n").unwrap();
        let config = BootstrapConfig::new(temp.path(), env);
        (temp, config)
    }

    fn build_artifact(config: &BootstrapConfig) {
        let artifact = config.artifact_path();
        fs::create_dir_all(artifact.parent().unwrap()).unwrap();
        fs::write(artifact, "binary").unwrap();
    }

    /// Python and pip present, packages and bundler as given.
    fn runner_with(packages_present: bool, bundler_present: bool) -> MockRunner {
        let mut runner = MockRunner::new();
        runner.succeed("apt-get --version");
        runner.succeed_with_output("python3 --version", "Python 3.11.4\n");
        runner.succeed("python3 -m pip --version");
        runner.succeed("python3 -m pip install");
        runner.succeed("python3 -m PyInstaller");
        if packages_present {
            runner.succeed("python3 -m pip show");
        } else {
            runner.fail("python3 -m pip show");
        }
        if bundler_present {
            runner.succeed("python3 -m pip show pyinstaller");
        } else {
            runner.fail("python3 -m pip show pyinstaller");
        }
        runner
    }

    fn run(
        config: &BootstrapConfig,
        runner: &MockRunner,
        ui: &mut MockUI,
    ) -> Result<BootstrapReport> {
        let fetcher = MockFetcher::failing();
        Bootstrapper::new(config, runner, &fetcher, ui).run()
    }

    #[test]
    fn all_absent_and_accepted_installs_in_one_batch() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let runner = runner_with(false, false);
        let mut ui = MockUI::answering(true);

        let report = run(&config, &runner, &mut ui).unwrap();

        let batch = format!("{PIP} install pandas matplotlib seaborn numpy");
        assert_eq!(runner.count(&batch), 1);
        assert_eq!(runner.count(&format!("{PIP} install pandas")), 1);
        assert_eq!(
            report.installed_packages,
            vec!["pandas", "matplotlib", "seaborn", "numpy"]
        );
        assert!(report.bundler_installed);
        assert!(runner.ran(&format!("{PIP} install pyinstaller")));
        assert!(runner.ran("python3 -m PyInstaller --onefile report.py"));
        assert!(report.artifact.ends_with(Path::new("dist").join("report")));
        assert_eq!(
            ui.prompts_shown(),
            &["install_packages".to_string(), "install_bundler".to_string()]
        );
        assert_eq!(ui.headers(), &["freezeup: building report.py".to_string()]);
    }

    #[test]
    fn stages_run_in_order() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let runner = runner_with(false, false);
        let mut ui = MockUI::answering(true);

        run(&config, &runner, &mut ui).unwrap();

        let calls = runner.invocations();
        let pos = |prefix: &str| calls.iter().position(|c| c.starts_with(prefix)).unwrap();
        assert!(pos("apt-get --version") < pos("python3 --version"));
        assert!(pos("python3 --version") < pos("python3 -m pip --version"));
        assert!(pos("python3 -m pip --version") < pos("python3 -m pip install --upgrade pip"));
        assert!(pos("python3 -m pip install --upgrade pip") < pos("python3 -m pip show pandas"));
        assert!(pos("python3 -m pip show numpy") < pos("python3 -m pip install pandas"));
        assert!(pos("python3 -m pip install pandas") < pos("python3 -m pip show pyinstaller"));
        assert!(pos("python3 -m pip install pyinstaller") < pos("python3 -m PyInstaller"));
    }

    #[test]
    fn idempotent_when_everything_present() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let runner = runner_with(true, true);

        for _ in 0..2 {
            let mut ui = MockUI::new();
            let report = run(&config, &runner, &mut ui).unwrap();
            assert!(ui.prompts_shown().is_empty());
            assert!(report.installed_packages.is_empty());
            assert!(!report.bundler_installed);
        }

        let installs: Vec<String> = runner
            .invocations()
            .into_iter()
            .filter(|c| c.starts_with("python3 -m pip install") && !c.contains("--upgrade pip"))
            .collect();
        assert!(installs.is_empty(), "unexpected installs: {installs:?}");
        assert_eq!(runner.count("python3 -m PyInstaller"), 2);
    }

    #[test]
    fn declining_packages_stops_before_bundler() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let runner = runner_with(false, false);
        let mut ui = MockUI::answering(false);

        let err = run(&config, &runner, &mut ui).unwrap_err();

        assert!(matches!(err, FreezeupError::DependencyInstallFailed { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!runner.ran("python3 -m pip install pandas"));
        assert!(!runner.ran("python3 -m pip show pyinstaller"));
        assert!(!runner.ran("python3 -m PyInstaller"));
    }

    #[test]
    fn failed_batch_install_is_fatal() {
        let (_temp, config) = project(EnvSnapshot::default());
        let mut runner = runner_with(false, true);
        runner.fail("python3 -m pip install pandas");
        let mut ui = MockUI::answering(true);

        let err = run(&config, &runner, &mut ui).unwrap_err();

        match err {
            FreezeupError::DependencyInstallFailed { packages, .. } => {
                assert_eq!(packages, "pandas, matplotlib, seaborn, numpy");
            }
            other => panic!("Expected DependencyInstallFailed, got {other:?}"),
        }
        assert!(!runner.ran("python3 -m PyInstaller"));
    }

    #[test]
    fn missing_target_fails_before_bundler_runs() {
        let (temp, config) = project(EnvSnapshot::default());
        fs::remove_file(temp.path().join("report.py")).unwrap();
        let runner = runner_with(true, true);
        let mut ui = MockUI::new();

        let err = run(&config, &runner, &mut ui).unwrap_err();

        assert!(matches!(err, FreezeupError::BuildTargetNotFound { .. }));
        assert!(!runner.ran("python3 -m PyInstaller"));
    }

    #[test]
    fn isolated_environment_adds_override_and_skips_upgrade() {
        let env = EnvSnapshot::from_pairs([(ISOLATED_ENV_VAR, "/opt/conda")]);
        let (_temp, config) = project(env);
        build_artifact(&config);
        let runner = runner_with(false, false);
        let mut ui = MockUI::answering(true);

        let report = run(&config, &runner, &mut ui).unwrap();

        assert_eq!(report.mode, EnvironmentMode::Isolated);
        assert!(!report.installer_upgraded);
        assert!(!runner.ran("python3 -m pip install --upgrade pip"));
        assert!(runner.ran(&format!(
            "{PIP} install {OVERRIDE_FLAG} pandas matplotlib seaborn numpy"
        )));
        assert!(runner.ran(&format!("{PIP} install {OVERRIDE_FLAG} pyinstaller")));
    }

    #[test]
    fn normal_environment_upgrades_without_override() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let runner = runner_with(false, true);
        let mut ui = MockUI::answering(true);

        let report = run(&config, &runner, &mut ui).unwrap();

        assert_eq!(report.mode, EnvironmentMode::Normal);
        assert!(report.installer_upgraded);
        assert!(!runner
            .invocations()
            .iter()
            .any(|c| c.contains(OVERRIDE_FLAG)));
    }

    #[test]
    fn upgrade_failure_is_only_a_warning() {
        let (_temp, config) = project(EnvSnapshot::default());
        build_artifact(&config);
        let mut runner = runner_with(true, true);
        runner.fail("python3 -m pip install --upgrade pip");
        let mut ui = MockUI::new();

        let report = run(&config, &runner, &mut ui).unwrap();

        assert!(!report.installer_upgraded);
        assert!(ui.has_warning("upgrade pip"));
    }

    #[test]
    fn artifact_missing_after_build_is_error() {
        let (_temp, config) = project(EnvSnapshot::default());
        let runner = runner_with(true, true);
        let mut ui = MockUI::new();

        let err = run(&config, &runner, &mut ui).unwrap_err();

        assert!(matches!(err, FreezeupError::ArtifactNotFound { .. }));
    }

    #[test]
    fn build_failure_is_error() {
        let (_temp, config) = project(EnvSnapshot::default());
        let mut runner = runner_with(true, true);
        runner.fail("python3 -m PyInstaller");
        let mut ui = MockUI::new();

        let err = run(&config, &runner, &mut ui).unwrap_err();

        match err {
            FreezeupError::BuildFailed { command, code } => {
                assert!(command.contains("--onefile report.py"));
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected BuildFailed, got {other:?}"),
        }
    }

    #[test]
    fn success_prints_path_guidance() {
        let env = EnvSnapshot::from_pairs([("SHELL", "/bin/bash"), ("HOME", "/home/dev")]);
        let (_temp, config) = project(env);
        build_artifact(&config);
        let runner = runner_with(true, true);
        let mut ui = MockUI::new();

        run(&config, &runner, &mut ui).unwrap();

        assert!(ui.has_success("Executable ready"));
        assert!(ui.has_hint("export PATH=\"$PATH:"));
        assert!(ui.has_message(".bashrc"));
    }
}
