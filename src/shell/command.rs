//! External command execution.
//!
//! Every tool freezeup drives (the interpreter, pip, the system package
//! manager, the bundler) is spawned through the [`CommandRunner`] trait so
//! the pipeline can be exercised against a scripted runner in tests.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or never started).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Result for a program that could not be spawned at all.
    pub fn not_started(reason: impl Into<String>) -> Self {
        Self::failure(None, String::new(), reason.into(), Duration::ZERO)
    }

    /// Captured stdout and stderr joined, for tools that print versions to stderr.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// A program invocation: executable, arguments, and how to run it.
///
/// Arguments are passed straight to the program, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,

    /// Arguments in order.
    pub args: Vec<String>,

    /// Working directory (inherits the parent's when None).
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr instead of inheriting the terminal.
    pub capture: bool,
}

impl CommandSpec {
    /// Create an invocation of `program` with no arguments.
    ///
    /// Checks are captured by default; use [`CommandSpec::streamed`] for
    /// commands whose output the operator should see.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            capture: true,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in the given directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Let the command write directly to the terminal.
    pub fn streamed(mut self) -> Self {
        self.capture = false;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Capability for running external programs.
///
/// Implementations never return an error for a failing program: the
/// outcome is always a [`CommandResult`].
pub trait CommandRunner {
    /// Run the command to completion.
    fn run(&self, spec: &CommandSpec) -> CommandResult;

    /// Run the command and report only whether it exited 0.
    fn succeeds(&self, spec: &CommandSpec) -> bool {
        self.run(spec).success
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> CommandResult {
        let start = Instant::now();
        tracing::debug!("Running: {}", spec);

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        if spec.capture {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }
        cmd.stdin(Stdio::inherit());

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to start {}: {}", spec.program, e);
                return CommandResult::not_started(e.to_string());
            }
        };

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            spec.program,
            output.status.code(),
            duration
        );

        if output.status.success() {
            CommandResult::success(stdout, stderr, duration)
        } else {
            CommandResult::failure(output.status.code(), stdout, stderr, duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_display_joins_program_and_args() {
        let spec = CommandSpec::new("python3").args(["-m", "pip", "show", "numpy"]);
        assert_eq!(spec.to_string(), "python3 -m pip show numpy");
    }

    #[test]
    fn spec_display_quotes_args_with_spaces() {
        let spec = CommandSpec::new("python3").arg("my script.py");
        assert_eq!(spec.to_string(), "python3 \"my script.py\"");
    }

    #[test]
    fn spec_defaults_to_captured() {
        let spec = CommandSpec::new("brew");
        assert!(spec.capture);
        assert!(!spec.streamed().capture);
    }

    #[test]
    fn not_started_is_failure_without_code() {
        let result = CommandResult::not_started("No such file or directory");
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.stderr.contains("No such file"));
    }

    #[test]
    fn combined_output_includes_stderr() {
        let result = CommandResult::success(
            String::new(),
            "Python 2.7.18\n".to_string(),
            Duration::ZERO,
        );
        assert!(result.combined_output().contains("2.7.18"));
    }

    #[test]
    fn system_runner_reports_missing_program_as_failure() {
        let result = SystemRunner.run(&CommandSpec::new("freezeup-definitely-not-a-program"));
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let result = SystemRunner.run(&CommandSpec::new("echo").arg("hello"));
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_code() {
        let result = SystemRunner.run(&CommandSpec::new("sh").args(["-c", "exit 3"]));
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_honors_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = SystemRunner.run(&CommandSpec::new("pwd").in_dir(temp.path()));
        assert!(result.success);
        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(temp.path()).unwrap());
    }
}
