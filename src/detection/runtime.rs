//! Python interpreter discovery.

use regex::Regex;
use std::sync::LazyLock;

use crate::shell::{CommandRunner, CommandSpec};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid")
});

/// The interpreter command every later stage runs through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHandle {
    /// Command name, e.g. `python3`.
    pub command: String,
    /// Version reported by `--version`, when it could be parsed.
    pub version: Option<String>,
}

impl RuntimeHandle {
    /// Try candidates in order and return the first that answers
    /// `--version` successfully.
    pub fn discover(runner: &dyn CommandRunner, candidates: &[String]) -> Option<Self> {
        for candidate in candidates {
            let result = runner.run(&CommandSpec::new(candidate.as_str()).arg("--version"));
            if result.success {
                let version = parse_version(&result.combined_output());
                tracing::debug!("Found runtime {} ({:?})", candidate, version);
                return Some(Self {
                    command: candidate.clone(),
                    version,
                });
            }
            tracing::debug!("Runtime candidate {} not available", candidate);
        }
        None
    }

    /// `<runtime> -m <module> <args...>`.
    pub fn module<I, S>(&self, module: &str, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(self.command.as_str())
            .args(["-m", module])
            .args(args)
    }

    /// `<runtime> -m pip <args...>`.
    pub fn pip<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module("pip", args)
    }

    /// Display label, e.g. `python3 (3.11.4)`.
    pub fn label(&self) -> String {
        match &self.version {
            Some(v) => format!("{} ({})", self.command, v),
            None => self.command.clone(),
        }
    }
}

/// Extract `X.Y[.Z]` from interpreter `--version` output.
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_RE
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
