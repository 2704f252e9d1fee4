//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are keyed by command-line prefix; the longest matching prefix
//! wins. Every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use freezeup::shell::{CommandRunner, CommandSpec, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.succeed("python3 --version");
//! runner.fail("python3 -m pip show pandas");
//!
//! assert!(runner.succeeds(&CommandSpec::new("python3").arg("--version")));
//! assert!(!runner.succeeds(&CommandSpec::new("python3").args(["-m", "pip", "show", "pandas"])));
//! assert_eq!(runner.invocations().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use super::command::{CommandResult, CommandRunner, CommandSpec};

#[derive(Debug)]
struct Rule {
    prefix: String,
    queued: VecDeque<CommandResult>,
    sticky: CommandResult,
}

/// Command runner with canned responses.
///
/// Commands matching no rule fail as if the program were not installed.
#[derive(Debug, Default)]
pub struct MockRunner {
    rules: RefCell<Vec<Rule>>,
    invocations: RefCell<Vec<CommandSpec>>,
}

fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
}

fn err() -> CommandResult {
    CommandResult::failure(Some(1), String::new(), String::new(), Duration::ZERO)
}

impl MockRunner {
    /// Create a runner where every command fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` succeed with empty output.
    pub fn succeed(&mut self, prefix: &str) {
        self.respond(prefix, ok(""));
    }

    /// Commands starting with `prefix` succeed and print `stdout`.
    pub fn succeed_with_output(&mut self, prefix: &str, stdout: &str) {
        self.respond(prefix, ok(stdout));
    }

    /// Commands starting with `prefix` exit 1.
    pub fn fail(&mut self, prefix: &str) {
        self.respond(prefix, err());
    }

    /// Commands starting with `prefix` return `result`.
    pub fn respond(&mut self, prefix: &str, result: CommandResult) {
        self.set_rule(prefix, VecDeque::new(), result);
    }

    /// Successive outcomes for the same prefix.
    ///
    /// Outcomes are consumed in order; the last one repeats once the
    /// sequence is exhausted.
    pub fn sequence(&mut self, prefix: &str, outcomes: Vec<bool>) {
        let mut queued: VecDeque<CommandResult> = outcomes
            .into_iter()
            .map(|success| if success { ok("") } else { err() })
            .collect();
        let sticky = queued.pop_back().unwrap_or_else(err);
        self.set_rule(prefix, queued, sticky);
    }

    fn set_rule(&mut self, prefix: &str, queued: VecDeque<CommandResult>, sticky: CommandResult) {
        let rules = self.rules.get_mut();
        rules.retain(|r| r.prefix != prefix);
        rules.push(Rule {
            prefix: prefix.to_string(),
            queued,
            sticky,
        });
    }

    /// All command lines run so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(|spec| spec.to_string()).collect()
    }

    /// Every command run so far, with its working directory and capture
    /// mode.
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.invocations.borrow().clone()
    }

    /// Number of invocations starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    /// Whether any invocation started with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.count(prefix) > 0
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, spec: &CommandSpec) -> CommandResult {
        let line = spec.to_string();
        self.invocations.borrow_mut().push(spec.clone());

        let mut rules = self.rules.borrow_mut();
        let best = rules
            .iter_mut()
            .filter(|r| line.starts_with(&r.prefix))
            .max_by_key(|r| r.prefix.len());

        match best {
            Some(rule) => rule.queued.pop_front().unwrap_or_else(|| rule.sticky.clone()),
            None => CommandResult::not_started(format!("{}: command not found", spec.program)),
        }
    }
}
