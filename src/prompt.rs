//! Module for the confirmation dependency injected into the generation orchestrator.
//!
//! Confirmations are the only recoverable branch points of a run (regenerate
//! a missing config, clear a non-empty folder, continue past a failed seed
//! check). Modelling them as an injected trait keeps the orchestrator
//! testable without a live terminal.

use std::io::{BufRead, Write};

/// Answers yes/no questions on behalf of the operator.
pub trait Confirm {
    /// Returns `true` to proceed. A `false` answer makes the pending
    /// operation fail with the error that triggered the question.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Wraps a closure so automated callers (tests, CI) can supply canned
/// decisions deterministically.
pub struct Answers<F>(F);

impl<F: FnMut(&str) -> bool> Answers<F> {
    pub fn with(answer: F) -> Self {
        Self(answer)
    }
}

impl<F: FnMut(&str) -> bool> Confirm for Answers<F> {
    fn confirm(&mut self, prompt: &str) -> bool {
        (self.0)(prompt)
    }
}

/// Interactive answerer reading `y`/`n` lines from stdin. Prompts go to
/// stderr so they never mix with generated or piped output.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl StdinConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut err = std::io::stderr();
        if write!(err, "{prompt} [y/n] ").and_then(|()| err.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
