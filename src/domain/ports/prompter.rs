//! Prompter Port
//!
//! The operator, as seen by the orchestrator. The terminal implementation
//! lives in the binary; tests substitute a scripted responder.

use crate::error::DeployResult;

/// A yes/no question preceded by an instructional checklist.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmRequest<'a> {
    pub title: &'a str,
    pub lines: &'a [&'a str],
    pub question: &'a str,
}

pub trait Prompter {
    /// Ask for explicit confirmation. Anything but an affirmative answer is `false`.
    fn confirm(&self, request: &ConfirmRequest<'_>) -> DeployResult<bool>;

    /// Single selection among `choices`, returning the chosen index.
    ///
    /// There is no default and no way to skip: dismissing the prompt is
    /// `DeployError::PromptCancelled`.
    fn select(&self, prompt: &str, choices: &[String]) -> DeployResult<usize>;
}
