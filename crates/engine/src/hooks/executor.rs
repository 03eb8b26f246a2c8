//! Hook execution
//!
//! Hook commands are opaque strings handed to the host shell. Standard
//! streams are inherited so hook output shows up inline with the status log.

use super::Hook;
use crate::report::StepOutcome;
use indexmap::IndexMap;
use std::path::Path;

/// Environment variable holding the fragment name
pub const ENV_FRAGMENT: &str = "NASTRAJACZ_FRAGMENT";
/// Environment variable holding the transfer direction (`apply`/`fetch`)
pub const ENV_MODE: &str = "NASTRAJACZ_MODE";
/// Environment variable holding the target basename (target hooks only)
pub const ENV_TARGET: &str = "NASTRAJACZ_TARGET";

/// Runs hook commands
pub trait HookExecutor {
    /// Run a hook in `working_dir` and classify the result
    ///
    /// Never fails: a non-zero exit status is a [`StepOutcome::HookFailed`].
    fn execute(&self, hook: &Hook<'_>, working_dir: &Path) -> StepOutcome;
}

/// Executes hooks with `sh -c` (`cmd /C` on Windows)
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    env_vars: IndexMap<String, String>,
}

impl ShellExecutor {
    /// Create an executor with no extra environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for configuring a `ShellExecutor`
    ///
    /// # Examples
    ///
    /// ```
    /// use nastrajacz_engine::hooks::ShellExecutor;
    ///
    /// let executor = ShellExecutor::builder()
    ///     .env("DOTFILES_PROFILE", "work")
    ///     .build();
    /// ```
    pub fn builder() -> ShellExecutorBuilder {
        ShellExecutorBuilder::default()
    }

    /// Environment passed to a hook on top of the inherited one
    fn hook_env(&self, hook: &Hook<'_>) -> IndexMap<String, String> {
        let mut env = self.env_vars.clone();
        env.insert(ENV_FRAGMENT.to_string(), hook.fragment.to_string());
        env.insert(ENV_MODE.to_string(), hook.kind.direction().to_string());
        if let Some(target) = hook.target {
            env.insert(ENV_TARGET.to_string(), target.to_string());
        }
        env
    }
}

impl HookExecutor for ShellExecutor {
    #[tracing::instrument(skip(self, hook), fields(kind = %hook.kind, label = %hook.label(), working_dir = %working_dir.display()))]
    fn execute(&self, hook: &Hook<'_>, working_dir: &Path) -> StepOutcome {
        tracing::debug!(command = hook.command, "Spawning hook");

        let mut expression = shell_command(hook.command).dir(working_dir).unchecked();
        for (key, value) in &self.hook_env(hook) {
            expression = expression.env(key, value);
        }

        match expression.run() {
            Ok(output) => match output.status.code() {
                Some(0) => StepOutcome::Done,
                Some(code) => {
                    tracing::debug!(code, "Hook exited with non-zero status");
                    StepOutcome::HookFailed(code)
                }
                None => {
                    tracing::warn!("Hook '{}' was terminated by a signal", hook.label());
                    StepOutcome::HookFailed(-1)
                }
            },
            Err(e) => {
                tracing::warn!("Failed to run {} for {}: {}", hook.kind, hook.label(), e);
                StepOutcome::HookFailed(-1)
            }
        }
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> duct::Expression {
    duct::cmd("sh", ["-c", command])
}

#[cfg(windows)]
fn shell_command(command: &str) -> duct::Expression {
    duct::cmd("cmd", ["/C", command])
}

/// Builder for creating a `ShellExecutor` with custom configuration
#[derive(Debug, Default)]
pub struct ShellExecutorBuilder {
    env_vars: IndexMap<String, String>,
}

impl ShellExecutorBuilder {
    /// Add an environment variable available to all hooks
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Build the executor
    pub fn build(self) -> ShellExecutor {
        ShellExecutor {
            env_vars: self.env_vars,
        }
    }
}
