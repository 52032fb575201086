// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions run when the schedule fires
//!
//! An action is an opaque side-effecting operation. The ordered list is
//! handed to the trigger's binding unchanged; each action may fail on its own
//! without stopping the ones after it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("command `{command}` failed with {}", exit_status(.code))]
    CommandFailed { command: String, code: Option<i32> },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Failed(String),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

/// A single operation invoked when the trigger fires
pub trait Action {
    fn name(&self) -> &str;

    fn execute(&self) -> Result<(), ActionError>;
}

/// Writes a message to the log
pub struct LogAction {
    message: String,
}

impl LogAction {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Action for LogAction {
    fn name(&self) -> &str {
        "log"
    }

    fn execute(&self) -> Result<(), ActionError> {
        tracing::info!("{}", self.message);
        Ok(())
    }
}

/// Runs a shell command and waits for it
pub struct CommandAction {
    run: String,
}

impl CommandAction {
    pub fn new(run: impl Into<String>) -> Self {
        Self { run: run.into() }
    }
}

impl Action for CommandAction {
    fn name(&self) -> &str {
        &self.run
    }

    fn execute(&self) -> Result<(), ActionError> {
        tracing::info!(command = %self.run, "running command");
        let status = Command::new("sh").arg("-c").arg(&self.run).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(ActionError::CommandFailed {
                command: self.run.clone(),
                code: status.code(),
            })
        }
    }
}

/// Wraps a closure as an action
pub struct FnAction<F> {
    name: String,
    f: F,
}

impl<F> FnAction<F>
where
    F: Fn() -> Result<(), ActionError>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Action for FnAction<F>
where
    F: Fn() -> Result<(), ActionError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<(), ActionError> {
        (self.f)()
    }
}

/// Ordered, immutable list of actions; clones share the same list
#[derive(Clone)]
pub struct ActionList {
    actions: Rc<[Box<dyn Action>]>,
}

impl ActionList {
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self {
            actions: Rc::from(actions),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name()).collect()
    }

    /// Whether both lists are the same shared list
    pub fn same_list(&self, other: &ActionList) -> bool {
        Rc::ptr_eq(&self.actions, &other.actions)
    }

    /// Execute every action in order. Returns the number that failed.
    pub fn run_all(&self) -> usize {
        let mut failed = 0;
        for action in self.actions.iter() {
            if let Err(e) = action.execute() {
                failed += 1;
                tracing::warn!(action = action.name(), error = %e, "action failed");
            }
        }
        failed
    }
}

impl Default for ActionList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Box<dyn Action>> for ActionList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Action>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for ActionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Declarative action definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionConfig {
    /// Log a message
    Log { message: String },
    /// Run a shell command
    Command { run: String },
}

impl ActionConfig {
    pub fn build(&self) -> Box<dyn Action> {
        match self {
            ActionConfig::Log { message } => Box::new(LogAction::new(message.clone())),
            ActionConfig::Command { run } => Box::new(CommandAction::new(run.clone())),
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
