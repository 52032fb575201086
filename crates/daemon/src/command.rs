// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line commands read from stdin while the daemon runs

use chrono::Weekday;
use ontime_core::{Clock, InputError, ScheduleCoordinator, SwitchInput};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{command}: expected {expected}")]
    BadArgument {
        command: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOp {
    On,
    Off,
    Toggle,
}

impl FromStr for SwitchOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(SwitchOp::On),
            "off" => Ok(SwitchOp::Off),
            "toggle" => Ok(SwitchOp::Toggle),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    Hour(f32),
    Minute(f32),
    Day(Weekday, SwitchOp),
    Dump,
    Quit,
}

/// What the run loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Dump,
    Quit,
}

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(CommandError::Empty);
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.trim().to_string()));
        }

        let bad = |expected: &'static str| CommandError::BadArgument {
            command: command.to_string(),
            expected,
        };

        match (command, argument) {
            ("dump", None) => Ok(HostCommand::Dump),
            ("quit", None) => Ok(HostCommand::Quit),
            ("hour", Some(value)) => value
                .parse()
                .map(HostCommand::Hour)
                .map_err(|_| bad("a number")),
            ("minute", Some(value)) => value
                .parse()
                .map(HostCommand::Minute)
                .map_err(|_| bad("a number")),
            ("hour" | "minute", None) => Err(bad("a number")),
            (day, argument) => {
                let weekday = parse_weekday(day)
                    .ok_or_else(|| CommandError::Unknown(line.trim().to_string()))?;
                let op = argument
                    .and_then(|a| a.parse().ok())
                    .ok_or_else(|| bad("on, off or toggle"))?;
                Ok(HostCommand::Day(weekday, op))
            }
        }
    }
}

fn parse_weekday(word: &str) -> Option<Weekday> {
    match word {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

impl HostCommand {
    /// Apply the command to the coordinator's inputs
    pub fn apply<C: Clock + 'static>(
        self,
        coordinator: &ScheduleCoordinator<C>,
    ) -> Result<Flow, CommandError> {
        let inputs = coordinator.inputs();
        match self {
            HostCommand::Hour(value) => inputs.hour.set(value)?,
            HostCommand::Minute(value) => inputs.minute.set(value)?,
            HostCommand::Day(weekday, op) => {
                let switch: &SwitchInput = match weekday {
                    Weekday::Mon => &*inputs.mon,
                    Weekday::Tue => &*inputs.tue,
                    Weekday::Wed => &*inputs.wed,
                    Weekday::Thu => &*inputs.thu,
                    Weekday::Fri => &*inputs.fri,
                    Weekday::Sat => &*inputs.sat,
                    Weekday::Sun => &*inputs.sun,
                };
                match op {
                    SwitchOp::On => switch.set(true),
                    SwitchOp::Off => switch.set(false),
                    SwitchOp::Toggle => switch.toggle(),
                }
            }
            HostCommand::Dump => return Ok(Flow::Dump),
            HostCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
