// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule configuration
//!
//! A TOML file describing the tick interval, the initial value and display
//! name of every input, and the actions to run when the schedule fires.

use crate::action::{ActionConfig, ActionList};
use crate::input::{NumberInput, SwitchInput};
use crate::schedule::ScheduleInputs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

pub const HOUR_MAX: f32 = 23.0;
pub const MINUTE_MAX: f32 = 59.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: initial value {value} outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{field}: initial value {value} must be a whole number")]
    NotWhole { field: &'static str, value: f32 },
    #[error("tick_interval must be greater than zero")]
    ZeroTickInterval,
}

/// A numeric input's display name and starting value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberInputConfig {
    pub name: Option<String>,
    pub initial: f32,
}

/// A switch input's display name and starting state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchInputConfig {
    pub name: Option<String>,
    pub initial: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdaysConfig {
    pub mon: SwitchInputConfig,
    pub tue: SwitchInputConfig,
    pub wed: SwitchInputConfig,
    pub thu: SwitchInputConfig,
    pub fri: SwitchInputConfig,
    pub sat: SwitchInputConfig,
    pub sun: SwitchInputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// How often the host loop ticks registered components
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    pub hour: NumberInputConfig,
    pub minute: NumberInputConfig,
    pub weekdays: WeekdaysConfig,
    pub actions: Vec<ActionConfig>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            hour: NumberInputConfig::default(),
            minute: NumberInputConfig::default(),
            weekdays: WeekdaysConfig::default(),
            actions: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), actions = config.actions.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ScheduleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_initial("hour.initial", self.hour.initial, HOUR_MAX)?;
        check_initial("minute.initial", self.minute.initial, MINUTE_MAX)?;
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Create the nine inputs with their configured names and initial values
    pub fn build_inputs(&self) -> ScheduleInputs {
        let number = |config: &NumberInputConfig, default: &str, max: f32| {
            Rc::new(NumberInput::new(
                config.name.as_deref().unwrap_or(default),
                0.0,
                max,
                config.initial,
            ))
        };
        let switch = |config: &SwitchInputConfig, default: &str| {
            Rc::new(SwitchInput::new(
                config.name.as_deref().unwrap_or(default),
                config.initial,
            ))
        };

        let days = &self.weekdays;
        ScheduleInputs {
            hour: number(&self.hour, "Hour", HOUR_MAX),
            minute: number(&self.minute, "Minute", MINUTE_MAX),
            mon: switch(&days.mon, "Monday"),
            tue: switch(&days.tue, "Tuesday"),
            wed: switch(&days.wed, "Wednesday"),
            thu: switch(&days.thu, "Thursday"),
            fri: switch(&days.fri, "Friday"),
            sat: switch(&days.sat, "Saturday"),
            sun: switch(&days.sun, "Sunday"),
        }
    }

    pub fn build_actions(&self) -> ActionList {
        self.actions.iter().map(ActionConfig::build).collect()
    }
}

fn check_initial(field: &'static str, value: f32, max: f32) -> Result<(), ConfigError> {
    if !(0.0..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max,
        });
    }
    if value.fract() != 0.0 {
        return Err(ConfigError::NotWhole { field, value });
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
