// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observable input components
//!
//! Numeric inputs (hour, minute) and boolean switches (weekday toggles)
//! share one capability: a current value, a display name, and change
//! subscriptions. Subscribers are notified synchronously, after the new
//! value is stored, and only when the value actually changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Current value of an input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue {
    Number(f32),
    Flag(bool),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Number(value) => write!(f, "{:.0}", value),
            InputValue::Flag(true) => write!(f, "Yes"),
            InputValue::Flag(false) => write!(f, "No"),
        }
    }
}

pub type InputCallback = Box<dyn Fn(InputValue)>;

/// Fraction of a step still treated as on the step
const STEP_TOLERANCE: f32 = 1e-4;

/// A value source with change notifications
pub trait ObservableInput {
    fn name(&self) -> &str;

    fn value(&self) -> InputValue;

    /// Register a callback invoked with the new value on every change.
    /// A callback added while a change is being delivered sees later changes only.
    fn subscribe(&self, callback: InputCallback);
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{input}: value {value} outside {min}..={max}")]
    OutOfRange {
        input: String,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{input}: value {value} is not a multiple of {step} from {min}")]
    OffStep {
        input: String,
        value: f32,
        min: f32,
        step: f32,
    },
}

#[derive(Default)]
struct Subscribers {
    callbacks: RefCell<Vec<Rc<dyn Fn(InputValue)>>>,
}

impl Subscribers {
    fn push(&self, callback: InputCallback) {
        self.callbacks.borrow_mut().push(Rc::from(callback));
    }

    fn notify(&self, value: InputValue) {
        // Released before calling out so callbacks may subscribe
        let callbacks = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(value);
        }
    }

    fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

/// Bounded numeric input with a fixed step (1 unless changed)
pub struct NumberInput {
    name: String,
    min: f32,
    max: f32,
    step: f32,
    state: Cell<f32>,
    subscribers: Subscribers,
}

impl NumberInput {
    pub fn new(name: impl Into<String>, min: f32, max: f32, initial: f32) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            step: 1.0,
            state: Cell::new(initial),
            subscribers: Subscribers::default(),
        }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn state(&self) -> f32 {
        self.state.get()
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Publish a new value, rejecting anything outside the input's bounds
    /// or between steps
    pub fn set(&self, value: f32) -> Result<(), InputError> {
        if !(self.min..=self.max).contains(&value) {
            return Err(InputError::OutOfRange {
                input: self.name.clone(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        let steps = (value - self.min) / self.step;
        if (steps - steps.round()).abs() > STEP_TOLERANCE {
            return Err(InputError::OffStep {
                input: self.name.clone(),
                value,
                min: self.min,
                step: self.step,
            });
        }
        if self.state.get() == value {
            return Ok(());
        }
        self.state.set(value);
        tracing::debug!(input = %self.name, value, "number input changed");
        self.subscribers.notify(InputValue::Number(value));
        Ok(())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ObservableInput for NumberInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> InputValue {
        InputValue::Number(self.state())
    }

    fn subscribe(&self, callback: InputCallback) {
        self.subscribers.push(callback);
    }
}

/// On/off switch input
pub struct SwitchInput {
    name: String,
    state: Cell<bool>,
    subscribers: Subscribers,
}

impl SwitchInput {
    pub fn new(name: impl Into<String>, initial: bool) -> Self {
        Self {
            name: name.into(),
            state: Cell::new(initial),
            subscribers: Subscribers::default(),
        }
    }

    pub fn state(&self) -> bool {
        self.state.get()
    }

    pub fn set(&self, value: bool) {
        if self.state.replace(value) == value {
            return;
        }
        tracing::debug!(input = %self.name, value, "switch input changed");
        self.subscribers.notify(InputValue::Flag(value));
    }

    pub fn toggle(&self) {
        self.set(!self.state());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ObservableInput for SwitchInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> InputValue {
        InputValue::Flag(self.state())
    }

    fn subscribe(&self, callback: InputCallback) {
        self.subscribers.push(callback);
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
