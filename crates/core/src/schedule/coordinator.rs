// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule coordinator
//!
//! Owns the hour, minute and weekday inputs plus the action list, and keeps
//! the trigger in sync with them: every change notification rebuilds the
//! trigger from a fresh snapshot of all inputs.

use super::rebuild::{InputSnapshot, TriggerRebuilder};
use super::rule::ScheduleRule;
use super::trigger::CronTrigger;
use super::weekday::WeekdayFlags;
use crate::action::ActionList;
use crate::clock::Clock;
use crate::input::{InputValue, NumberInput, ObservableInput, SwitchInput};
use crate::registry::{Component, ComponentRegistry};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// The nine inputs a schedule is built from
pub struct ScheduleInputs {
    pub hour: Rc<NumberInput>,
    pub minute: Rc<NumberInput>,
    pub mon: Rc<SwitchInput>,
    pub tue: Rc<SwitchInput>,
    pub wed: Rc<SwitchInput>,
    pub thu: Rc<SwitchInput>,
    pub fri: Rc<SwitchInput>,
    pub sat: Rc<SwitchInput>,
    pub sun: Rc<SwitchInput>,
}

impl ScheduleInputs {
    /// Read the current value of every input
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            // Input bounds and the whole-number step keep these exact
            hour: self.hour.state() as u8,
            minute: self.minute.state() as u8,
            weekdays: WeekdayFlags::new(
                self.mon.state(),
                self.tue.state(),
                self.wed.state(),
                self.thu.state(),
                self.fri.state(),
                self.sat.state(),
                self.sun.state(),
            ),
        }
    }

    /// Every input with its diagnostics label, in display order
    fn labelled(&self) -> [(&'static str, &dyn ObservableInput); 9] {
        [
            ("Hour", &*self.hour),
            ("Minute", &*self.minute),
            ("Mon", &*self.mon),
            ("Tue", &*self.tue),
            ("Wed", &*self.wed),
            ("Thu", &*self.thu),
            ("Fri", &*self.fri),
            ("Sat", &*self.sat),
            ("Sun", &*self.sun),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Uninitialized,
    Ready,
}

impl fmt::Display for CoordinatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinatorState::Uninitialized => write!(f, "uninitialized"),
            CoordinatorState::Ready => write!(f, "ready"),
        }
    }
}

/// One line of the diagnostics dump
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticLine {
    pub label: &'static str,
    pub source: String,
    pub value: InputValue,
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (source: '{}'): {}", self.label, self.source, self.value)
    }
}

struct Inner<C: Clock> {
    inputs: ScheduleInputs,
    rebuilder: RefCell<TriggerRebuilder<C>>,
    state: Cell<CoordinatorState>,
}

impl<C: Clock> Inner<C> {
    fn rebuild(&self) -> Rc<CronTrigger<C>> {
        let snapshot = self.inputs.snapshot();
        let trigger = self.rebuilder.borrow_mut().rebuild(&snapshot);
        self.dump_diagnostics();
        trigger
    }

    fn diagnostics(&self) -> Vec<DiagnosticLine> {
        self.inputs
            .labelled()
            .into_iter()
            .map(|(label, input)| DiagnosticLine {
                label,
                source: input.name().to_string(),
                value: input.value(),
            })
            .collect()
    }

    fn dump_diagnostics(&self) {
        tracing::info!("Cron trigger details:");
        for line in self.diagnostics() {
            tracing::info!("{}", line);
        }
    }
}

/// Keeps one cron trigger in sync with its inputs
pub struct ScheduleCoordinator<C: Clock + 'static> {
    inner: Rc<Inner<C>>,
}

impl<C: Clock + 'static> ScheduleCoordinator<C> {
    /// Store the collaborators; nothing is built until `initialize`
    pub fn new(clock: C, inputs: ScheduleInputs, actions: ActionList) -> Self {
        Self {
            inner: Rc::new(Inner {
                inputs,
                rebuilder: RefCell::new(TriggerRebuilder::new(clock, actions)),
                state: Cell::new(CoordinatorState::Uninitialized),
            }),
        }
    }

    /// Build the trigger, register it with the host, then subscribe to every
    /// input. The trigger is fully configured before any callback can run.
    pub fn initialize(&self, registry: &mut ComponentRegistry) {
        if self.inner.state.get() == CoordinatorState::Ready {
            tracing::warn!("schedule already initialized, ignoring");
            return;
        }

        let trigger: Rc<dyn Component> = self.inner.rebuild();
        registry.register(trigger);

        for (_, input) in self.inner.inputs.labelled() {
            let inner = Rc::downgrade(&self.inner);
            input.subscribe(Box::new(move |_value| {
                if let Some(inner) = inner.upgrade() {
                    inner.rebuild();
                }
            }));
        }

        self.inner.state.set(CoordinatorState::Ready);
        tracing::debug!("schedule coordinator ready");
    }

    /// Rebuild from the current input values
    pub fn rebuild(&self) {
        self.inner.rebuild();
    }

    pub fn dump_diagnostics(&self) {
        self.inner.dump_diagnostics();
    }

    pub fn diagnostics(&self) -> Vec<DiagnosticLine> {
        self.inner.diagnostics()
    }

    pub fn state(&self) -> CoordinatorState {
        self.inner.state.get()
    }

    pub fn inputs(&self) -> &ScheduleInputs {
        &self.inner.inputs
    }

    pub fn trigger(&self) -> Option<Rc<CronTrigger<C>>> {
        self.inner.rebuilder.borrow().trigger().cloned()
    }

    pub fn rule(&self) -> Option<ScheduleRule> {
        self.trigger().map(|trigger| trigger.rule())
    }

    /// True when a binding exists and is the one the trigger fires
    pub fn is_bound(&self) -> bool {
        let rebuilder = self.inner.rebuilder.borrow();
        match (rebuilder.trigger(), rebuilder.binding()) {
            (Some(trigger), Some(binding)) => binding.is_attached_to(trigger),
            _ => false,
        }
    }

    pub fn rebuild_count(&self) -> u64 {
        self.inner.rebuilder.borrow().rebuild_count()
    }
}
