// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuilds the trigger's rule and action binding from an input snapshot

use super::binding::ActionBinding;
use super::trigger::CronTrigger;
use super::weekday::{self, WeekdayFlags};
use crate::action::ActionList;
use crate::clock::Clock;
use std::rc::Rc;

/// Input values read at the start of a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    pub hour: u8,
    pub minute: u8,
    pub weekdays: WeekdayFlags,
}

/// Owns the single trigger and its current action binding
pub struct TriggerRebuilder<C: Clock> {
    clock: C,
    actions: ActionList,
    trigger: Option<Rc<CronTrigger<C>>>,
    binding: Option<ActionBinding>,
    rebuilds: u64,
}

impl<C: Clock> TriggerRebuilder<C> {
    pub fn new(clock: C, actions: ActionList) -> Self {
        Self {
            clock,
            actions,
            trigger: None,
            binding: None,
            rebuilds: 0,
        }
    }

    /// Reconfigure the trigger for `snapshot`. The first call creates the
    /// trigger; later calls reset the same instance in place.
    pub fn rebuild(&mut self, snapshot: &InputSnapshot) -> Rc<CronTrigger<C>> {
        let trigger = match self.trigger.as_ref() {
            Some(existing) => {
                existing.reset();
                Rc::clone(existing)
            }
            None => Rc::new(CronTrigger::new(self.clock.clone())),
        };
        self.trigger = Some(Rc::clone(&trigger));

        // The old binding must be gone before the new one attaches
        drop(self.binding.take());
        self.binding = Some(ActionBinding::bind(&trigger, self.actions.clone()));

        let weekdays = weekday::translate(&snapshot.weekdays);
        trigger.update_rule(|rule| {
            rule.add_second(0);
            rule.add_days_of_month(1..=31);
            rule.add_months(1..=12);
            rule.add_hour(snapshot.hour);
            rule.add_minute(snapshot.minute);
            rule.add_weekdays(weekdays);
        });

        self.rebuilds += 1;
        tracing::debug!(
            rebuilds = self.rebuilds,
            rule = %trigger.rule(),
            "schedule rebuilt"
        );
        trigger
    }

    pub fn trigger(&self) -> Option<&Rc<CronTrigger<C>>> {
        self.trigger.as_ref()
    }

    pub fn binding(&self) -> Option<&ActionBinding> {
        self.binding.as_ref()
    }

    pub fn actions(&self) -> &ActionList {
        &self.actions
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
