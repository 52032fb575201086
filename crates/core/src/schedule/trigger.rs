// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar trigger evaluated against the clock on every host tick
//!
//! The trigger is shared (`Rc`) between the registry and its owner, so its
//! configuration is reset and repopulated in place rather than replaced.
//! Bound actions are held weakly: dropping the binding detaches it.

use super::binding::Automation;
use super::rule::ScheduleRule;
use crate::clock::Clock;
use crate::registry::Component;
use chrono::{Duration, NaiveDateTime, Timelike};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Larger jumps (in seconds) restart evaluation from the new time
const MAX_CATCH_UP_SECS: i64 = 15 * 60;

pub struct CronTrigger<C: Clock> {
    clock: C,
    rule: RefCell<ScheduleRule>,
    last_check: Cell<Option<NaiveDateTime>>,
    automation: RefCell<Weak<Automation>>,
    fired: Cell<u64>,
}

impl<C: Clock> CronTrigger<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            rule: RefCell::new(ScheduleRule::new()),
            last_check: Cell::new(None),
            automation: RefCell::new(Weak::new()),
            fired: Cell::new(0),
        }
    }

    /// Return the trigger to its freshly constructed configuration.
    /// The clock binding and the fire counter are kept.
    pub fn reset(&self) {
        self.rule.borrow_mut().clear();
        self.last_check.set(None);
        *self.automation.borrow_mut() = Weak::new();
    }

    pub fn update_rule(&self, f: impl FnOnce(&mut ScheduleRule)) {
        f(&mut self.rule.borrow_mut());
    }

    pub fn rule(&self) -> ScheduleRule {
        self.rule.borrow().clone()
    }

    pub fn matches(&self, moment: &NaiveDateTime) -> bool {
        self.rule.borrow().matches(moment)
    }

    /// Point the trigger at the automation to run when it fires
    pub fn attach(&self, automation: Weak<Automation>) {
        if self.is_bound() {
            tracing::warn!("cron trigger already has actions bound, replacing them");
        }
        *self.automation.borrow_mut() = automation;
    }

    pub fn is_bound(&self) -> bool {
        self.automation.borrow().strong_count() > 0
    }

    pub fn is_bound_to(&self, automation: &Rc<Automation>) -> bool {
        Weak::ptr_eq(&self.automation.borrow(), &Rc::downgrade(automation))
    }

    /// Number of matching seconds seen since creation
    pub fn fired(&self) -> u64 {
        self.fired.get()
    }

    /// Next matching moment after the clock's current time
    pub fn next_fire(&self) -> Option<NaiveDateTime> {
        let now = self.clock.now()?;
        self.rule.borrow().next_match_after(now)
    }

    /// Evaluate every whole second since the previous check
    pub fn check(&self) {
        let Some(now) = self.clock.now() else {
            return;
        };
        let now = now.with_nanosecond(0).unwrap_or(now);

        let Some(last) = self.last_check.get() else {
            self.last_check.set(Some(now));
            return;
        };

        if now <= last {
            // Small corrections keep `last_check` so no second is evaluated twice
            if (last - now).num_seconds() > MAX_CATCH_UP_SECS {
                tracing::warn!(%last, %now, "time jumped back, restarting schedule checks");
                self.last_check.set(Some(now));
            }
            return;
        }
        if (now - last).num_seconds() > MAX_CATCH_UP_SECS {
            tracing::warn!(%last, %now, "time jumped forward, skipping missed schedule checks");
            self.last_check.set(Some(now));
            return;
        }

        let mut moment = last;
        while moment < now {
            moment += Duration::seconds(1);
            self.last_check.set(Some(moment));
            if self.matches(&moment) {
                self.fire(moment);
            }
        }
    }

    fn fire(&self, at: NaiveDateTime) {
        self.fired.set(self.fired.get() + 1);
        // Upgrade before running so no borrow is held while actions execute
        let automation = self.automation.borrow().upgrade();
        match automation {
            Some(automation) => {
                tracing::info!(%at, "cron trigger fired");
                automation.trigger();
            }
            None => tracing::debug!(%at, "cron trigger matched with no actions bound"),
        }
    }
}

impl<C: Clock> Component for CronTrigger<C> {
    fn name(&self) -> &str {
        "cron_trigger"
    }

    fn tick(&self) {
        self.check();
    }
}
