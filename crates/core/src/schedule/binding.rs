// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binding between a trigger and the actions it fires

use super::trigger::CronTrigger;
use crate::action::ActionList;
use crate::clock::Clock;
use std::rc::Rc;

/// The action list as run by a trigger
pub struct Automation {
    actions: ActionList,
}

impl Automation {
    pub fn actions(&self) -> &ActionList {
        &self.actions
    }

    /// Run every action in order
    pub fn trigger(&self) {
        let failed = self.actions.run_all();
        if failed > 0 {
            tracing::warn!(failed, total = self.actions.len(), "some actions failed");
        }
    }
}

/// Owns the automation a trigger points at. The trigger only holds a weak
/// reference, so dropping the binding detaches the actions.
pub struct ActionBinding {
    automation: Rc<Automation>,
}

impl ActionBinding {
    pub fn bind<C: Clock>(trigger: &CronTrigger<C>, actions: ActionList) -> Self {
        let automation = Rc::new(Automation { actions });
        trigger.attach(Rc::downgrade(&automation));
        Self { automation }
    }

    pub fn actions(&self) -> &ActionList {
        self.automation.actions()
    }

    pub fn is_attached_to<C: Clock>(&self, trigger: &CronTrigger<C>) -> bool {
        trigger.is_bound_to(&self.automation)
    }
}
