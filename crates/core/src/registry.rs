// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host component registry
//!
//! Components are registered once and ticked in registration order by the
//! host loop. Ticking takes `&self`; components use interior mutability so a
//! tick may re-enter other components through input callbacks.

use std::rc::Rc;

pub trait Component {
    fn name(&self) -> &str;

    /// Called once per pass of the host loop
    fn tick(&self);
}

#[derive(Default)]
pub struct ComponentRegistry {
    components: Vec<Rc<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, component: Rc<dyn Component>) {
        tracing::debug!(component = component.name(), "registered component");
        self.components.push(component);
    }

    /// Tick every registered component once
    pub fn loop_once(&self) {
        for component in &self.components {
            component.tick();
        }
    }

    pub fn components(&self) -> &[Rc<dyn Component>] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
