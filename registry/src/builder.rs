//! RegistryBuilder for constructing an immutable Registry.
//!
//! Building is the bootstrap phase: handlers are registered once, by a
//! single writer, before any dispatch. The built [`Registry`] is read-only
//! and can be shared across threads when its handlers can.

use crate::binder::{self, Arguments};
use crate::{MutationHandler, Registry};
use morph_core::{Host, MutatorResult};
use std::collections::HashMap;

/// Builder for constructing an immutable Registry.
pub struct RegistryBuilder<H> {
    /// Handlers being built, in registration order.
    handlers: Vec<MutationHandler<H>>,
    /// Handler name to position mapping.
    handler_names: HashMap<String, usize>,
}

impl<H> Default for RegistryBuilder<H> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            handler_names: HashMap::new(),
        }
    }
}

impl<H> std::fmt::Debug for RegistryBuilder<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<H: Host + 'static> RegistryBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    ///
    /// A handler registered under a name already in use replaces the
    /// earlier one and takes over its dispatch position.
    pub fn register(&mut self, handler: MutationHandler<H>) -> &mut Self {
        match self.handler_names.get(handler.name()) {
            Some(&position) => {
                tracing::debug!(
                    host = H::type_name(),
                    handler = handler.name(),
                    position,
                    "replaced mutation handler"
                );
                self.handlers[position] = handler;
            }
            None => {
                let position = self.handlers.len();
                tracing::debug!(
                    host = H::type_name(),
                    handler = handler.name(),
                    position,
                    "registered mutation handler"
                );
                self.handler_names.insert(handler.name().to_string(), position);
                self.handlers.push(handler);
            }
        }
        self
    }

    /// Build a handler from named arguments and register it.
    pub fn make(&mut self, arguments: &Arguments) -> MutatorResult<&mut Self> {
        let handler = binder::make::<MutationHandler<H>>(arguments)?;
        Ok(self.register(handler))
    }

    /// Register `method` as the get mutator for the bag field `bag`.
    ///
    /// The handler is named after the bag. An existing handler of that
    /// name keeps its set mutator.
    pub fn register_get_mutator(&mut self, bag: &str, method: &str) -> MutatorResult<&mut Self> {
        let mut handler = self.existing_or_new(bag);
        handler.register_get_mutator(method, false, None)?;
        Ok(self.register(handler))
    }

    /// Register `method` as the set mutator for the bag field `bag`.
    ///
    /// The handler is named after the bag. An existing handler of that
    /// name keeps its get mutator.
    pub fn register_set_mutator(&mut self, bag: &str, method: &str) -> MutatorResult<&mut Self> {
        let mut handler = self.existing_or_new(bag);
        handler.register_set_mutator(method, false, None)?;
        Ok(self.register(handler))
    }

    fn existing_or_new(&self, name: &str) -> MutationHandler<H> {
        self.handler_names
            .get(name)
            .map(|&position| self.handlers[position].clone())
            .unwrap_or_else(|| MutationHandler::new(name))
    }

    /// Number of handlers registered so far.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry<H> {
        Registry::new(self.handlers, self.handler_names)
    }
}
