//! The Registry - ordered handler lookup.

use crate::MutationHandler;
use std::collections::HashMap;

/// The Registry holds the mutation handlers bound to one host type, in
/// dispatch-priority order. It is immutable after construction; use
/// [`RegistryBuilder`](crate::RegistryBuilder) during bootstrap.
pub struct Registry<H> {
    /// Handlers in registration order.
    handlers: Vec<MutationHandler<H>>,
    /// Handler position lookup by name.
    handler_names: HashMap<String, usize>,
}

impl<H> Registry<H> {
    pub(crate) fn new(
        handlers: Vec<MutationHandler<H>>,
        handler_names: HashMap<String, usize>,
    ) -> Self {
        Self {
            handlers,
            handler_names,
        }
    }

    /// Get a handler by name.
    pub fn handler(&self, name: &str) -> Option<&MutationHandler<H>> {
        self.handler_names.get(name).map(|&i| &self.handlers[i])
    }

    /// Get the dispatch position of a handler.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.handler_names.get(name).copied()
    }

    /// All handlers, in dispatch order.
    pub fn handlers(&self) -> impl Iterator<Item = &MutationHandler<H>> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            handler_names: HashMap::new(),
        }
    }
}

impl<H> std::fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &self.handlers)
            .finish()
    }
}
