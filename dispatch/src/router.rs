//! Router - routes attribute access through registered handlers.
//!
//! Get dispatch stops at the first handler that claims the attribute.
//! Set dispatch runs every claiming handler in registration order until
//! one that does not stack has run. Attributes nobody claims fall back to
//! the host's baseline access.

use morph_core::{Host, MutatorResult, Operator, Value};
use morph_registry::Registry;
use tracing::debug;

use crate::accessor;
use crate::result::{AttributeRequest, DispatchOutcome, MutatedAttribute, SetOutcome};

/// Routes attribute access on hosts of type `H`.
///
/// The router only reads the registry, and the host is passed to every
/// call, so one router can serve any number of hosts.
pub struct Router<'r, H> {
    registry: &'r Registry<H>,
}

impl<H> Clone for Router<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Router<'_, H> {}

impl<'r, H: Host + 'static> Router<'r, H> {
    /// Create a new router.
    pub fn new(registry: &'r Registry<H>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry<H> {
        self.registry
    }

    /// Read `name`, through the first handler that claims it.
    pub fn get_attribute(&self, host: &H, name: &str) -> MutatorResult<Value> {
        for handler in self.registry.handlers() {
            if handler.has_get_mutator(host, name) {
                debug!(
                    host = H::type_name(),
                    handler = handler.name(),
                    attr = name,
                    "get mutator matched"
                );
                return handler.call_get_mutator(host, name);
            }
        }

        debug!(host = H::type_name(), attr = name, "no get mutator; baseline get");
        Ok(host.baseline_get(name))
    }

    /// Write `name`, through every claiming handler up to the first that
    /// does not stack.
    pub fn set_attribute(&self, host: &mut H, name: &str, value: Value) -> MutatorResult<SetOutcome> {
        let mut invoked = Vec::new();
        let mut last = None;

        for handler in self.registry.handlers() {
            if !handler.has_set_mutator(host, name) {
                continue;
            }

            let result = handler.call_set_mutator(host, name, value.clone())?;
            invoked.push(handler.name().to_string());

            if !handler.should_stack(Operator::Set) {
                debug!(
                    host = H::type_name(),
                    handler = handler.name(),
                    attr = name,
                    chain = invoked.len(),
                    "set mutator matched"
                );
                return Ok(SetOutcome::Mutated(MutatedAttribute {
                    handlers: invoked,
                    result,
                }));
            }

            debug!(
                host = H::type_name(),
                handler = handler.name(),
                attr = name,
                "set mutator stacks; continuing"
            );
            last = Some(result);
        }

        match last {
            Some(result) => Ok(SetOutcome::Mutated(MutatedAttribute {
                handlers: invoked,
                result,
            })),
            None => {
                debug!(host = H::type_name(), attr = name, "no set mutator; baseline set");
                host.baseline_set(name, value);
                Ok(SetOutcome::Delegated)
            }
        }
    }

    /// Route a method-style accessor call.
    ///
    /// `get<Name>Attribute` and `set<Name>Attribute` both read `<name>`
    /// through get mutators only. Calls that match no pattern or no
    /// handler go to the host's dynamic-call fallback.
    pub fn call(&self, host: &mut H, method: &str, args: Vec<Value>) -> MutatorResult<Value> {
        if let Some(key) = accessor::attribute_key(method) {
            for handler in self.registry.handlers() {
                if handler.has_get_mutator(host, &key) {
                    debug!(
                        host = H::type_name(),
                        handler = handler.name(),
                        method,
                        attr = %key,
                        "accessor routed to get mutator"
                    );
                    return handler.call_get_mutator(host, &key);
                }
            }
        }

        debug!(host = H::type_name(), method, "no accessor mutator; baseline call");
        host.baseline_call(method, args)
    }

    /// Dispatch a single request.
    pub fn dispatch(&self, host: &mut H, request: AttributeRequest) -> MutatorResult<DispatchOutcome> {
        match request {
            AttributeRequest::Get { name } => self.get_attribute(host, &name).map(DispatchOutcome::Got),
            AttributeRequest::Set { name, value } => self
                .set_attribute(host, &name, value)
                .map(DispatchOutcome::Set),
        }
    }
}
