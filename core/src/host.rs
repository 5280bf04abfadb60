//! The host collaborator whose attribute access is intercepted.

use crate::{AttrConfig, MutatorError, MutatorResult, Value};

/// A get mutator exposed as a host method.
pub type GetterFn<H> = fn(&H, &str, &AttrConfig) -> Value;

/// A set mutator exposed as a host method.
pub type SetterFn<H> = fn(&mut H, &str, Value, &AttrConfig) -> Value;

/// A host method looked up by name, tagged by the signature it accepts.
pub enum HostMethod<H> {
    Getter(GetterFn<H>),
    Setter(SetterFn<H>),
}

impl<H> Clone for HostMethod<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for HostMethod<H> {}

impl<H> std::fmt::Debug for HostMethod<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostMethod::Getter(_) => f.write_str("HostMethod::Getter"),
            HostMethod::Setter(_) => f.write_str("HostMethod::Setter"),
        }
    }
}

/// What a host exposes to the dispatch engine.
///
/// Baseline access is the fallback when no handler claims an attribute.
/// Fields hold the bags handlers are configured with. Methods are looked
/// up by name once, when a handler is registered.
pub trait Host: Sized {
    /// Name used in diagnostics.
    fn type_name() -> &'static str;

    /// Read an attribute without any mutator involvement.
    fn baseline_get(&self, name: &str) -> Value;

    /// Write an attribute without any mutator involvement.
    fn baseline_set(&mut self, name: &str, value: Value);

    /// A readable named field, typically a bag.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Look up a mutator method by name.
    fn method(name: &str) -> Option<HostMethod<Self>>;

    /// Dynamic-call fallback for accessor calls no handler claims.
    fn baseline_call(&mut self, method: &str, _args: Vec<Value>) -> MutatorResult<Value> {
        Err(MutatorError::undefined_method(Self::type_name(), method))
    }
}
