//! Dispatch result types.

use morph_core::Value;

/// An ephemeral attribute access, consumed by the router.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRequest {
    Get { name: String },
    Set { name: String, value: Value },
}

impl AttributeRequest {
    pub fn get(name: impl Into<String>) -> Self {
        Self::Get { name: name.into() }
    }

    pub fn set(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Get { name } | Self::Set { name, .. } => name,
        }
    }
}

/// Outcome of a set dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    /// One or more set mutators ran.
    Mutated(MutatedAttribute),
    /// No handler claimed the attribute; the host stored it itself.
    Delegated,
}

impl SetOutcome {
    /// Result of the last set mutator that ran.
    pub fn result(&self) -> Option<&Value> {
        match self {
            SetOutcome::Mutated(m) => Some(&m.result),
            SetOutcome::Delegated => None,
        }
    }

    /// Names of the handlers that ran, in order.
    pub fn handlers(&self) -> &[String] {
        match self {
            SetOutcome::Mutated(m) => &m.handlers,
            SetOutcome::Delegated => &[],
        }
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self, SetOutcome::Delegated)
    }
}

/// The chain of set mutators that handled one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct MutatedAttribute {
    /// Handlers invoked, in dispatch order.
    pub handlers: Vec<String>,
    /// Value returned by the last handler invoked.
    pub result: Value,
}

/// Outcome of dispatching an [`AttributeRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Got(Value),
    Set(SetOutcome),
}

impl DispatchOutcome {
    /// The value read, or the result of the last set mutator.
    pub fn value(&self) -> Option<&Value> {
        match self {
            DispatchOutcome::Got(value) => Some(value),
            DispatchOutcome::Set(outcome) => outcome.result(),
        }
    }
}
