//! Error taxonomy shared by registration, dispatch and construction.
//!
//! Every variant carries a [`Diagnostic`]: ordered key/value pairs printed
//! after the message so a failing bootstrap shows which handler, operator
//! and arguments were involved.

use crate::Value;
use std::fmt;
use thiserror::Error;

/// Result type for mutator operations.
pub type MutatorResult<T> = Result<T, MutatorError>;

/// Width the diagnostic keys are padded to (key plus colon).
const KEY_WIDTH: usize = 15;

/// Ordered key/value context attached to a [`MutatorError`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostic {
    entries: Vec<(String, Value)>,
}

impl Diagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping insertion order.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Look up the first entry under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        for (key, value) in &self.entries {
            let rendered = if value.is_scalar() {
                value.to_plain_string()
            } else {
                value.to_string()
            };
            write!(f, "\n{:<width$}{}", format!("{}:", key), rendered, width = KEY_WIDTH)?;
        }
        Ok(())
    }
}

/// Errors surfaced by mutator registration, dispatch and construction.
#[derive(Debug, Error)]
pub enum MutatorError {
    /// A mutator was invoked for an attribute outside its bag.
    #[error("Mutator not defined!{context}")]
    NotDefined { context: Diagnostic },

    /// A callable could not be resolved against the host at registration.
    #[error("The given callable is invalid!{context}")]
    NotCallable { context: Diagnostic },

    /// Registration named an operator other than `get` or `set`.
    #[error("Mutator operator not defined!{context}")]
    OperatorNotDefined { context: Diagnostic },

    /// A required constructor parameter had no argument and no default.
    #[error("Invalid parameters for make()!{context}")]
    InvalidParameter { context: Diagnostic },

    /// The host's dynamic-call fallback has no such method.
    #[error("Call to undefined method!{context}")]
    UndefinedMethod { context: Diagnostic },
}

impl MutatorError {
    pub fn not_defined(
        name: impl Into<String>,
        operator: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self::NotDefined {
            context: Diagnostic::new()
                .with("name", Value::String(name.into()))
                .with("operator", Value::String(operator.into()))
                .with("handler", Value::String(handler.into())),
        }
    }

    pub fn not_callable(callable: impl Into<Value>, handler: impl Into<String>) -> Self {
        Self::NotCallable {
            context: Diagnostic::new()
                .with("callable", callable)
                .with("handler", Value::String(handler.into())),
        }
    }

    pub fn operator_not_defined(operator: impl Into<String>, handler: impl Into<String>) -> Self {
        Self::OperatorNotDefined {
            context: Diagnostic::new()
                .with("operator", Value::String(operator.into()))
                .with("handler", Value::String(handler.into())),
        }
    }

    pub fn invalid_parameter(
        name: impl Into<String>,
        accessor: impl Into<String>,
        parameters: Vec<String>,
        arguments: Value,
    ) -> Self {
        Self::InvalidParameter {
            context: Diagnostic::new()
                .with("name", Value::String(name.into()))
                .with("accessor", Value::String(accessor.into()))
                .with("parameters", parameters)
                .with("arguments", arguments),
        }
    }

    pub fn undefined_method(host: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UndefinedMethod {
            context: Diagnostic::new()
                .with("host", Value::String(host.into()))
                .with("method", Value::String(method.into())),
        }
    }

    /// The structured context carried by this error.
    pub fn context(&self) -> &Diagnostic {
        match self {
            Self::NotDefined { context }
            | Self::NotCallable { context }
            | Self::OperatorNotDefined { context }
            | Self::InvalidParameter { context }
            | Self::UndefinedMethod { context } => context,
        }
    }
}
