//! Construction from named arguments.
//!
//! A [`Constructible`] type declares its parameters in order. [`make`]
//! binds a map of named arguments onto that order, accepting each
//! parameter under its declared name or a case-transformed alias, and
//! falling back to declared defaults.

use heck::{ToLowerCamelCase, ToSnakeCase};
use indexmap::IndexMap;
use morph_core::{MutatorError, MutatorResult, Value};

/// Named arguments, in the order they were supplied.
pub type Arguments = IndexMap<String, Value>;

/// A declared constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: &'static str,
    pub default: Option<Value>,
}

impl Parameter {
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub fn optional(name: &'static str, default: Value) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// Alternate spellings accepted for this parameter.
    fn aliases(&self) -> [String; 2] {
        [self.name.to_snake_case(), self.name.to_lower_camel_case()]
    }
}

/// A type that can be built from positional arguments in declared order.
pub trait Constructible: Sized {
    /// Name used in diagnostics.
    const TYPE_NAME: &'static str;

    fn parameters() -> Vec<Parameter>;

    fn construct(arguments: Vec<Value>) -> MutatorResult<Self>;
}

/// Build `T` from named arguments.
pub fn make<T: Constructible>(arguments: &Arguments) -> MutatorResult<T> {
    let positional = compose_parameters(T::TYPE_NAME, &T::parameters(), arguments)?;
    T::construct(positional)
}

/// Order `arguments` by `parameters`.
///
/// Each parameter takes, in turn: the argument under its own name, the
/// argument under an alias, or its default. A parameter with none of
/// these fails with [`MutatorError::InvalidParameter`].
pub fn compose_parameters(
    accessor: &str,
    parameters: &[Parameter],
    arguments: &Arguments,
) -> MutatorResult<Vec<Value>> {
    parameters
        .iter()
        .map(|parameter| {
            if let Some(value) = arguments.get(parameter.name) {
                return Ok(value.clone());
            }
            if let Some(value) = parameter
                .aliases()
                .iter()
                .find_map(|alias| arguments.get(alias))
            {
                return Ok(value.clone());
            }
            if let Some(default) = &parameter.default {
                return Ok(default.clone());
            }
            Err(MutatorError::invalid_parameter(
                parameter.name,
                accessor,
                parameters.iter().map(|p| p.name.to_string()).collect(),
                Value::Map(arguments.clone()),
            ))
        })
        .collect()
}
