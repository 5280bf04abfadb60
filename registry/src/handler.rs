//! Mutation handlers.
//!
//! A handler owns at most one get mutator and one set mutator. Each
//! mutator is bound to a bag field on the host; the handler claims an
//! attribute for an operator when that operator is registered and the bag
//! names the attribute.
//!
//! Callables are resolved when they are registered. A method name that the
//! host does not expose, or that has the wrong signature for the operator,
//! fails registration and never reaches dispatch.

use std::fmt;
use std::sync::Arc;

use morph_core::{
    bag, AttrConfig, Host, HostMethod, MutatorError, MutatorResult, Operator, Value,
};

use crate::binder::{Constructible, Parameter};

/// A resolved get mutator: `(host, attribute, config) -> value`.
pub type GetMutatorFn<H> = Arc<dyn Fn(&H, &str, &AttrConfig) -> Value + Send + Sync>;

/// A resolved set mutator: `(host, attribute, value, config) -> result`.
pub type SetMutatorFn<H> = Arc<dyn Fn(&mut H, &str, Value, &AttrConfig) -> Value + Send + Sync>;

/// An unresolved mutator callable.
pub enum Callable<F> {
    /// A function reference, used as is.
    Direct(F),
    /// A host method, looked up by name at registration.
    Method(String),
}

impl<F> Callable<F> {
    pub fn method(name: impl Into<String>) -> Self {
        Callable::Method(name.into())
    }
}

impl<H> Callable<GetMutatorFn<H>> {
    pub fn getter(f: impl Fn(&H, &str, &AttrConfig) -> Value + Send + Sync + 'static) -> Self {
        Callable::Direct(Arc::new(f))
    }
}

impl<H> Callable<SetMutatorFn<H>> {
    pub fn setter(
        f: impl Fn(&mut H, &str, Value, &AttrConfig) -> Value + Send + Sync + 'static,
    ) -> Self {
        Callable::Direct(Arc::new(f))
    }
}

impl<F> From<&str> for Callable<F> {
    fn from(name: &str) -> Self {
        Callable::Method(name.to_string())
    }
}

impl<F> From<String> for Callable<F> {
    fn from(name: String) -> Self {
        Callable::Method(name)
    }
}

/// A registered mutator and its dispatch settings.
pub struct Descriptor<F> {
    callable: F,
    /// Method name, or `None` for a function reference.
    method: Option<String>,
    stack: bool,
    property: String,
}

impl<F: Clone> Clone for Descriptor<F> {
    fn clone(&self) -> Self {
        Self {
            callable: self.callable.clone(),
            method: self.method.clone(),
            stack: self.stack,
            property: self.property.clone(),
        }
    }
}

impl<F> Descriptor<F> {
    /// Name of the host field holding this mutator's bag.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn stack(&self) -> bool {
        self.stack
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

impl<F> fmt::Debug for Descriptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("method", &self.method)
            .field("stack", &self.stack)
            .field("property", &self.property)
            .finish()
    }
}

/// A named pair of get/set mutators bound to a host type.
pub struct MutationHandler<H> {
    name: String,
    get: Option<Descriptor<GetMutatorFn<H>>>,
    set: Option<Descriptor<SetMutatorFn<H>>>,
}

impl<H> Clone for MutationHandler<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<H> fmt::Debug for MutationHandler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationHandler")
            .field("name", &self.name)
            .field("get", &self.get)
            .field("set", &self.set)
            .finish()
    }
}

impl<H: Host + 'static> MutationHandler<H> {
    /// Create a handler with no mutators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            get: None,
            set: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_descriptor(&self) -> Option<&Descriptor<GetMutatorFn<H>>> {
        self.get.as_ref()
    }

    pub fn set_descriptor(&self) -> Option<&Descriptor<SetMutatorFn<H>>> {
        self.set.as_ref()
    }

    /// Register the get mutator. `property` defaults to the handler name.
    pub fn register_get_mutator(
        &mut self,
        callable: impl Into<Callable<GetMutatorFn<H>>>,
        stack: bool,
        property: Option<&str>,
    ) -> MutatorResult<&mut Self> {
        let (callable, method) = match callable.into() {
            Callable::Direct(f) => (f, None),
            Callable::Method(name) => match H::method(&name) {
                Some(HostMethod::Getter(f)) => {
                    let f: GetMutatorFn<H> = Arc::new(f);
                    (f, Some(name))
                }
                _ => return Err(MutatorError::not_callable(name, self.name.as_str())),
            },
        };
        self.get = Some(self.descriptor(Operator::Get, callable, method, stack, property));
        Ok(self)
    }

    /// Register the set mutator. `property` defaults to the handler name.
    pub fn register_set_mutator(
        &mut self,
        callable: impl Into<Callable<SetMutatorFn<H>>>,
        stack: bool,
        property: Option<&str>,
    ) -> MutatorResult<&mut Self> {
        let (callable, method) = match callable.into() {
            Callable::Direct(f) => (f, None),
            Callable::Method(name) => match H::method(&name) {
                Some(HostMethod::Setter(f)) => {
                    let f: SetMutatorFn<H> = Arc::new(f);
                    (f, Some(name))
                }
                _ => return Err(MutatorError::not_callable(name, self.name.as_str())),
            },
        };
        self.set = Some(self.descriptor(Operator::Set, callable, method, stack, property));
        Ok(self)
    }

    /// Register a host method under an operator given by name.
    pub fn register_mutator(
        &mut self,
        operator: &str,
        method: &str,
        stack: bool,
        property: Option<&str>,
    ) -> MutatorResult<&mut Self> {
        match operator.parse::<Operator>() {
            Ok(Operator::Get) => self.register_get_mutator(method, stack, property),
            Ok(Operator::Set) => self.register_set_mutator(method, stack, property),
            Err(unknown) => Err(MutatorError::operator_not_defined(
                unknown.0,
                self.name.as_str(),
            )),
        }
    }

    fn descriptor<F>(
        &self,
        operator: Operator,
        callable: F,
        method: Option<String>,
        stack: bool,
        property: Option<&str>,
    ) -> Descriptor<F> {
        let property = property.unwrap_or(&self.name).to_string();
        tracing::debug!(
            host = H::type_name(),
            handler = %self.name,
            %operator,
            method = method.as_deref().unwrap_or("<fn>"),
            stack,
            bag = %property,
            "registered mutator"
        );
        Descriptor {
            callable,
            method,
            stack,
            property,
        }
    }

    fn property(&self, operator: Operator) -> Option<&str> {
        match operator {
            Operator::Get => self.get.as_ref().map(Descriptor::property),
            Operator::Set => self.set.as_ref().map(Descriptor::property),
        }
    }

    fn config(&self, host: &H, attr: &str, operator: Operator) -> Option<AttrConfig> {
        self.property(operator)
            .and_then(|property| bag::resolve(host, property, attr))
    }

    fn config_or_fail(&self, host: &H, attr: &str, operator: Operator) -> MutatorResult<AttrConfig> {
        self.config(host, attr, operator)
            .ok_or_else(|| MutatorError::not_defined(attr, operator.as_str(), self.name.as_str()))
    }

    pub fn has_get_mutator(&self, host: &H, attr: &str) -> bool {
        self.config(host, attr, Operator::Get).is_some()
    }

    pub fn has_set_mutator(&self, host: &H, attr: &str) -> bool {
        self.config(host, attr, Operator::Set).is_some()
    }

    /// Invoke the get mutator for `attr`.
    ///
    /// Fails with [`MutatorError::NotDefined`] unless [`has_get_mutator`]
    /// holds for `attr`.
    ///
    /// [`has_get_mutator`]: Self::has_get_mutator
    pub fn call_get_mutator(&self, host: &H, attr: &str) -> MutatorResult<Value> {
        let config = self.config_or_fail(host, attr, Operator::Get)?;
        let descriptor = self
            .get
            .as_ref()
            .ok_or_else(|| MutatorError::not_defined(attr, "get", self.name.as_str()))?;
        Ok((descriptor.callable)(host, attr, &config))
    }

    /// Invoke the set mutator for `attr` with `value`.
    ///
    /// Fails with [`MutatorError::NotDefined`] unless [`has_set_mutator`]
    /// holds for `attr`.
    ///
    /// [`has_set_mutator`]: Self::has_set_mutator
    pub fn call_set_mutator(&self, host: &mut H, attr: &str, value: Value) -> MutatorResult<Value> {
        let config = self.config_or_fail(host, attr, Operator::Set)?;
        let descriptor = self
            .set
            .as_ref()
            .ok_or_else(|| MutatorError::not_defined(attr, "set", self.name.as_str()))?;
        Ok((descriptor.callable)(host, attr, value, &config))
    }

    /// The stack flag registered for `operator`; false when unregistered.
    pub fn should_stack(&self, operator: Operator) -> bool {
        match operator {
            Operator::Get => self.get.as_ref().is_some_and(Descriptor::stack),
            Operator::Set => self.set.as_ref().is_some_and(Descriptor::stack),
        }
    }

    fn register_from_argument(&mut self, operator: Operator, argument: &Value) -> MutatorResult<()> {
        let items = match argument {
            Value::Null => return Ok(()),
            Value::List(items) if items.is_empty() => return Ok(()),
            Value::List(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        let method = match items[0].as_str() {
            Some(method) => method.to_string(),
            None => return Err(MutatorError::not_callable(items[0].clone(), self.name.as_str())),
        };
        let stack = items.get(1).and_then(Value::as_bool).unwrap_or(false);
        let property = items.get(2).and_then(Value::as_str);
        match operator {
            Operator::Get => self.register_get_mutator(method, stack, property)?,
            Operator::Set => self.register_set_mutator(method, stack, property)?,
        };
        Ok(())
    }
}

impl<H: Host + 'static> Constructible for MutationHandler<H> {
    const TYPE_NAME: &'static str = "MutationHandler";

    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::required("name"),
            Parameter::optional("getMutator", Value::List(Vec::new())),
            Parameter::optional("setMutator", Value::List(Vec::new())),
        ]
    }

    /// Arguments are `[name, getMutator, setMutator]`, each mutator given
    /// as `[method, stack?, property?]`.
    fn construct(arguments: Vec<Value>) -> MutatorResult<Self> {
        let mut arguments = arguments.into_iter();
        let name = match arguments.next() {
            Some(Value::String(name)) => name,
            other => {
                return Err(MutatorError::invalid_parameter(
                    "name",
                    Self::TYPE_NAME,
                    Self::parameters().into_iter().map(|p| p.name.to_string()).collect(),
                    Value::from(other),
                ))
            }
        };
        let mut handler = Self::new(name);
        let get = arguments.next().unwrap_or_default();
        let set = arguments.next().unwrap_or_default();
        handler.register_from_argument(Operator::Get, &get)?;
        handler.register_from_argument(Operator::Set, &set)?;
        Ok(handler)
    }
}
