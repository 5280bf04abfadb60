//! Property bags and their resolution.
//!
//! A bag is the per-handler configuration a host exposes through a named
//! field. Its shape decides how membership and configuration are read:
//! a list only names attributes, a map also configures each one. The
//! shape is taken from the field's value at read time.

use crate::{Host, Value};
use indexmap::IndexMap;

/// A borrowed view of a host field, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bag<'a> {
    /// Attribute names without configuration.
    List(&'a [Value]),
    /// Attribute names mapped to their configuration.
    Map(&'a IndexMap<String, Value>),
}

/// Configuration resolved for one attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrConfig {
    /// The bag is list-shaped; the attribute carries no configuration.
    #[default]
    Unconfigured,
    /// The bag is map-shaped; the mapped value, which may be `Null`.
    Configured(Value),
}

impl AttrConfig {
    /// The configured value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            AttrConfig::Unconfigured => None,
            AttrConfig::Configured(value) => Some(value),
        }
    }

    /// The configured value when it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.value().and_then(Value::as_str)
    }
}

impl<'a> Bag<'a> {
    /// Classify a field value. Anything but a list or a map is no bag.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::List(items) => Some(Bag::List(items)),
            Value::Map(map) => Some(Bag::Map(map)),
            _ => None,
        }
    }

    /// Read the bag stored in `field` on `host`.
    pub fn read<H: Host>(host: &'a H, field: &str) -> Option<Self> {
        host.field(field).and_then(Bag::from_value)
    }

    /// Whether `attr` is named by this bag.
    pub fn contains(&self, attr: &str) -> bool {
        match self {
            Bag::List(items) => items.iter().any(|item| item.as_str() == Some(attr)),
            Bag::Map(map) => map.contains_key(attr),
        }
    }

    /// Configuration for `attr`, or `None` when it is not a member.
    pub fn config(&self, attr: &str) -> Option<AttrConfig> {
        match self {
            Bag::List(_) => self.contains(attr).then_some(AttrConfig::Unconfigured),
            Bag::Map(map) => map.get(attr).cloned().map(AttrConfig::Configured),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Bag::List(items) => items.is_empty(),
            Bag::Map(map) => map.is_empty(),
        }
    }
}

/// Resolve membership and configuration of `attr` in the bag stored under
/// `field` on `host`. An absent or non-collection field yields `None`.
pub fn resolve<H: Host>(host: &H, field: &str, attr: &str) -> Option<AttrConfig> {
    let config = Bag::read(host, field).and_then(|bag| bag.config(attr));
    tracing::trace!(
        host = H::type_name(),
        bag = field,
        attr,
        member = config.is_some(),
        "resolved bag membership"
    );
    config
}
