//! Mutator operators.

use std::fmt;
use std::str::FromStr;

/// The two attribute operations a handler can intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Get,
    Set,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Get => "get",
            Operator::Set => "set",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an operator name other than `get` or `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Operator::Get),
            "set" => Ok(Operator::Set),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}
