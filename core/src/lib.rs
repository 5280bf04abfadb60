//! Morph Core Types
//!
//! This crate provides the foundational types used throughout Morph:
//! - Value types (the Value enum and attribute maps)
//! - The Host trait every intercepted entity implements
//! - Property bags and their resolution
//! - Operators and the shared error taxonomy

pub mod bag;
mod error;
mod host;
mod operator;
mod value;

pub use bag::{AttrConfig, Bag};
pub use error::*;
pub use host::*;
pub use operator::*;
pub use value::*;
