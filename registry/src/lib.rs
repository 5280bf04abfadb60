//! Morph Registry
//!
//! Mutation handlers and the per-host registry they are dispatched from.
//!
//! # Module Structure
//!
//! - `handler` - MutationHandler and its get/set descriptors
//! - `builder` - RegistryBuilder, the bootstrap-time writer
//! - `registry` - the immutable, ordered Registry
//! - `binder` - construction from named arguments

pub mod binder;
mod builder;
mod handler;
mod registry;

pub use binder::{make, Arguments, Constructible, Parameter};
pub use builder::RegistryBuilder;
pub use handler::{Callable, Descriptor, GetMutatorFn, MutationHandler, SetMutatorFn};
pub use registry::Registry;
