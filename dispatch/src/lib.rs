//! Morph Dispatch
//!
//! Route attribute get/set through the handlers in a registry.
//!
//! Responsibilities:
//! - First-match get dispatch
//! - Stacked set dispatch
//! - Method-style accessor routing
//! - Fallback to the host's baseline access
//!
//! # Module Structure
//!
//! - `router` - the Router that performs dispatch
//! - `accessor` - accessor method name parsing
//! - `result` - requests and outcomes

mod accessor;
mod result;
mod router;

pub use accessor::attribute_key;
pub use result::{AttributeRequest, DispatchOutcome, MutatedAttribute, SetOutcome};
pub use router::Router;
