//! # Operator Catalogue
//!
//! Primitive operators the rule-learning engine composes into productions.
//! Each operator declares a signature the engine type-checks bindings
//! against, whether argument order matters, an optional guard, and the
//! faults that mean "not applicable here" rather than "something broke".

pub mod builtin;
pub mod errors;
pub mod fault;
pub mod invoker;
pub mod operator;
pub mod registry;
pub mod signature;
pub mod text;
pub mod value;

pub use errors::{OperatorError, OperatorResult};
pub use fault::{Fault, FaultSet};
pub use invoker::{InvocationRecord, Invoker};
pub use operator::{Condition, Forward, Inapplicable, Operator, OperatorInfo, Outcome};
pub use registry::OperatorRegistry;
pub use signature::Signature;
pub use value::{TypeTag, Value};
