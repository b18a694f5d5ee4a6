//! # Operator Registry

use std::collections::BTreeMap;

use crate::observability::{log_event_with_fields, Event};

use super::builtin;
use super::errors::{OperatorError, OperatorResult};
use super::operator::{Operator, Outcome};
use super::value::Value;

/// Registry of operators keyed by name
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: BTreeMap<String, Operator>,
}

impl OperatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every builtin operator
    pub fn with_builtin_operators() -> OperatorResult<Self> {
        let mut registry = Self::new();
        for op in builtin::operators()? {
            registry.register(op);
        }
        Ok(registry)
    }

    /// Register an operator, replacing any operator of the same name.
    ///
    /// Returns the operator it replaced, if any.
    pub fn register(&mut self, operator: Operator) -> Option<Operator> {
        let name = operator.name().to_string();
        let signature = operator.declared_signature().to_string();
        let previous = self.operators.insert(name.clone(), operator);

        let event = if previous.is_some() {
            Event::OperatorOverwritten
        } else {
            Event::OperatorRegistered
        };
        log_event_with_fields(
            event,
            &[("operator", name.as_str()), ("signature", signature.as_str())],
        );

        previous
    }

    /// Get operator by name
    pub fn get(&self, name: &str) -> OperatorResult<&Operator> {
        self.operators
            .get(name)
            .ok_or_else(|| OperatorError::NotFound(name.to_string()))
    }

    /// Look up and apply an operator
    pub fn invoke(&self, name: &str, args: &[Value]) -> OperatorResult<Outcome> {
        self.get(name)?.apply(args)
    }

    /// Operator names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// All operators in name order
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }

    /// Get operator count
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
