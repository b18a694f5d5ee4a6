//! # Operator Invoker
//!
//! Entry point for the host engine. Widget arguments are validated against
//! the schema catalogue before the operator runs, and every invocation is
//! logged with an id and timestamp.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{SchemaCatalogue, SchemaValidator};

use super::errors::OperatorResult;
use super::operator::Outcome;
use super::registry::OperatorRegistry;
use super::value::Value;

/// One completed invocation
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    /// Invocation ID
    pub id: Uuid,

    /// Operator name
    pub operator: String,

    /// Operator template filled with the arguments, e.g. `FloatToStr(4)`
    pub rendered: String,

    /// Invocation timestamp
    pub timestamp: DateTime<Utc>,

    /// Value or inapplicability
    pub outcome: Outcome,
}

/// Invokes operators against a pair of catalogues
#[derive(Debug, Clone, Copy)]
pub struct Invoker<'a> {
    schemas: &'a SchemaCatalogue,
    operators: &'a OperatorRegistry,
}

impl<'a> Invoker<'a> {
    /// Create a new invoker
    pub fn new(schemas: &'a SchemaCatalogue, operators: &'a OperatorRegistry) -> Self {
        Self { schemas, operators }
    }

    /// Invoke an operator.
    ///
    /// Returns `Err` for hard failures: unknown operator, signature mismatch,
    /// a widget that does not conform to its schema, or an unmuted fault.
    pub fn invoke(&self, name: &str, args: &[Value]) -> OperatorResult<InvocationRecord> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self.validate_widgets(args).and_then(|()| {
            let operator = self.operators.get(name)?;
            let outcome = operator.apply(args)?;
            Ok((operator, outcome))
        });

        let (operator, outcome) = match result {
            Ok(applied) => applied,
            Err(e) => {
                log_event_with_fields(
                    Event::OperatorFault,
                    &[
                        ("invocation", id_str.as_str()),
                        ("operator", name),
                        ("code", e.code()),
                        ("error", e.to_string().as_str()),
                    ],
                );
                return Err(e);
            }
        };

        match &outcome {
            Outcome::Value(_) => {
                log_event_with_fields(
                    Event::OperatorInvoked,
                    &[("invocation", id_str.as_str()), ("operator", name)],
                );
            }
            Outcome::Inapplicable(reason) => {
                log_event_with_fields(
                    Event::OperatorInapplicable,
                    &[
                        ("invocation", id_str.as_str()),
                        ("operator", name),
                        ("reason", reason.to_string().as_str()),
                    ],
                );
            }
        }

        let rendered_args: Vec<String> = args.iter().map(Value::to_string).collect();
        let rendered_refs: Vec<&str> = rendered_args.iter().map(String::as_str).collect();

        Ok(InvocationRecord {
            id,
            operator: name.to_string(),
            rendered: operator.render(&rendered_refs),
            timestamp: Utc::now(),
            outcome,
        })
    }

    fn validate_widgets(&self, args: &[Value]) -> OperatorResult<()> {
        let validator = SchemaValidator::new(self.schemas);
        for widget in args.iter().filter_map(Value::as_widget) {
            validator.validate_instance(widget)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Inapplicable;
    use crate::schema::WidgetInstance;

    fn fixtures() -> (SchemaCatalogue, OperatorRegistry) {
        (
            SchemaCatalogue::with_builtin_widgets(),
            OperatorRegistry::with_builtin_operators().unwrap(),
        )
    }

    #[test]
    fn test_invoke_value() {
        let (schemas, operators) = fixtures();
        let invoker = Invoker::new(&schemas, &operators);

        let record = invoker
            .invoke("FloatToStr", &[Value::Number(4.0)])
            .unwrap();
        assert_eq!(record.operator, "FloatToStr");
        assert_eq!(record.rendered, "FloatToStr(4)");
        assert_eq!(record.outcome, Outcome::Value(Value::from("4")));
    }

    #[test]
    fn test_rendered_without_template() {
        let (schemas, operators) = fixtures();
        let invoker = Invoker::new(&schemas, &operators);

        let record = invoker
            .invoke("Add", &[Value::Number(2.0), Value::Number(0.5)])
            .unwrap();
        assert_eq!(record.rendered, "Add(2, 0.5)");
    }

    #[test]
    fn test_invocation_ids_unique() {
        let (schemas, operators) = fixtures();
        let invoker = Invoker::new(&schemas, &operators);

        let a = invoker.invoke("AddOne", &[Value::Number(1.0)]).unwrap();
        let b = invoker.invoke("AddOne", &[Value::Number(1.0)]).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_invoke_inapplicable() {
        let (schemas, operators) = fixtures();
        let invoker = Invoker::new(&schemas, &operators);

        let record = invoker.invoke("StrToFloat", &[Value::from("abc")]).unwrap();
        assert!(matches!(
            record.outcome,
            Outcome::Inapplicable(Inapplicable::Fault(_))
        ));
    }

    #[test]
    fn test_rip_str_value_validates_widget() {
        let (schemas, operators) = fixtures();
        let invoker = Invoker::new(&schemas, &operators);

        let good = WidgetInstance::new("TextField").with_text("value", "12");
        let record = invoker.invoke("RipStrValue", &[good.into()]).unwrap();
        assert_eq!(record.outcome, Outcome::Value(Value::from("12")));

        let bad = WidgetInstance::new("TextField").with_text("colour", "red");
        let err = invoker.invoke("RipStrValue", &[bad.into()]).unwrap_err();
        assert_eq!(err.code(), "APPR_UNDECLARED_FIELD");
    }
}
