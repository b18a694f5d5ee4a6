//! # Operator Definition
//!
//! An operator is plain data: a name, a signature, a commutativity flag, an
//! optional guard, a forward computation and the faults it mutes.

use serde::Serialize;
use std::fmt;

use super::errors::{OperatorError, OperatorResult};
use super::fault::{Fault, FaultSet};
use super::signature::Signature;
use super::value::Value;

/// Guard evaluated before `forward`
pub type Condition = fn(&[Value]) -> Result<bool, Fault>;

/// The operator's computation
pub type Forward = fn(&[Value]) -> Result<Value, Fault>;

/// Why an operator produced no value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inapplicable {
    /// The guard returned false
    GuardFailed,
    /// A muted fault was raised
    Fault(Fault),
}

impl fmt::Display for Inapplicable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inapplicable::GuardFailed => f.write_str("guard_failed"),
            Inapplicable::Fault(fault) => write!(f, "{}", fault),
        }
    }
}

/// Result of applying an operator to well-typed arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    Inapplicable(Inapplicable),
}

impl Outcome {
    pub fn is_inapplicable(&self) -> bool {
        matches!(self, Outcome::Inapplicable(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Inapplicable(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Inapplicable(_) => None,
        }
    }
}

/// Discovery record the host engine introspects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorInfo {
    pub name: String,
    pub signature: String,
    pub commutes: bool,
    pub guarded: bool,
    pub muted_faults: Vec<Fault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// A named primitive operator
#[derive(Clone)]
pub struct Operator {
    name: String,
    signature: Signature,
    declared: String,
    commutes: bool,
    condition: Option<Condition>,
    forward: Forward,
    muted: FaultSet,
    template: Option<String>,
}

impl Operator {
    /// Create a non-commutative, unguarded operator that mutes nothing
    pub fn new(name: impl Into<String>, signature: &str, forward: Forward) -> OperatorResult<Self> {
        Ok(Self {
            name: name.into(),
            signature: Signature::parse(signature)?,
            declared: signature.to_string(),
            commutes: false,
            condition: None,
            forward,
            muted: FaultSet::empty(),
            template: None,
        })
    }

    /// Mark argument order as irrelevant
    pub fn commutative(mut self) -> Self {
        self.commutes = true;
        self
    }

    /// Attach a guard
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Convert these faults into "inapplicable"
    pub fn muting(mut self, faults: &[Fault]) -> Self {
        self.muted = FaultSet::of(faults);
        self
    }

    /// Display template such as `FloatToStr({})`
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Signature text exactly as it was declared
    pub fn declared_signature(&self) -> &str {
        &self.declared
    }

    pub fn commutes(&self) -> bool {
        self.commutes
    }

    pub fn is_guarded(&self) -> bool {
        self.condition.is_some()
    }

    pub fn muted_faults(&self) -> FaultSet {
        self.muted
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Fills the template with rendered arguments, falling back to
    /// `Name(a, b)` when no template is declared.
    pub fn render(&self, args: &[&str]) -> String {
        match &self.template {
            Some(template) => {
                let mut out = template.clone();
                let mut from = 0;
                for arg in args {
                    match out[from..].find("{}") {
                        Some(pos) => {
                            let at = from + pos;
                            out.replace_range(at..at + 2, arg);
                            from = at + arg.len();
                        }
                        None => break,
                    }
                }
                out
            }
            None => format!("{}({})", self.name, args.join(", ")),
        }
    }

    /// Discovery record for this operator
    pub fn describe(&self) -> OperatorInfo {
        OperatorInfo {
            name: self.name.clone(),
            signature: self.declared.clone(),
            commutes: self.commutes,
            guarded: self.is_guarded(),
            muted_faults: self.muted.iter().collect(),
            template: self.template.clone(),
        }
    }

    /// Applies the operator.
    ///
    /// Arguments are checked against the signature first; a mismatch is a
    /// hard error. The guard then runs, then `forward`. Faults raised by
    /// either are muted or propagated according to the operator's policy.
    pub fn apply(&self, args: &[Value]) -> OperatorResult<Outcome> {
        self.signature.check_args(&self.name, args)?;

        if let Some(condition) = self.condition {
            match condition(args) {
                Ok(true) => {}
                Ok(false) => return Ok(Outcome::Inapplicable(Inapplicable::GuardFailed)),
                Err(fault) => return self.handle_fault(fault),
            }
        }

        let value = match (self.forward)(args) {
            Ok(value) => value,
            Err(fault) => return self.handle_fault(fault),
        };

        if !self.signature.output().accepts(&value) {
            return Err(OperatorError::ResultType {
                operator: self.name.clone(),
                expected: self.signature.output().to_string(),
                actual: value.type_name().to_string(),
            });
        }

        Ok(Outcome::Value(value))
    }

    fn handle_fault(&self, fault: Fault) -> OperatorResult<Outcome> {
        if self.muted.contains(fault) {
            Ok(Outcome::Inapplicable(Inapplicable::Fault(fault)))
        } else {
            Err(OperatorError::Fault {
                operator: self.name.clone(),
                fault,
            })
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("signature", &self.declared)
            .field("commutes", &self.commutes)
            .field("guarded", &self.is_guarded())
            .field("muted", &self.muted)
            .finish()
    }
}
