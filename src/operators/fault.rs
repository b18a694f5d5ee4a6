//! Recognised runtime faults and per-operator fault policy.
//!
//! An operator names the faults it mutes. A muted fault turns into an
//! "inapplicable" outcome; any other fault propagates as a hard error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of faults an operator computation can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// Text is not a number, or NaN where an integer is needed
    InvalidNumber,
    /// Division by zero
    DivisionByZero,
    /// Infinite value where an integer is needed
    Overflow,
    /// A scan found nothing to return
    NoMatch,
    /// An argument did not have the kind its signature promises
    ArgumentType,
}

impl Fault {
    /// All fault kinds, in bit order
    pub const ALL: [Fault; 5] = [
        Fault::InvalidNumber,
        Fault::DivisionByZero,
        Fault::Overflow,
        Fault::NoMatch,
        Fault::ArgumentType,
    ];

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Fault::InvalidNumber => "invalid_number",
            Fault::DivisionByZero => "division_by_zero",
            Fault::Overflow => "overflow",
            Fault::NoMatch => "no_match",
            Fault::ArgumentType => "argument_type",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of faults an operator converts to "inapplicable"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultSet {
    bits: u8,
}

impl FaultSet {
    /// Mutes nothing
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Set containing exactly the given faults
    pub fn of(faults: &[Fault]) -> Self {
        faults.iter().fold(Self::empty(), |set, fault| set.with(*fault))
    }

    /// Adds one fault
    pub const fn with(self, fault: Fault) -> Self {
        Self {
            bits: self.bits | fault.bit(),
        }
    }

    /// Checks membership
    pub fn contains(&self, fault: Fault) -> bool {
        self.bits & fault.bit() != 0
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Fault> + '_ {
        Fault::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_set_membership() {
        let set = FaultSet::of(&[Fault::InvalidNumber, Fault::NoMatch]);
        assert!(set.contains(Fault::InvalidNumber));
        assert!(set.contains(Fault::NoMatch));
        assert!(!set.contains(Fault::Overflow));
        assert!(!set.contains(Fault::ArgumentType));
    }

    #[test]
    fn test_fault_set_iter_order() {
        let set = FaultSet::empty().with(Fault::NoMatch).with(Fault::DivisionByZero);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![Fault::DivisionByZero, Fault::NoMatch]);
    }

    #[test]
    fn test_empty_set() {
        assert!(FaultSet::empty().is_empty());
        assert_eq!(FaultSet::default(), FaultSet::empty());
    }

    #[test]
    fn test_fault_serde_names() {
        assert_eq!(
            serde_json::to_string(&Fault::DivisionByZero).unwrap(),
            "\"division_by_zero\""
        );
        assert_eq!(Fault::InvalidNumber.to_string(), "invalid_number");
    }
}
