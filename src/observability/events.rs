//! Observable events
//!
//! Events are explicit and typed. Each carries a fixed severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Schema catalogue
    /// New schema registered
    SchemaRegistered,
    /// Existing schema replaced
    SchemaOverwritten,
    /// Schema file loaded
    SchemasLoaded,

    // Operator catalogue
    /// New operator registered
    OperatorRegistered,
    /// Existing operator replaced
    OperatorOverwritten,

    // Invocation
    /// Operator produced a value
    OperatorInvoked,
    /// Operator was inapplicable to its arguments
    OperatorInapplicable,
    /// Operator raised an unrecognised fault or was misused
    OperatorFault,
    /// GetBias isolated a constant term
    BiasExtracted,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::SchemaOverwritten => "SCHEMA_OVERWRITTEN",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::OperatorRegistered => "OPERATOR_REGISTERED",
            Event::OperatorOverwritten => "OPERATOR_OVERWRITTEN",
            Event::OperatorInvoked => "OPERATOR_INVOKED",
            Event::OperatorInapplicable => "OPERATOR_INAPPLICABLE",
            Event::OperatorFault => "OPERATOR_FAULT",
            Event::BiasExtracted => "BIAS_EXTRACTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaOverwritten | Event::OperatorOverwritten => Severity::Warn,
            Event::OperatorFault => Severity::Error,
            Event::ConfigLoaded | Event::SchemasLoaded => Severity::Info,
            Event::SchemaRegistered
            | Event::OperatorRegistered
            | Event::OperatorInvoked
            | Event::OperatorInapplicable
            | Event::BiasExtracted => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::SchemaRegistered,
            Event::SchemaOverwritten,
            Event::SchemasLoaded,
            Event::OperatorRegistered,
            Event::OperatorOverwritten,
            Event::OperatorInvoked,
            Event::OperatorInapplicable,
            Event::OperatorFault,
            Event::BiasExtracted,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_overwrites_warn() {
        assert_eq!(Event::SchemaOverwritten.severity(), Severity::Warn);
        assert_eq!(Event::OperatorOverwritten.severity(), Severity::Warn);
        assert_eq!(Event::OperatorFault.severity(), Severity::Error);
    }
}
