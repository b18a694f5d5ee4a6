//! Observability subsystem
//!
//! Structured JSON logging of typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on operator results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use apprentice_operators::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemasLoaded, &[("count", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        // This just verifies no panic
        log_event_with_fields(Event::SchemaOverwritten, &[("schema", "TextField")]);
        log_event_with_fields(Event::BiasExtracted, &[]);
    }

    #[test]
    fn test_event_severity_gates_output() {
        assert!(Logger::enabled(Event::SchemaOverwritten.severity()));
        assert!(Logger::enabled(Event::OperatorFault.severity()));
    }
}
