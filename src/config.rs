// src/config.rs

//! Defines the configuration knobs for the event core.
//!
//! The taxonomy itself has nothing to configure (its policies are fixed per
//! variant); what is tunable is the diagnostic ceiling and how strict click
//! detection is. Settings deserialize from JSON with every field optional.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default tracing ceiling: record significant (1) and moderate (2) events,
/// drop the noisy tier (3).
pub const DEFAULT_TRACE_VERBOSITY: u8 = 2;

/// Default click tolerance: press and release must land on the same cell.
pub const DEFAULT_CLICK_TOLERANCE: u32 = 0;

/// Tunables for tracing and input translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventConfig {
    /// Highest verbosity the tracer records.
    pub trace_verbosity: u8,
    /// Maximum cell distance between a press and its release for the pair
    /// to count as a click.
    pub click_tolerance: u32,
}

impl Default for EventConfig {
    fn default() -> Self {
        EventConfig {
            trace_verbosity: DEFAULT_TRACE_VERBOSITY,
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
        }
    }
}

impl EventConfig {
    /// Parses a configuration from a JSON document. Missing fields fall
    /// back to their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse event configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EventConfig::default();
        assert_eq!(config.trace_verbosity, DEFAULT_TRACE_VERBOSITY);
        assert_eq!(config.click_tolerance, DEFAULT_CLICK_TOLERANCE);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = EventConfig::from_json(r#"{ "trace_verbosity": 3 }"#).unwrap();
        assert_eq!(config.trace_verbosity, 3);
        assert_eq!(config.click_tolerance, DEFAULT_CLICK_TOLERANCE);
    }

    #[test]
    fn test_invalid_json_reports_context() {
        let err = EventConfig::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("event configuration"));
    }
}
