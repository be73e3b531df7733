//! Demo configuration, read from the environment.
//!
//! | variable             | values                              | default  |
//! |----------------------|-------------------------------------|----------|
//! | `WAREHOUSE_RECORDER` | `plain`, `prefixed`, `tracing`      | `plain`  |
//! | `WAREHOUSE_COMPACT`  | `1`/`true`/`yes`, `0`/`false`/`no`  | `false`  |
//!
//! `RUST_LOG` is read separately by `warehouse_observability::init`.

use std::sync::Arc;

use thiserror::Error;

use warehouse_core::Recorder;
use warehouse_observability::{ConsoleRecorder, PrefixedRecorder, TracingRecorder};

pub const RECORDER_VAR: &str = "WAREHOUSE_RECORDER";
pub const COMPACT_VAR: &str = "WAREHOUSE_COMPACT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown recorder {value:?} (expected plain, prefixed or tracing)")]
    UnknownRecorder { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Which recorder strategy the ledger reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderKind {
    #[default]
    Plain,
    Prefixed,
    Tracing,
}

impl RecorderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecorderKind::Plain => "plain",
            RecorderKind::Prefixed => "prefixed",
            RecorderKind::Tracing => "tracing",
        }
    }

    pub fn build(self) -> Arc<dyn Recorder> {
        match self {
            RecorderKind::Plain => Arc::new(ConsoleRecorder::stdout()),
            RecorderKind::Prefixed => Arc::new(PrefixedRecorder::console()),
            RecorderKind::Tracing => Arc::new(TracingRecorder),
        }
    }
}

impl core::str::FromStr for RecorderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "console" => Ok(RecorderKind::Plain),
            "prefixed" => Ok(RecorderKind::Prefixed),
            "tracing" => Ok(RecorderKind::Tracing),
            _ => Err(ConfigError::UnknownRecorder {
                var: RECORDER_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub recorder: RecorderKind,
    /// Print the final snapshot on one line instead of indented.
    pub compact: bool,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (unset = `None`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let recorder = match lookup(RECORDER_VAR) {
            Some(value) => value.parse()?,
            None => RecorderKind::default(),
        };
        let compact = match lookup(COMPACT_VAR) {
            Some(value) => parse_bool(COMPACT_VAR, &value)?,
            None => false,
        };
        Ok(Self { recorder, compact })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.recorder, RecorderKind::Plain);
        assert!(!config.compact);
    }

    #[test]
    fn reads_recorder_and_compact() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (RECORDER_VAR, "Prefixed"),
            (COMPACT_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.recorder, RecorderKind::Prefixed);
        assert!(config.compact);
    }

    #[test]
    fn rejects_unknown_recorder() {
        let err = DemoConfig::from_lookup(lookup_from(&[(RECORDER_VAR, "syslog")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownRecorder {
                var: RECORDER_VAR,
                value: "syslog".to_string(),
            }
        );
    }

    #[test]
    fn rejects_non_boolean_compact() {
        let err = DemoConfig::from_lookup(lookup_from(&[(COMPACT_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }

    #[test]
    fn built_recorder_matches_kind() {
        assert_eq!(RecorderKind::Plain.build().name(), "console");
        assert_eq!(RecorderKind::Prefixed.build().name(), "prefixed");
        assert_eq!(RecorderKind::Tracing.build().name(), "tracing");
    }
}
