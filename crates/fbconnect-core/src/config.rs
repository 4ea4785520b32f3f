// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{BridgeError, Result};
use crate::types::SERVICE_NAME;

/// Settings for a bridge instance. Nothing here is persisted by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Service identifier every dispatch targets.
    pub service: String,
    /// Include positional arguments in debug-level dispatch logs.
    /// Event parameters can carry user data, so this is off by default.
    pub log_arguments: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            log_arguments: false,
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        debug!(service = %config.service, "bridge config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.service.trim().is_empty() {
            return Err(BridgeError::Config("service name must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_target_facebook_plugin() {
        let config = BridgeConfig::default();
        assert_eq!(config.service, "FacebookConnectPlugin");
        assert!(!config.log_arguments);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = BridgeConfig::from_json(r#"{ "log_arguments": true }"#).expect("parse");
        assert_eq!(config.service, SERVICE_NAME);
        assert!(config.log_arguments);
    }

    #[test]
    fn empty_service_is_rejected() {
        let err = BridgeConfig::from_json(r#"{ "service": "  " }"#).unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "service": "StagingPlugin" }}"#).expect("write");

        let config = BridgeConfig::load(file.path()).expect("load");
        assert_eq!(config.service, "StagingPlugin");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = BridgeConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }
}
