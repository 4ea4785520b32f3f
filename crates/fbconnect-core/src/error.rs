// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for fbconnect.

use serde_json::Value;
use thiserror::Error;

/// Every way a bridge call can fail.
///
/// `InvalidArguments` is the only error the bridge produces on its own before
/// dispatch. `Native` carries the engine's failure payload untouched.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Local validation --
    #[error("Invalid arguments")]
    InvalidArguments,

    // -- Engine outcomes --
    #[error("native engine failure: {0}")]
    Native(Value),

    #[error("native engine dropped the call without resolving it")]
    Abandoned,

    #[error("native engine is not accepting calls")]
    EngineUnavailable,

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Native-side decoding --
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("malformed arguments for {action}: {reason}")]
    Malformed { action: String, reason: String },

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// Payload handed to a failure continuation that expects a plain value.
    ///
    /// Engine payloads pass through verbatim; everything else becomes its
    /// display text, so a local rejection reads `"Invalid arguments"`.
    pub fn into_payload(self) -> Value {
        match self {
            Self::Native(payload) => payload,
            other => Value::String(other.to_string()),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;
