// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the fbconnect command bridge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::BridgeError;

/// Service identifier the native plugin registers under.
pub const SERVICE_NAME: &str = "FacebookConnectPlugin";

/// Key/value parameters attached to an app event.
pub type EventParams = Map<String, Value>;

/// Correlation id for a single dispatch, used only in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(pub Uuid);

impl CallId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Native actions the plugin exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    LogEvent,
    UserIsChild,
    SetAdvertiserTracking,
    ActivateApp,
}

impl Action {
    /// Action identifier as the native handler matches it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogEvent => "logEvent",
            Self::UserIsChild => "userIsChild",
            Self::SetAdvertiserTracking => "setAdvertiserTracking",
            Self::ActivateApp => "activateApp",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logEvent" => Ok(Self::LogEvent),
            "userIsChild" => Ok(Self::UserIsChild),
            "setAdvertiserTracking" => Ok(Self::SetAdvertiserTracking),
            "activateApp" => Ok(Self::ActivateApp),
            other => Err(BridgeError::UnknownAction(other.to_string())),
        }
    }
}

/// A normalized invocation as handed to the dispatch primitive.
///
/// `args` is positional: its length and order must match what the native
/// handler for `action` reads. Optional trailing slots are dropped rather
/// than padded with nulls.
///
/// Equality compares what reaches the engine and ignores the correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchCall {
    pub id: CallId,
    pub service: String,
    pub action: Action,
    pub args: Vec<Value>,
}

impl DispatchCall {
    pub fn new(service: impl Into<String>, action: Action, args: Vec<Value>) -> Self {
        Self {
            id: CallId::new(),
            service: service.into(),
            action,
            args,
        }
    }

    /// Number of positional arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl PartialEq for DispatchCall {
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service && self.action == other.action && self.args == other.args
    }
}
