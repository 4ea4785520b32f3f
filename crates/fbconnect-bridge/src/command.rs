// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed requests and their positional encoding.
//
// `Command::profile` is the host side (typed request -> argument list);
// `Command::decode` is the native side (argument list -> typed request) and
// follows what the native handlers accept.

use fbconnect_core::error::{BridgeError, Result};
use fbconnect_core::types::{Action, DispatchCall, EventParams};
use serde_json::Value;

use crate::profile::{ArgumentProfile, EventShape, classify_event, number_value};

/// An app event to log.
#[derive(Debug, Clone, PartialEq)]
pub struct AppEvent {
    pub name: String,
    pub params: Option<EventParams>,
    pub value_to_sum: Option<f64>,
}

/// One operation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LogEvent(AppEvent),
    SetUserIsChild(bool),
    SetAdvertiserTracking(bool),
    ActivateApp,
}

impl Command {
    pub fn log_event(
        name: impl Into<String>,
        params: Option<EventParams>,
        value_to_sum: Option<f64>,
    ) -> Self {
        Self::LogEvent(AppEvent {
            name: name.into(),
            params,
            value_to_sum,
        })
    }

    pub fn action(&self) -> Action {
        match self {
            Self::LogEvent(_) => Action::LogEvent,
            Self::SetUserIsChild(_) => Action::UserIsChild,
            Self::SetAdvertiserTracking(_) => Action::SetAdvertiserTracking,
            Self::ActivateApp => Action::ActivateApp,
        }
    }

    /// Validate and shape the positional arguments for this request.
    pub fn profile(&self) -> Result<ArgumentProfile> {
        match self {
            Self::LogEvent(event) => event_profile(event),
            Self::SetUserIsChild(flag) | Self::SetAdvertiserTracking(flag) => {
                Ok(ArgumentProfile::Single(Value::Bool(*flag)))
            }
            Self::ActivateApp => Ok(ArgumentProfile::Empty),
        }
    }

    /// Build the dispatch call sent to `service`.
    pub fn into_dispatch(self, service: &str) -> Result<DispatchCall> {
        let args = self.profile()?.into_args();
        Ok(DispatchCall::new(service, self.action(), args))
    }

    /// Read a dispatch call back into a request the way the native plugin
    /// reads its argument list.
    pub fn decode(call: &DispatchCall) -> Result<Self> {
        match call.action {
            Action::LogEvent => decode_event(call),
            // An unreadable child flag means "child": safest until told otherwise.
            Action::UserIsChild => Ok(Self::SetUserIsChild(
                call.args.first().and_then(Value::as_bool).unwrap_or(true),
            )),
            Action::SetAdvertiserTracking => match call.args.first() {
                Some(Value::Bool(flag)) => Ok(Self::SetAdvertiserTracking(*flag)),
                _ => Err(malformed(call, "expected a boolean tracking flag")),
            },
            Action::ActivateApp => Ok(Self::ActivateApp),
        }
    }
}

fn event_profile(event: &AppEvent) -> Result<ArgumentProfile> {
    let shape = classify_event(event.params.is_some(), event.value_to_sum.is_some())?;
    let name = Value::String(event.name.clone());

    match (shape, &event.params, event.value_to_sum) {
        (EventShape::NameOnly, _, _) => Ok(ArgumentProfile::Single(name)),
        (EventShape::WithParams, Some(params), _) => {
            Ok(ArgumentProfile::Pair(name, Value::Object(params.clone())))
        }
        (EventShape::WithParamsAndValue, Some(params), Some(value)) => {
            Ok(ArgumentProfile::Triple(
                name,
                Value::Object(params.clone()),
                number_value(value)?,
            ))
        }
        _ => Err(BridgeError::InvalidArguments),
    }
}

fn decode_event(call: &DispatchCall) -> Result<Command> {
    let mut args = call.args.iter();

    let name = match args.next() {
        None => return Err(BridgeError::InvalidArguments),
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(malformed(call, "event name must be a string")),
    };
    let params = match args.next() {
        None => None,
        Some(Value::Object(params)) => Some(params.clone()),
        Some(_) => return Err(malformed(call, "event parameters must be an object")),
    };
    let value_to_sum = match args.next() {
        None => None,
        Some(v) => Some(
            v.as_f64()
                .ok_or_else(|| malformed(call, "value to sum must be a number"))?,
        ),
    };
    if args.next().is_some() {
        return Err(malformed(call, "too many arguments"));
    }

    Ok(Command::log_event(name, params, value_to_sum))
}

fn malformed(call: &DispatchCall, reason: &str) -> BridgeError {
    BridgeError::Malformed {
        action: call.action.to_string(),
        reason: reason.to_string(),
    }
}
