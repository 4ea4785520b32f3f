// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The command bridge: one entry point per plugin operation.
//
// Each entry point builds a `Command`, shapes its positional arguments and
// hands the resulting call to the injected `Dispatcher`. Requests that fail
// local validation are answered synchronously and never reach the engine.
// Every call resolves exactly once, through either a continuation pair or
// the future returned by the `*_async` variants.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use fbconnect_core::config::BridgeConfig;
use fbconnect_core::error::{BridgeError, Result};
use fbconnect_core::types::EventParams;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::command::Command;
use crate::dispatch::{Dispatcher, Responder, join_pair};

/// Stateless front end over a dispatcher.
#[derive(Debug, Clone)]
pub struct ConnectBridge<D> {
    config: BridgeConfig,
    dispatcher: D,
}

impl<D: Dispatcher> ConnectBridge<D> {
    pub fn new(dispatcher: D) -> Self {
        Self::with_config(BridgeConfig::default(), dispatcher)
    }

    pub fn with_config(config: BridgeConfig, dispatcher: D) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Log an app event.
    ///
    /// Arguments go out as `[name]`, `[name, params]` or
    /// `[name, params, value_to_sum]` depending on which optional inputs are
    /// `Some`. A value to sum without parameters fails with
    /// `BridgeError::InvalidArguments` before anything is dispatched.
    pub fn log_event(
        &self,
        name: impl Into<String>,
        params: Option<EventParams>,
        value_to_sum: Option<f64>,
        on_success: impl FnOnce(Value) + Send + 'static,
        on_failure: impl FnOnce(BridgeError) + Send + 'static,
    ) {
        self.execute(
            Command::log_event(name, params, value_to_sum),
            join_pair(on_success, on_failure),
        );
    }

    pub fn set_user_is_child(
        &self,
        is_child: bool,
        on_success: impl FnOnce(Value) + Send + 'static,
        on_failure: impl FnOnce(BridgeError) + Send + 'static,
    ) {
        self.execute(Command::SetUserIsChild(is_child), join_pair(on_success, on_failure));
    }

    pub fn set_advertiser_tracking(
        &self,
        enabled: bool,
        on_success: impl FnOnce(Value) + Send + 'static,
        on_failure: impl FnOnce(BridgeError) + Send + 'static,
    ) {
        self.execute(
            Command::SetAdvertiserTracking(enabled),
            join_pair(on_success, on_failure),
        );
    }

    pub fn activate_app(
        &self,
        on_success: impl FnOnce(Value) + Send + 'static,
        on_failure: impl FnOnce(BridgeError) + Send + 'static,
    ) {
        self.execute(Command::ActivateApp, join_pair(on_success, on_failure));
    }

    pub fn log_event_async(
        &self,
        name: impl Into<String>,
        params: Option<EventParams>,
        value_to_sum: Option<f64>,
    ) -> PendingOutcome {
        self.execute_async(Command::log_event(name, params, value_to_sum))
    }

    pub fn set_user_is_child_async(&self, is_child: bool) -> PendingOutcome {
        self.execute_async(Command::SetUserIsChild(is_child))
    }

    pub fn set_advertiser_tracking_async(&self, enabled: bool) -> PendingOutcome {
        self.execute_async(Command::SetAdvertiserTracking(enabled))
    }

    pub fn activate_app_async(&self) -> PendingOutcome {
        self.execute_async(Command::ActivateApp)
    }

    /// Validate, shape and dispatch `command`; `deliver` receives the outcome.
    pub fn execute(&self, command: Command, deliver: impl FnOnce(Result<Value>) + Send + 'static) {
        let action = command.action();
        let call = match command.into_dispatch(&self.config.service) {
            Ok(call) => call,
            Err(err) => {
                warn!(%action, error = %err, "request rejected before dispatch");
                deliver(Err(err));
                return;
            }
        };

        if self.config.log_arguments {
            debug!(
                call_id = %call.id,
                %action,
                arity = call.arity(),
                args = ?call.args,
                "dispatching"
            );
        } else {
            debug!(call_id = %call.id, %action, arity = call.arity(), "dispatching");
        }

        let responder = Responder::new(&call, deliver);
        self.dispatcher.invoke(call, responder);
    }

    /// Dispatch `command` now and return a future for its outcome.
    ///
    /// The call is handed to the dispatcher before this returns; awaiting
    /// only waits for the answer.
    pub fn execute_async(&self, command: Command) -> PendingOutcome {
        let (tx, rx) = oneshot::channel();
        self.execute(command, move |outcome| {
            let _ = tx.send(outcome);
        });
        PendingOutcome { rx }
    }
}

/// Future for the outcome of a call started by one of the `*_async` methods.
///
/// Resolves to `BridgeError::Abandoned` if the engine drops the call.
#[derive(Debug)]
pub struct PendingOutcome {
    rx: oneshot::Receiver<Result<Value>>,
}

impl Future for PendingOutcome {
    type Output = Result<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(BridgeError::Abandoned)))
    }
}
