// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The dispatch primitive seam.
//
// The native engine is reached only through `Dispatcher::invoke`: one
// normalized call in, one `Responder` to resolve. The responder is consumed
// on resolution, so a call can never be answered twice, and dropping it
// unresolved answers with `BridgeError::Abandoned` so it is never answered
// zero times either.

use std::sync::Arc;

use fbconnect_core::error::{BridgeError, Result};
use fbconnect_core::types::{Action, CallId, DispatchCall};
use serde_json::Value;
use tracing::{debug, warn};

/// Injected dependency that hands calls to the native execution engine.
///
/// Implementations must eventually resolve the responder they are given.
/// They may do so synchronously inside `invoke` or later from another task.
pub trait Dispatcher {
    fn invoke(&self, call: DispatchCall, responder: Responder);
}

impl<D: Dispatcher + ?Sized> Dispatcher for &D {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        (**self).invoke(call, responder)
    }
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        (**self).invoke(call, responder)
    }
}

impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        (**self).invoke(call, responder)
    }
}

type Deliver = Box<dyn FnOnce(Result<Value>) + Send + 'static>;

/// Single-shot completion handle for one dispatched call.
pub struct Responder {
    call_id: CallId,
    action: Action,
    deliver: Option<Deliver>,
}

impl Responder {
    /// Wrap a continuation that receives the call's outcome.
    pub fn new(call: &DispatchCall, deliver: impl FnOnce(Result<Value>) + Send + 'static) -> Self {
        Self {
            call_id: call.id,
            action: call.action,
            deliver: Some(Box::new(deliver)),
        }
    }

    pub fn call_id(&self) -> CallId {
        self.call_id
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Resolve with the engine's success payload.
    pub fn succeed(self, payload: Value) {
        self.resolve(Ok(payload));
    }

    /// Resolve with the engine's failure payload, forwarded verbatim.
    pub fn fail(self, payload: Value) {
        self.resolve(Err(BridgeError::Native(payload)));
    }

    pub fn resolve(mut self, outcome: Result<Value>) {
        if let Some(deliver) = self.deliver.take() {
            debug!(
                call_id = %self.call_id,
                action = %self.action,
                ok = outcome.is_ok(),
                "call resolved"
            );
            deliver(outcome);
        }
    }
}

/// Fold a success/failure continuation pair into one outcome continuation.
pub(crate) fn join_pair(
    on_success: impl FnOnce(Value) + Send + 'static,
    on_failure: impl FnOnce(BridgeError) + Send + 'static,
) -> impl FnOnce(Result<Value>) + Send + 'static {
    move |outcome| match outcome {
        Ok(payload) => on_success(payload),
        Err(err) => on_failure(err),
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if let Some(deliver) = self.deliver.take() {
            warn!(
                call_id = %self.call_id,
                action = %self.action,
                "responder dropped without an outcome"
            );
            deliver(Err(BridgeError::Abandoned));
        }
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("call_id", &self.call_id)
            .field("action", &self.action)
            .field("resolved", &self.deliver.is_none())
            .finish()
    }
}
