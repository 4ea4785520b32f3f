// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel-backed dispatcher.
//
// Hosts that run the native engine on its own task (or behind an FFI
// callback loop) receive `PendingCall`s from the channel and resolve each
// responder when the engine answers. Sending never blocks, so bridge calls
// return immediately.

use fbconnect_core::error::BridgeError;
use fbconnect_core::types::DispatchCall;
use tokio::sync::mpsc;
use tracing::warn;

use crate::dispatch::{Dispatcher, Responder};

/// A call waiting for the engine.
#[derive(Debug)]
pub struct PendingCall {
    pub call: DispatchCall,
    pub responder: Responder,
}

/// Dispatcher that forwards calls to an engine task over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<PendingCall>,
}

impl ChannelDispatcher {
    /// Create the dispatcher and the receiving end for the engine.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Dispatcher for ChannelDispatcher {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        let pending = PendingCall { call, responder };
        if let Err(mpsc::error::SendError(pending)) = self.tx.send(pending) {
            warn!(
                call_id = %pending.responder.call_id(),
                action = %pending.responder.action(),
                "engine channel closed"
            );
            pending.responder.resolve(Err(BridgeError::EngineUnavailable));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbconnect_core::error::Result;
    use fbconnect_core::types::{Action, SERVICE_NAME};
    use serde_json::{Value, json};
    use tokio::sync::oneshot;

    fn pending(action: Action) -> (DispatchCall, Responder, oneshot::Receiver<Result<Value>>) {
        let (tx, rx) = oneshot::channel();
        let call = DispatchCall::new(SERVICE_NAME, action, vec![]);
        let responder = Responder::new(&call, move |outcome| {
            let _ = tx.send(outcome);
        });
        (call, responder, rx)
    }

    #[tokio::test]
    async fn engine_task_resolves_calls() {
        let (dispatcher, mut rx) = ChannelDispatcher::new();
        let engine = tokio::spawn(async move {
            while let Some(PendingCall { call, responder }) = rx.recv().await {
                responder.succeed(json!({ "handled": call.action.as_str() }));
            }
        });

        let (call, responder, outcome) = pending(Action::ActivateApp);
        dispatcher.invoke(call, responder);

        let payload = outcome.await.expect("delivered").expect("success");
        assert_eq!(payload, json!({ "handled": "activateApp" }));

        drop(dispatcher);
        engine.await.expect("engine task");
    }

    #[tokio::test]
    async fn closed_engine_fails_immediately() {
        let (dispatcher, rx) = ChannelDispatcher::new();
        drop(rx);
        assert!(dispatcher.is_closed());

        let (call, responder, outcome) = pending(Action::ActivateApp);
        dispatcher.invoke(call, responder);

        let result = outcome.await.expect("delivered");
        assert!(matches!(result, Err(BridgeError::EngineUnavailable)));
    }

    #[tokio::test]
    async fn engine_dropping_a_call_abandons_it() {
        let (dispatcher, mut rx) = ChannelDispatcher::new();
        let (call, responder, outcome) = pending(Action::ActivateApp);
        dispatcher.invoke(call, responder);

        drop(rx.recv().await.expect("queued"));

        let result = outcome.await.expect("delivered");
        assert!(matches!(result, Err(BridgeError::Abandoned)));
    }
}
