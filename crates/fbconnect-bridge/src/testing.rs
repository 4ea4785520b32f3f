// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording dispatcher used by the unit tests.

use std::sync::Mutex;

use fbconnect_core::types::DispatchCall;
use serde_json::Value;

use crate::dispatch::{Dispatcher, Responder};

/// How the fake engine answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Succeed(Value),
    Fail(Value),
    /// Keep the responder so the test can resolve it later.
    Hold,
}

/// Records every call it receives and answers according to `reply`.
#[derive(Debug)]
pub struct RecordingDispatcher {
    reply: Reply,
    calls: Mutex<Vec<DispatchCall>>,
    held: Mutex<Vec<Responder>>,
}

impl RecordingDispatcher {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
            held: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(payload: Value) -> Self {
        Self::new(Reply::Succeed(payload))
    }

    pub fn failing(payload: Value) -> Self {
        Self::new(Reply::Fail(payload))
    }

    pub fn holding() -> Self {
        Self::new(Reply::Hold)
    }

    pub fn calls(&self) -> Vec<DispatchCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take_held(&self) -> Vec<Responder> {
        std::mem::take(&mut *self.held.lock().unwrap())
    }
}

impl Dispatcher for RecordingDispatcher {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Succeed(payload) => responder.succeed(payload.clone()),
            Reply::Fail(payload) => responder.fail(payload.clone()),
            Reply::Hold => self.held.lock().unwrap().push(responder),
        }
    }
}
