// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub dispatcher for desktop/CI builds where no native engine is linked.
//
// Every call resolves with `PlatformUnavailable`.

use fbconnect_core::error::BridgeError;
use fbconnect_core::types::DispatchCall;

use crate::dispatch::{Dispatcher, Responder};

/// No-op dispatcher returned on platforms without the native plugin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubDispatcher;

impl Dispatcher for StubDispatcher {
    fn invoke(&self, call: DispatchCall, responder: Responder) {
        tracing::warn!(action = %call.action, "dispatch called on stub engine");
        responder.resolve(Err(BridgeError::PlatformUnavailable));
    }
}
