// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! fbconnect — command bridge to the native Facebook SDK plugin.
//!
//! Host code calls typed operations on [`ConnectBridge`]; the bridge shapes
//! each one into a positional [`DispatchCall`](fbconnect_core::DispatchCall)
//! for the `FacebookConnectPlugin` service and hands it to an injected
//! [`Dispatcher`]. Outcomes come back through a continuation pair or a
//! [`PendingOutcome`] future, exactly once per call.

pub mod bridge;
pub mod channel;
pub mod command;
pub mod dispatch;
pub mod profile;
pub mod stub;

#[cfg(test)]
mod testing;

pub use bridge::{ConnectBridge, PendingOutcome};
pub use channel::{ChannelDispatcher, PendingCall};
pub use command::{AppEvent, Command};
pub use dispatch::{Dispatcher, Responder};
pub use profile::{ArgumentProfile, EventShape};
pub use stub::StubDispatcher;

/// Bridge for builds with no native engine: every call fails with
/// `PlatformUnavailable`.
pub fn stub_bridge() -> ConnectBridge<StubDispatcher> {
    ConnectBridge::new(StubDispatcher)
}
