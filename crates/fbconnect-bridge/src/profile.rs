// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Positional argument shapes.
//
// Native handlers read arguments by position and count. A skipped middle
// argument cannot be expressed, and null placeholders are unsafe on iOS
// (NSNull inflates `[command.arguments count]`), so the list is shortened
// instead of padded.

use fbconnect_core::error::{BridgeError, Result};
use serde_json::{Number, Value};

/// Which optional event inputs end up on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    /// `[name]`
    NameOnly,
    /// `[name, params]`
    WithParams,
    /// `[name, params, valueToSum]`
    WithParamsAndValue,
}

/// Pick the event shape from which optional inputs were supplied.
///
/// A value to sum without parameters has no slot to travel in and is
/// rejected with `InvalidArguments`.
pub fn classify_event(has_params: bool, has_value: bool) -> Result<EventShape> {
    match (has_params, has_value) {
        (false, false) => Ok(EventShape::NameOnly),
        (true, false) => Ok(EventShape::WithParams),
        (true, true) => Ok(EventShape::WithParamsAndValue),
        (false, true) => Err(BridgeError::InvalidArguments),
    }
}

/// Positional argument list with zero to three slots.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentProfile {
    Empty,
    Single(Value),
    Pair(Value, Value),
    Triple(Value, Value, Value),
}

impl ArgumentProfile {
    pub fn into_args(self) -> Vec<Value> {
        match self {
            Self::Empty => vec![],
            Self::Single(a) => vec![a],
            Self::Pair(a, b) => vec![a, b],
            Self::Triple(a, b, c) => vec![a, b, c],
        }
    }
}

/// Encode a value to sum. Whole numbers go out as integers, matching what a
/// script runtime would serialize; non-finite values are rejected.
pub fn number_value(value: f64) -> Result<Value> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Ok(Value::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(BridgeError::InvalidArguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_follows_presence() {
        assert_eq!(classify_event(false, false).unwrap(), EventShape::NameOnly);
        assert_eq!(classify_event(true, false).unwrap(), EventShape::WithParams);
        assert_eq!(classify_event(true, true).unwrap(), EventShape::WithParamsAndValue);
    }

    #[test]
    fn value_without_params_is_invalid() {
        assert!(matches!(
            classify_event(false, true),
            Err(BridgeError::InvalidArguments)
        ));
    }

    #[test]
    fn profile_keeps_order() {
        let profile = ArgumentProfile::Triple(json!("a"), json!({}), json!(1));
        assert_eq!(profile.into_args(), vec![json!("a"), json!({}), json!(1)]);
        assert!(ArgumentProfile::Empty.into_args().is_empty());
    }

    #[test]
    fn whole_numbers_encode_as_integers() {
        assert_eq!(number_value(0.0).unwrap(), json!(0));
        assert_eq!(number_value(5.0).unwrap(), json!(5));
        assert_eq!(number_value(-2.0).unwrap(), json!(-2));
        assert_eq!(number_value(9.99).unwrap(), json!(9.99));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(number_value(f64::NAN).is_err());
        assert!(number_value(f64::INFINITY).is_err());
    }
}
