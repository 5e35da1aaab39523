//! Custom error types for the gateway bridge.
//!
//! This module defines error types that are specific to the bridge's
//! domain, providing more meaningful error information to callers and
//! making error handling more precise.

use std::fmt;

use lambda_runtime::Diagnostic;

/// Custom error type for the bridge.
///
/// Translation is total over well-formed events; the only translation
/// failure is a body that claims to be base64 but is not. Handler failures
/// are carried through unchanged so the invocation fails without a partial
/// response.
#[derive(Debug)]
pub enum BridgeError {
    /// The event declared `isBase64Encoded` but the body did not decode
    Decode(base64::DecodeError),
    /// The downstream handler failed
    Handler(anyhow::Error),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid base64 request body: {err}"),
            Self::Handler(err) => write!(f, "downstream handler failed: {err:#}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Handler(err) => Some(err.as_ref()),
        }
    }
}

impl From<base64::DecodeError> for BridgeError {
    fn from(error: base64::DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(error: anyhow::Error) -> Self {
        Self::Handler(error)
    }
}

impl From<BridgeError> for Diagnostic {
    fn from(error: BridgeError) -> Self {
        let error_type = match &error {
            BridgeError::Decode(_) => "DecodeError",
            BridgeError::Handler(_) => "HandlerError",
        };
        Self {
            error_type: error_type.to_string(),
            error_message: error.to_string(),
        }
    }
}
