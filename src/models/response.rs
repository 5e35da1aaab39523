//! Handler output and outbound gateway response models.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// What the downstream handler returns for one invocation.
///
/// `body` is an ordered sequence of chunks; chunk order is the only
/// ordering guarantee, and the response translator drains the sequence
/// exactly once.
#[derive(Debug)]
pub struct HandlerOutput {
    pub headers: LinkedHashMap<String, String>,
    pub status: u16,
    pub body: Vec<Vec<u8>>,
}

/// HTTP response envelope the gateway expects back.
///
/// When `is_base64_encoded` is set, `body` is the base64 encoding of the
/// response content; otherwise `body` is the content verbatim and is valid
/// UTF-8. Serializes with the `isBase64Encoded` wire key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status: u16,
    pub headers: LinkedHashMap<String, String>,
    pub is_base64_encoded: bool,
    pub body: String,
}
