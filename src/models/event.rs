//! Inbound gateway event models.
//!
//! These types define the structure of the proxy integration event the
//! gateway delivers in place of a live connection. Only `httpMethod` and
//! `path` are required; everything else degrades to empty/absent.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// HTTP request event as delivered by the gateway.
///
/// Header and query maps use insertion-ordered maps so the query string can
/// be rebuilt in the order the gateway sent the parameters. Headers are a
/// plain string map at this layer — the gateway does not deliver duplicate
/// keys.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub headers: LinkedHashMap<String, String>,
    #[serde(default)]
    pub request_context: RequestContext,
    #[serde(default)]
    pub multi_value_query_string_parameters: LinkedHashMap<String, Vec<String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// Request context attached by the gateway.
///
/// `path` is the original un-stripped path, including the deployment-stage
/// prefix the routed `path` no longer carries.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub path: Option<String>,
}

impl GatewayEvent {
    /// Looks up a request header by its exact key.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}
