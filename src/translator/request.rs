//! Gateway event → canonical request environment.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hashlink::LinkedHashMap;

use crate::models::{BridgeError, CAPABILITIES, GatewayEvent, RequestEnvironment};

/// Builds the canonical request environment for one gateway event.
///
/// Absent optional event fields degrade to `None`/empty values; the only
/// failure is a body that declares `isBase64Encoded` but does not decode.
///
/// # Errors
///
/// Returns [`BridgeError::Decode`] when the declared-base64 body is not
/// valid base64.
pub fn translate_request(event: &GatewayEvent) -> Result<RequestEnvironment, BridgeError> {
    Ok(RequestEnvironment {
        method: event.http_method.clone(),
        path: event.path.clone(),
        server_name: event.header("HOST").map(str::to_string),
        server_port: event.header("X-Forwarded-Port").map(str::to_string),
        script_name: script_name(event),
        query_string: join_query_params(event),
        content_type: event.header("Content-Type").map(str::to_string),
        content_length: event.header("Content-Length").map(str::to_string),
        url_scheme: event.header("X-Forwarded-Proto").map(str::to_string),
        headers: prefixed_headers(event),
        input: create_input(event)?,
        capabilities: CAPABILITIES,
    })
}

/// Chomps the routed path off the request-context path, leaving the
/// deployment-stage prefix. A context path that does not end with the
/// routed path is kept unchanged; a missing context path yields "".
fn script_name(event: &GatewayEvent) -> String {
    let context_path = event.request_context.path.as_deref().unwrap_or("");
    context_path
        .strip_suffix(&event.path)
        .unwrap_or(context_path)
        .to_string()
}

/// Flattens the multi-value query mapping into `key=value&...`, one pair
/// per value, keys in insertion order and per-key values in input order.
fn join_query_params(event: &GatewayEvent) -> String {
    let mut pairs = Vec::new();
    for (key, values) in &event.multi_value_query_string_parameters {
        for value in values {
            pairs.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
    }
    pairs.join("&")
}

/// Wraps the request body as a readable stream positioned at offset 0,
/// base64-decoding it first when the event says so.
fn create_input(event: &GatewayEvent) -> Result<Cursor<Vec<u8>>, BridgeError> {
    let body = event.body.as_deref().unwrap_or("");
    let bytes = if event.is_base64_encoded {
        STANDARD.decode(body)?
    } else {
        body.as_bytes().to_vec()
    };
    Ok(Cursor::new(bytes))
}

/// Copies every event header into the environment under `HTTP_<key>`,
/// key casing preserved exactly as received.
fn prefixed_headers(event: &GatewayEvent) -> LinkedHashMap<String, String> {
    event
        .headers
        .iter()
        .map(|(key, value)| (format!("HTTP_{key}"), value.clone()))
        .collect()
}
