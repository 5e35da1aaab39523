//! Lambda entry point wiring the bridge around a built-in echo application.

use std::io::Read;

use hashlink::LinkedHashMap;
use lambda_runtime::tracing::info;
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::json;

use crate::models::{GatewayEvent, GatewayResponse, HandlerOutput, RequestEnvironment};
use crate::proxy::EventProxy;

/// Built-in application: reads the body stream and echoes the canonical
/// request fields back as JSON. Stands in for a mounted application and
/// verifies a deployment end to end.
///
/// # Errors
///
/// Fails only when the body stream cannot be read.
pub fn echo_app(mut env: RequestEnvironment) -> anyhow::Result<HandlerOutput> {
    let mut body = Vec::new();
    env.input.read_to_end(&mut body)?;

    let payload = json!({
        "method": env.method,
        "path": env.path,
        "scriptName": env.script_name,
        "queryString": env.query_string,
        "bodyBytes": body.len(),
    });

    let mut headers = LinkedHashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    Ok(HandlerOutput {
        headers,
        status: 200,
        body: vec![payload.to_string().into_bytes()],
    })
}

/// Lambda event handler: one gateway event in, one gateway response out.
///
/// # Errors
///
/// Returns a `Diagnostic` with one of the following types:
///
/// - `DecodeError`: the event declared a base64 body that did not decode
/// - `HandlerError`: the downstream application failed
pub async fn function_handler(
    event: LambdaEvent<GatewayEvent>,
) -> Result<GatewayResponse, Diagnostic> {
    let (event, _context) = event.into_parts();
    info!(message = format!("Invoking bridge: {} {}", event.http_method, event.path));

    EventProxy::new(echo_app)
        .handle(&event)
        .map_err(Diagnostic::from)
}
