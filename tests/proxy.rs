// End-to-end tests for the event proxy and the Lambda entry point
#![allow(clippy::unwrap_used, clippy::panic)]

use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hashlink::LinkedHashMap;
use lambda_http_bridge::handler::function_handler;
use lambda_http_bridge::models::{BridgeError, GatewayEvent, HandlerOutput, RequestEnvironment};
use lambda_http_bridge::proxy::EventProxy;
use lambda_runtime::{Context, Diagnostic, LambdaEvent};

fn event_from_json(json: &str) -> GatewayEvent {
    serde_json::from_str(json).unwrap()
}

fn lambda_event(payload: GatewayEvent) -> LambdaEvent<GatewayEvent> {
    LambdaEvent {
        payload,
        context: Context::default(),
    }
}

fn text_handler(env: RequestEnvironment) -> anyhow::Result<HandlerOutput> {
    assert_eq!(env.method, "GET");
    assert_eq!(env.script_name, "/stage");

    Ok(HandlerOutput {
        headers: LinkedHashMap::new(),
        status: 200,
        body: vec![b"foo".to_vec(), b"bar".to_vec(), b"baz".to_vec()],
    })
}

#[test]
fn proxy_translates_event_through_handler_to_response() {
    let event = event_from_json(
        r#"{
            "httpMethod": "GET",
            "path": "/widgets",
            "requestContext": { "path": "/stage/widgets" }
        }"#,
    );

    let response = EventProxy::new(text_handler).handle(&event).unwrap();

    assert_eq!(response.status, 200);
    assert!(!response.is_base64_encoded);
    assert_eq!(response.body, "foobarbaz");
    assert!(response.headers.is_empty());
}

#[test]
fn proxy_base64_encodes_binary_handler_output() {
    let event = event_from_json(r#"{"httpMethod": "GET", "path": "/image"}"#);

    let handler = |_env: RequestEnvironment| -> anyhow::Result<HandlerOutput> {
        let mut headers = LinkedHashMap::new();
        headers.insert("Content-Type".to_string(), "image/png".to_string());
        Ok(HandlerOutput {
            headers,
            status: 200,
            body: vec![vec![0x89, 0x50, 0x4e, 0x47]],
        })
    };

    let response = EventProxy::new(handler).handle(&event).unwrap();

    assert!(response.is_base64_encoded);
    assert_eq!(response.body, STANDARD.encode([0x89u8, 0x50, 0x4e, 0x47]));
    assert_eq!(response.headers.get("Content-Type").unwrap(), "image/png");
}

#[test]
fn proxy_hands_the_decoded_body_to_the_handler() {
    let event = event_from_json(&format!(
        r#"{{
            "httpMethod": "POST",
            "path": "/upload",
            "body": "{}",
            "isBase64Encoded": true
        }}"#,
        STANDARD.encode("raw bytes")
    ));

    let handler = |mut env: RequestEnvironment| -> anyhow::Result<HandlerOutput> {
        let mut body = String::new();
        env.input.read_to_string(&mut body)?;
        assert_eq!(body, "raw bytes");
        Ok(HandlerOutput {
            headers: LinkedHashMap::new(),
            status: 204,
            body: vec![],
        })
    };

    let response = EventProxy::new(handler).handle(&event).unwrap();
    assert_eq!(response.status, 204);
    assert_eq!(response.body, "");
}

#[test]
fn undecodable_base64_body_fails_the_invocation() {
    let event = event_from_json(
        r#"{
            "httpMethod": "POST",
            "path": "/upload",
            "body": "!!! not base64 !!!",
            "isBase64Encoded": true
        }"#,
    );

    let handler = |_env: RequestEnvironment| -> anyhow::Result<HandlerOutput> {
        panic!("handler must not run when translation fails");
    };

    let result = EventProxy::new(handler).handle(&event);
    assert!(matches!(result, Err(BridgeError::Decode(_))));

    let diagnostic = Diagnostic::from(result.unwrap_err());
    assert_eq!(diagnostic.error_type, "DecodeError");
}

#[test]
fn handler_failure_surfaces_as_invocation_failure() {
    let event = event_from_json(r#"{"httpMethod": "GET", "path": "/boom"}"#);

    let handler = |_env: RequestEnvironment| -> anyhow::Result<HandlerOutput> {
        anyhow::bail!("backing store unavailable")
    };

    let result = EventProxy::new(handler).handle(&event);
    assert!(matches!(result, Err(BridgeError::Handler(_))));

    let diagnostic = Diagnostic::from(result.unwrap_err());
    assert_eq!(diagnostic.error_type, "HandlerError");
    assert!(diagnostic.error_message.contains("backing store unavailable"));
}

#[tokio::test]
async fn function_handler_echoes_request_shape() {
    let event = event_from_json(
        r#"{
            "httpMethod": "POST",
            "path": "/my/path/info",
            "requestContext": { "path": "/base/my/path/info" },
            "multiValueQueryStringParameters": { "a": ["x"] },
            "body": "hello"
        }"#,
    );

    let response = function_handler(lambda_event(event)).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(!response.is_base64_encoded);
    assert_eq!(response.headers.get("Content-Type").unwrap(), "application/json");

    let payload: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(payload["method"], "POST");
    assert_eq!(payload["path"], "/my/path/info");
    assert_eq!(payload["scriptName"], "/base");
    assert_eq!(payload["queryString"], "a=x");
    assert_eq!(payload["bodyBytes"], 5);
}

#[tokio::test]
async fn function_handler_reports_decode_failures() {
    let event = event_from_json(
        r#"{
            "httpMethod": "POST",
            "path": "/",
            "body": "????",
            "isBase64Encoded": true
        }"#,
    );

    let result = function_handler(lambda_event(event)).await;
    let diagnostic = result.unwrap_err();
    assert_eq!(diagnostic.error_type, "DecodeError");
}
