//! Orchestration: one gateway event through the downstream handler and
//! back out as a gateway response.

use lambda_runtime::tracing::{debug, error};

use crate::models::{
    BridgeError, GatewayEvent, GatewayResponse, HandlerOutput, RequestEnvironment,
};
use crate::translator::{translate_request, translate_response};

/// The downstream application the bridge hosts.
///
/// A minimal structural contract: one synchronous call per invocation,
/// consuming the canonical environment and returning headers, status and
/// body chunks. Implemented for any matching `Fn`, so tests and the
/// bootstrap can pass plain functions.
pub trait DownstreamHandler {
    /// Handles one request.
    ///
    /// # Errors
    ///
    /// A handler error aborts the invocation; no partial response is
    /// produced.
    fn call(&self, env: RequestEnvironment) -> anyhow::Result<HandlerOutput>;
}

impl<F> DownstreamHandler for F
where
    F: Fn(RequestEnvironment) -> anyhow::Result<HandlerOutput>,
{
    fn call(&self, env: RequestEnvironment) -> anyhow::Result<HandlerOutput> {
        self(env)
    }
}

/// Stateless orchestrator wiring the two translators around the handler.
pub struct EventProxy<H> {
    handler: H,
}

impl<H: DownstreamHandler> EventProxy<H> {
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Processes one gateway event to completion: translate the request,
    /// invoke the handler once, translate its output.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Decode`] when the event declares a base64
    /// body that does not decode, and [`BridgeError::Handler`] when the
    /// downstream handler fails.
    pub fn handle(&self, event: &GatewayEvent) -> Result<GatewayResponse, BridgeError> {
        debug!(method = %event.http_method, path = %event.path, "translating gateway event");

        let env = translate_request(event).map_err(|e| {
            error!(error = %e, "request translation failed");
            e
        })?;

        let output = self.handler.call(env).map_err(|e| {
            error!(error = %format!("{e:#}"), "downstream handler failed");
            BridgeError::Handler(e)
        })?;

        let HandlerOutput {
            headers,
            status,
            body,
        } = output;
        let response = translate_response(headers, status, body);

        debug!(
            status = response.status,
            base64 = response.is_base64_encoded,
            "translated handler output"
        );
        Ok(response)
    }
}
