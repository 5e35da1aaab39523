//! Bridge between API Gateway proxy events and a generic HTTP handler.
//!
//! A Lambda function behind the gateway never sees a socket: it receives a
//! structured event describing the request and must answer with a
//! structured response object. This crate translates that event into a
//! canonical request environment an ordinary HTTP-handling component can
//! consume unmodified, and packs the handler's output back into the
//! response envelope the gateway expects, base64-encoding binary bodies.

pub mod handler;
pub mod models;
pub mod proxy;
pub mod translator;

pub use models::{BridgeError, GatewayEvent, GatewayResponse, HandlerOutput, RequestEnvironment};
pub use proxy::{DownstreamHandler, EventProxy};
pub use translator::{translate_request, translate_response};
