//! Canonical request environment handed to the downstream handler.

use std::io::{self, Cursor, Stderr};

use hashlink::LinkedHashMap;

/// Capability flags advertised to the downstream handler.
///
/// Process-wide constants with no lifecycle beyond process start. The
/// runtime may run independent invocations concurrently (`multithread`);
/// it does not fork workers, recycle the process per request, or hand the
/// handler a raw connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub multithread: bool,
    pub multiprocess: bool,
    pub run_once: bool,
    pub hijack: bool,
}

/// The capability set every environment carries, independent of input.
pub const CAPABILITIES: Capabilities = Capabilities {
    multithread: true,
    multiprocess: false,
    run_once: false,
    hijack: false,
};

/// Flat request representation a generic HTTP handler consumes in place of
/// a socket-level request.
///
/// Named fields replace the stringly-keyed environment hash convention:
/// absent request data is `None` rather than a missing key. The original
/// header set survives under `headers`, each key prefixed with `HTTP_` and
/// its casing untouched. `input` is freshly allocated per translation and
/// owned by the single invocation that consumes it.
#[derive(Debug)]
pub struct RequestEnvironment {
    pub method: String,
    pub path: String,
    pub server_name: Option<String>,
    pub server_port: Option<String>,
    /// Deployment-stage prefix stripped from routed paths; empty when the
    /// gateway supplied no request-context path.
    pub script_name: String,
    pub query_string: String,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub url_scheme: Option<String>,
    /// Original request headers under `HTTP_<key>`, insertion order kept.
    pub headers: LinkedHashMap<String, String>,
    /// Request body, readable from offset 0.
    pub input: Cursor<Vec<u8>>,
    pub capabilities: Capabilities,
}

impl RequestEnvironment {
    /// The handler's error/log channel: the process-wide stderr stream,
    /// unbuffered and uninspected.
    #[must_use]
    pub fn errors(&self) -> Stderr {
        io::stderr()
    }
}
