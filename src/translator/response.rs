//! Handler output → gateway response envelope.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hashlink::LinkedHashMap;

use crate::models::GatewayResponse;

/// Content types the gateway must always receive base64-encoded,
/// regardless of what the body bytes look like.
const BINARY_CONTENT_TYPES: [&str; 4] = [
    "application/octet-stream",
    "image/jpeg",
    "image/png",
    "image/gif",
];

/// Packs a handler's output into the response envelope the gateway expects.
///
/// The body chunks are drained exactly once and concatenated in order.
/// Content is shipped base64-encoded when its `Content-Type` is in the
/// known-binary set or the concatenated bytes are not valid UTF-8;
/// otherwise it is passed through verbatim. Status and headers are not
/// validated or modified.
pub fn translate_response<I, B>(
    headers: LinkedHashMap<String, String>,
    status: u16,
    body: I,
) -> GatewayResponse
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut content = Vec::new();
    for chunk in body {
        content.extend_from_slice(chunk.as_ref());
    }

    let (body, is_base64_encoded) = if has_binary_content_type(&headers) {
        (STANDARD.encode(&content), true)
    } else {
        match String::from_utf8(content) {
            Ok(text) => (text, false),
            Err(not_utf8) => (STANDARD.encode(not_utf8.as_bytes()), true),
        }
    };

    GatewayResponse {
        status,
        headers,
        is_base64_encoded,
        body,
    }
}

/// Whether the response declares one of the known-binary content types.
/// Handler header maps come from arbitrary downstream code, so the header
/// name is matched case-insensitively.
fn has_binary_content_type(headers: &LinkedHashMap<String, String>) -> bool {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-type"))
        .is_some_and(|(_, value)| BINARY_CONTENT_TYPES.contains(&value.as_str()))
}
