//! Buffered response under construction.
//!
//! Handlers and the dispatcher build the response in memory; the transport
//! applies status, headers and body to its own connection once dispatch is
//! complete. Nothing here writes to a socket.

use bytes::{Bytes, BytesMut};
use http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use scriptlet_value::{encode, Value};
use tracing::warn;

#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl Response {
    pub fn new() -> Self {
        Self { status: StatusCode::OK, headers: HeaderMap::new(), body: BytesMut::new() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Appends to the body buffer.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
    }

    /// Turns the response into an error response: the status is set and any
    /// previously written body is replaced by `message`, or by the status'
    /// canonical reason when no message is given.
    pub fn error(&mut self, status: StatusCode, message: Option<&str>) {
        self.status = status;
        self.body.clear();
        let text = message.or_else(|| status.canonical_reason()).unwrap_or_default();
        self.body.extend_from_slice(text.as_bytes());
    }

    /// Issues a basic-auth challenge for `realm`.
    pub fn authenticate(&mut self, realm: &str) {
        let challenge = format!("Basic realm=\"{realm}\"");
        match HeaderValue::from_str(&challenge) {
            Ok(value) => {
                self.headers.insert(header::WWW_AUTHENTICATE, value);
            }
            Err(_) => warn!(realm, "realm is not a valid header value"),
        }
    }

    /// Replaces the body with `value` encoded as JSON and sets the content
    /// type accordingly.
    pub fn json(&mut self, value: &Value) {
        self.body.clear();
        self.body.extend_from_slice(&encode(value));
        self.headers
            .insert(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref().parse().unwrap());
    }

    /// Consumes the response into parts for the transport to apply.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body.freeze())
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_defaults() {
        let response = Response::new();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_write_appends() {
        let mut response = Response::new();
        response.write("hello ");
        response.write("world");
        assert_eq!(response.body(), b"hello world");
    }

    #[test]
    fn test_error_resets_body() {
        let mut response = Response::new();
        response.write("partial output");

        response.error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body(), b"Internal Server Error");

        response.error(StatusCode::FORBIDDEN, Some("nope"));
        assert_eq!(response.body(), b"nope");
    }

    #[test]
    fn test_authenticate_sets_challenge() {
        let mut response = Response::new();
        response.authenticate("admin");
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).and_then(|v| v.to_str().ok()),
            Some("Basic realm=\"admin\"")
        );
    }

    #[test]
    fn test_json_sets_body_and_content_type() {
        let mut fields = BTreeMap::new();
        fields.insert("ok".to_string(), Value::Number(1.0));

        let mut response = Response::new();
        response.write("to be replaced");
        response.json(&Value::Mapping(fields));

        assert_eq!(response.body(), br#"{"ok":1.0}"#);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_into_parts() {
        let mut response = Response::new();
        response.set_status(StatusCode::CREATED);
        response.write("done");

        let (status, _headers, body) = response.into_parts();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(&body[..], b"done");
    }
}
