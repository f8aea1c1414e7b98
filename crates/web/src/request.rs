//! Transport-level request parts handed to the dispatcher.
//!
//! The transport (HTTP server, test harness, ...) owns connection handling;
//! this type only carries what routing and handler invocation need: the
//! method string, the path, the raw query string, headers and the buffered
//! body bytes.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use scriptlet_value::{decode, DecodeError, Value};

#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    path: String,
    query: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    /// Builds a request from a method and a request target. A query string
    /// after `?` is split off; the path itself is never normalized, so
    /// trailing slashes stay significant for routing.
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (target, String::new()),
        };
        Self {
            method: method.into(),
            path,
            query,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Query string decoded into name/value pairs. Undecodable input yields
    /// no pairs, matching how lenient servers treat bad query strings.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        serde_urlencoded::from_str(&self.query).unwrap_or_default()
    }

    /// The body parsed as a structured JSON value.
    pub fn body_value(&self) -> Result<Value, DecodeError> {
        decode(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_splits_path_and_query() {
        let request = Request::new("GET", "/search?q=routing&page=2");
        assert_eq!(request.path(), "/search");
        assert_eq!(request.query(), "q=routing&page=2");
    }

    #[test]
    fn test_target_without_query() {
        let request = Request::new("GET", "/plain");
        assert_eq!(request.path(), "/plain");
        assert_eq!(request.query(), "");
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_decoding() {
        let request = Request::new("GET", "/q?name=john%20doe&tag=a&tag=b");
        let pairs = request.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "john doe".to_string()),
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_path_keeps_trailing_slash() {
        let request = Request::new("GET", "/hello/?x=1");
        assert_eq!(request.path(), "/hello/");
    }

    #[test]
    fn test_body_value() {
        let request = Request::new("POST", "/ingest").with_body(&br#"{"n": 1}"#[..]);
        let value = request.body_value().unwrap();
        assert_eq!(
            value.as_mapping().and_then(|m| m.get("n")).and_then(Value::as_number),
            Some(1.0)
        );

        let bad = Request::new("POST", "/ingest").with_body(&b"nope"[..]);
        assert!(bad.body_value().is_err());
    }
}
