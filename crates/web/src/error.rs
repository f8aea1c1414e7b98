use std::error::Error;
use thiserror::Error;

/// Error compiling a route pattern at registration time.
///
/// These are configuration errors: they surface once during the setup phase
/// and the offending route is never added, so they cannot be observed while
/// serving requests.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate placeholder :{name} in pattern {pattern:?}")]
    DuplicatePlaceholder { pattern: String, name: String },

    #[error("pattern {pattern:?} does not compile: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl RouteError {
    pub fn duplicate_placeholder<P: ToString, N: ToString>(pattern: P, name: N) -> Self {
        Self::DuplicatePlaceholder { pattern: pattern.to_string(), name: name.to_string() }
    }

    pub fn pattern<P: ToString>(pattern: P, source: regex::Error) -> Self {
        Self::Pattern { pattern: pattern.to_string(), source }
    }
}

/// A method string the transport handed us that is not a known HTTP verb.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown http method: {method}")]
pub struct UnknownMethod {
    method: String,
}

impl UnknownMethod {
    pub fn new<S: ToString>(method: S) -> Self {
        Self { method: method.to_string() }
    }
}

/// Error surfaced by the dispatcher when an invoked handler fails.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("handler failed: {source}")]
    Handler {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl DispatchError {
    pub fn handler(source: Box<dyn Error + Send + Sync>) -> Self {
        Self::Handler { source }
    }
}
