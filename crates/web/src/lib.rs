//! Routing and dispatch for script-defined HTTP handlers
//!
//! This crate is the request-side half of scriptlet: handler logic lives in
//! an embedded script runtime, and this crate decides which registered
//! handler a `(method, path)` pair belongs to and carries structured values
//! across the runtime boundary.
//!
//! # Core pieces
//!
//! - [`Router`]: ordered route table per HTTP method. Patterns support named
//!   placeholders (`/hello/:name`); matching is first-registered-wins.
//! - [`Method`]: the closed set of HTTP verbs plus the `Any` registration
//!   pseudo-method.
//! - [`Request`] / [`Response`]: the transport-neutral boundary types the
//!   dispatcher consumes and produces.
//! - [`HandlerInvoker`]: the capability that actually runs a handler inside
//!   the external runtime.
//! - [`Dispatcher`]: glues the above together for one request.
//!
//! # Example
//!
//! ```
//! use scriptlet_web::router::Router;
//! use scriptlet_web::Method;
//!
//! let mut router = Router::new();
//! router.add(Method::Get, "/hello/:name", "hello-handler").unwrap();
//!
//! let (handler, params) = router.lookup("GET", "/hello/thomas").unwrap();
//! assert_eq!(*handler, "hello-handler");
//! assert_eq!(params.get("name"), Some("thomas"));
//! ```
//!
//! Registration happens once, single-threaded, while an application is being
//! set up; afterwards the router is immutable and lookups are safe from any
//! number of threads.

mod dispatcher;
mod error;
mod handler;
mod method;
mod request;
mod response;

pub mod router;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, RouteError, UnknownMethod};
pub use handler::{invoker_fn, FnInvoker, HandlerInvoker};
pub use method::Method;
pub use request::Request;
pub use response::Response;
pub use router::{Params, Router};
