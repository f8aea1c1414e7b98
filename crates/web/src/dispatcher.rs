//! Ties routing and marshalling to the external handler runtime.
//!
//! The dispatcher resolves the route, shapes the
//! captured parameters into a structured mapping, hands them to the
//! [`HandlerInvoker`] and renders the result as a JSON response. Everything
//! around it (the transport that produced the [`Request`], the sink that
//! writes the [`Response`], the runtime the invoker drives) belongs to the
//! caller, including releasing those resources on every exit path.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::DispatchError;
use crate::handler::HandlerInvoker;
use crate::request::Request;
use crate::response::Response;
use crate::router::{Params, Router};
use scriptlet_value::Value;

pub struct Dispatcher<H, I> {
    router: Router<H>,
    invoker: I,
}

fn params_value(params: &Params) -> Value {
    let fields: BTreeMap<String, Value> = params
        .iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();
    Value::Mapping(fields)
}

impl<H, I> Dispatcher<H, I>
where
    I: HandlerInvoker<H>,
{
    /// Wraps a fully populated router. Registration is over by the time a
    /// dispatcher exists, which is what makes concurrent dispatch safe.
    pub fn new(router: Router<H>, invoker: I) -> Self {
        Self { router, invoker }
    }

    pub fn router(&self) -> &Router<H> {
        &self.router
    }

    /// Routes and runs one request.
    ///
    /// `Ok(None)` means no route matched; the caller decides whether that is
    /// a 404, a fallthrough to static files, or something else. A handler
    /// failure is returned as [`DispatchError`], never rendered into a
    /// response here.
    pub async fn dispatch(&self, request: &Request) -> Result<Option<Response>, DispatchError> {
        let Some((handler, params)) = self.router.lookup(request.method(), request.path()) else {
            debug!(method = request.method(), path = request.path(), "no route matched");
            return Ok(None);
        };

        let result = self
            .invoker
            .invoke(handler, params_value(&params))
            .await
            .map_err(DispatchError::handler)?;

        let mut response = Response::new();
        response.json(&result);
        Ok(Some(response))
    }
}
