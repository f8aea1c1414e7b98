//! Method + path routing with named placeholders
//!
//! A pattern is a `/`-separated sequence of segments. A segment starting with
//! `:` followed by an identifier is a named placeholder and captures one or
//! more non-`/` characters; every other segment matches itself verbatim, so a
//! `:` embedded in arbitrary text stays literal. Patterns without any
//! placeholder are kept as plain strings and matched by equality, never
//! through the regex engine.
//!
//! Matching walks a method's routes in registration order and returns the
//! first hit: first-registered-wins, not longest-match. Trailing slashes are
//! significant: `/hello` and `/hello/` are distinct patterns.
//!
//! The router is generic over the handler payload it stores; it never
//! interprets or invokes handlers. Registration is a single-threaded setup
//! phase (`add` takes `&mut self`); afterwards the compiled table is
//! immutable and lookups may run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use crate::error::RouteError;
use crate::method::Method;

/// Parameters captured from a matched path, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    /// No parameters; what literal routes produce.
    pub fn empty() -> Self {
        Self::default()
    }

    fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        self.values.get(name.as_ref()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// One registered route: the raw pattern, its compiled matcher and the opaque
/// handler payload. Immutable once built.
struct Route<H> {
    pattern: String,
    matcher: Matcher,
    handler: H,
}

enum Matcher {
    /// No placeholders: match by string equality against the raw pattern.
    Literal,
    /// At least one placeholder: anchored whole-path pattern with named
    /// groups, compiled exactly once at registration.
    Pattern { regex: Regex, param_names: Vec<String> },
}

fn placeholder_name(segment: &str) -> Option<&str> {
    let name = segment.strip_prefix(':')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_').then_some(name)
}

impl<H> Route<H> {
    fn compile(pattern: String, handler: H) -> Result<Self, RouteError> {
        let mut param_names: Vec<String> = Vec::new();
        let mut parts: Vec<String> = Vec::new();

        for segment in pattern.split('/') {
            match placeholder_name(segment) {
                Some(name) => {
                    if param_names.iter().any(|existing| existing == name) {
                        return Err(RouteError::duplicate_placeholder(&pattern, name));
                    }
                    parts.push(format!("(?P<{name}>[^/]+)"));
                    param_names.push(name.to_string());
                }
                None => parts.push(regex::escape(segment)),
            }
        }

        let matcher = if param_names.is_empty() {
            Matcher::Literal
        } else {
            let anchored = format!("^{}$", parts.join("/"));
            let regex =
                Regex::new(&anchored).map_err(|source| RouteError::pattern(&pattern, source))?;
            Matcher::Pattern { regex, param_names }
        };

        Ok(Self { pattern, matcher, handler })
    }

    fn matches(&self, path: &str) -> Option<Params> {
        match &self.matcher {
            Matcher::Literal => (path == self.pattern).then(Params::empty),
            Matcher::Pattern { regex, param_names } => {
                let captures = regex.captures(path)?;
                let mut values = HashMap::with_capacity(param_names.len());
                for name in param_names {
                    if let Some(capture) = captures.name(name) {
                        values.insert(name.clone(), capture.as_str().to_string());
                    }
                }
                Some(Params::new(values))
            }
        }
    }
}

/// The route table: per concrete method an ordered, append-only list of
/// routes.
pub struct Router<H> {
    routes: HashMap<Method, Vec<Arc<Route<H>>>>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers `pattern` under `method`.
    ///
    /// Compilation happens synchronously here; on error nothing is added.
    /// [`Method::Any`] appends the same compiled route to every concrete
    /// method's list, so per-method registration order still decides
    /// precedence.
    pub fn add(
        &mut self,
        method: Method,
        pattern: impl Into<String>,
        handler: H,
    ) -> Result<(), RouteError> {
        let route = Arc::new(Route::compile(pattern.into(), handler)?);
        match method {
            Method::Any => {
                for concrete in Method::CONCRETE {
                    self.routes.entry(concrete).or_default().push(Arc::clone(&route));
                }
            }
            concrete => self.routes.entry(concrete).or_default().push(route),
        }
        Ok(())
    }

    /// Resolves `(method, path)` to the first registered route that matches,
    /// along with its captured parameters.
    ///
    /// `None` is the ordinary no-route result, including for method strings
    /// that are not HTTP verbs; callers decide how to surface it.
    pub fn lookup(&self, method: &str, path: &str) -> Option<(&H, Params)> {
        let method = Method::try_from(method).ok()?;
        let routes = self.routes.get(&method)?;
        for route in routes {
            if let Some(params) = route.matches(path) {
                trace!(method = method.as_str(), path, pattern = %route.pattern, "route matched");
                return Some((&route.handler, params));
            }
        }
        None
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
