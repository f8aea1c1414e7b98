use crate::error::UnknownMethod;

/// HTTP method tag, resolved once at route registration.
///
/// [`Method::Any`] is a registration-time pseudo-method: adding a route under
/// it registers the route under every concrete method. It never appears on
/// the lookup side, since transports only carry concrete verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
    Options,
    Head,
    Any,
}

impl Method {
    /// Every concrete method, in registration fan-out order for [`Method::Any`].
    pub const CONCRETE: [Method; 9] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Trace,
        Method::Connect,
        Method::Options,
        Method::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Any => "ANY",
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = UnknownMethod;

    /// Parses a concrete transport verb. `"ANY"` is not a transport verb and
    /// does not parse.
    fn try_from(method: &str) -> Result<Self, Self::Error> {
        match method {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "TRACE" => Ok(Self::Trace),
            "CONNECT" => Ok(Self::Connect),
            "OPTIONS" => Ok(Self::Options),
            "HEAD" => Ok(Self::Head),
            _ => Err(UnknownMethod::new(method)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from() {
        let result = Method::try_from("GET");
        assert_eq!(result, Ok(Method::Get));
    }

    #[test]
    fn test_method_from_error() {
        {
            let result = Method::try_from("get");
            assert!(result.is_err());
        }

        {
            let result = Method::try_from("");
            assert!(result.is_err());
        }

        {
            // the pseudo-method never arrives from a transport
            let result = Method::try_from("ANY");
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_concrete_excludes_any() {
        assert_eq!(Method::CONCRETE.len(), 9);
        assert!(!Method::CONCRETE.contains(&Method::Any));
    }

    #[test]
    fn test_as_str_parses_back() {
        for method in Method::CONCRETE {
            assert_eq!(Method::try_from(method.as_str()), Ok(method));
        }
    }
}
