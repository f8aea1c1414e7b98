use async_trait::async_trait;
use scriptlet_value::Value;
use std::error::Error;

/// The handler-invocation capability the dispatcher consumes.
///
/// `H` is the opaque handler reference the router stores (a script function
/// id, a compiled chunk, whatever the embedding runtime uses). The invoker is
/// the bridge into that runtime: it receives the matched handler and its
/// parameters as a structured value and produces a structured result, or an
/// opaque failure for the dispatcher to surface.
#[async_trait]
pub trait HandlerInvoker<H>: Send + Sync {
    async fn invoke(&self, handler: &H, params: Value) -> Result<Value, Box<dyn Error + Send + Sync>>;
}

/// A [`HandlerInvoker`] backed by a plain function.
///
/// Script engines execute synchronously, so a synchronous closure is the
/// common case; it is adapted to the async boundary here. Mostly useful for
/// tests and small embeddings.
pub struct FnInvoker<F>(F);

pub fn invoker_fn<H, F>(f: F) -> FnInvoker<F>
where
    F: Fn(&H, Value) -> Result<Value, Box<dyn Error + Send + Sync>> + Send + Sync,
{
    FnInvoker(f)
}

#[async_trait]
impl<H, F> HandlerInvoker<H> for FnInvoker<F>
where
    H: Sync,
    F: Fn(&H, Value) -> Result<Value, Box<dyn Error + Send + Sync>> + Send + Sync,
{
    async fn invoke(&self, handler: &H, params: Value) -> Result<Value, Box<dyn Error + Send + Sync>> {
        (self.0)(handler, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_invoker<H, I: HandlerInvoker<H>>(_invoker: &I) {
        // no op
    }

    #[tokio::test]
    async fn test_fn_invoker_passes_through() {
        let invoker = invoker_fn(|name: &&str, params| {
            assert_eq!(params, Value::Null);
            Ok(Value::String((*name).to_string()))
        });
        assert_is_invoker::<&str, _>(&invoker);

        let result = invoker.invoke(&"greet", Value::Null).await.unwrap();
        assert_eq!(result, Value::String("greet".to_string()));
    }
}
