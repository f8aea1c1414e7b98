use scriptlet_value::Value;
use scriptlet_web::router::Router;
use scriptlet_web::{invoker_fn, Dispatcher, Method, Request};
use std::collections::BTreeMap;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut router = Router::new();
    router.add(Method::Get, "/", "index").unwrap();
    router.add(Method::Get, "/hello/:name", "greet").unwrap();
    router.add(Method::Any, "/echo/:word", "echo").unwrap();

    let invoker = invoker_fn(|handler: &&str, params: Value| {
        let mut fields = BTreeMap::new();
        fields.insert("handler".to_string(), Value::String((*handler).to_string()));
        fields.insert("params".to_string(), params);
        Ok(Value::Mapping(fields))
    });

    let dispatcher = Dispatcher::new(router, invoker);

    for (method, target) in [
        ("GET", "/"),
        ("GET", "/hello/thomas"),
        ("PUT", "/echo/ping"),
        ("GET", "/missing"),
    ] {
        let request = Request::new(method, target);
        match dispatcher.dispatch(&request).await {
            Ok(Some(response)) => {
                info!(
                    method,
                    target,
                    status = %response.status(),
                    body = %String::from_utf8_lossy(response.body()),
                    "handled"
                );
            }
            Ok(None) => info!(method, target, "no route"),
            Err(e) => info!(method, target, cause = %e, "dispatch failed"),
        }
    }
}
