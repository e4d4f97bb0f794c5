use std::future::Future;

use lambda_runtime::{service_fn, Context, Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// The result every invocation returns.
pub const SUCCESS: &str = "Success";

/// Opaque invocation payload. Any JSON document, or `null`, is accepted and never inspected.
#[derive(Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Event(pub Option<Value>);

/// Handles one invocation. The context and payload are ignored, including any deadline.
pub fn handle(_context: &Context, _event: &Event) -> Result<&'static str, Error> {
    info!("Processing template handler");
    Ok(SUCCESS)
}

pub async fn function_handler(event: LambdaEvent<Event>) -> Result<String, Error> {
    let (payload, context) = event.into_parts();
    let result = handle(&context, &payload)?;
    Ok(result.to_string())
}

/// Something that accepts the handler and dispatches invocations to it until the process ends.
pub trait InvocationServer {
    fn serve<F, Fut>(self, handler: F) -> impl Future<Output = Result<(), Error>>
    where
        F: FnMut(LambdaEvent<Event>) -> Fut,
        Fut: Future<Output = Result<String, Error>>;
}

/// The AWS Lambda Runtime API, polled through `lambda_runtime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LambdaRuntime;

impl InvocationServer for LambdaRuntime {
    async fn serve<F, Fut>(self, handler: F) -> Result<(), Error>
    where
        F: FnMut(LambdaEvent<Event>) -> Fut,
        Fut: Future<Output = Result<String, Error>>,
    {
        lambda_runtime::run(service_fn(handler)).await
    }
}

/// Logs the startup line once, then hands control to `server`.
///
/// Errors raised by the server are returned as-is.
pub async fn start<S: InvocationServer>(server: S) -> Result<(), Error> {
    info!("Starting Lambda function...");
    server.serve(function_handler).await
}
