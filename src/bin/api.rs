pub use product_summary::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    product_summary::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
