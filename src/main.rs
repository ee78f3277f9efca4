mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = cmd::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
