use mock_server::{Item, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let store = Store::with_items(vec![
        Item::pending("Write the list command"),
        Item::completed("Set up the mock server"),
        Item::pending("Align the output columns"),
    ]);
    tracing::info!(%addr, "listening");
    mock_server::serve(listener, mock_server::app(store)).await
}
