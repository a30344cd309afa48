use std::path::PathBuf;

use tokio::net::TcpListener;

use video_gateway::config::loader;
use video_gateway::observability::logging;
use video_gateway::{ForwardServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = loader::resolve_config(config_path.as_deref())?;

    logging::init(&config.observability.log_level);

    tracing::info!("video-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.forwarder.bind_address,
        backend_origin = %config.forwarder.backend_origin,
        api_base_url = %config.client.base_url,
        request_timeout_secs = config.forwarder.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.forwarder.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let server = ForwardServer::new(&config.forwarder);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
