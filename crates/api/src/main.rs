use kyc_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kyc_observability::init();

    let config = ApiConfig::from_env()?;
    let app = kyc_api::app::build_app(config.service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        conflict_retries = config.service.conflict_retries,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
