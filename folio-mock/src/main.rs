use folio_mock::{AppState, Config, build_router, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        company_setting_ids = ?config.company_setting_ids,
        "Folio mock server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
