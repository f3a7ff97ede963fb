use trivia_api::{ApiConfig, ApiState, middleware::cors::cors_layer, tracing::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);

    // Connect and bring the schema up to date
    let pool = trivia_db::create_pool(&config.database_url, 10).await?;
    trivia_db::migrate(&pool).await?;

    let state = ApiState::new(&config, pool);

    let app = trivia_api::router::router()
        .with_state(state)
        .layer(cors_layer());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Server running on http://{}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
