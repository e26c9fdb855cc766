use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use projections_backend::app;
use projections_backend::external::nutmeg::NutmegProvider;
use projections_backend::external::projections_provider::ProjectionsProvider;
use projections_backend::logging::{self, LoggingConfig};
use projections_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let provider: Arc<dyn ProjectionsProvider> = Arc::new(NutmegProvider::from_env());
    tracing::info!("📊 Using projections provider: Nutmeg");

    let state = AppState {
        projections_provider: provider,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Projections backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
