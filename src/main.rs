use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use maintenance_advisor::config::environment::EnvironmentConfig;
use maintenance_advisor::{bind_listener, create_app};
use maintenance_advisor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🔧 Maintenance Advisor - Sugerencias de mantenimiento preventivo");
    info!("================================================================");
    info!("🌍 Entorno: {}", config.environment);
    info!("🚗 Km mensual por defecto: {}", config.average_monthly_km);
    if config.is_development() {
        info!("🛠️ Modo desarrollo: log en nivel {}", config.log_level);
    }
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se acepta cualquier origen");
    }

    let listener = bind_listener(&config).await?;
    let addr = listener.local_addr()?;
    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/profiles/:category - Calendario preventivo");
    info!("   POST /api/suggestions - Detalle de vehículo con sugerencias");
    info!("   POST /api/dashboard - Resumen de flota");
    info!("   POST /api/certificates - Contenido del certificado digital");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
