use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use murmur::application::services::{ModelHandle, TranscriptionService};
use murmur::infrastructure::audio::{FfmpegProbe, SpeechModelFactory};
use murmur::infrastructure::enhancement::PassthroughEnhancer;
use murmur::infrastructure::observability::{TracingConfig, init_tracing};
use murmur::infrastructure::storage::LocalUploadStore;
use murmur::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let upload_store = Arc::new(
        LocalUploadStore::new(PathBuf::from(&settings.storage.upload_dir))
            .context("failed to prepare upload directory")?,
    );

    let transcription = &settings.transcription;
    let model = Arc::new(ModelHandle::new(Arc::new(SpeechModelFactory::new(
        transcription.clone(),
    ))));
    let decoder_probe = Arc::new(FfmpegProbe::new(transcription.decoder_binary.clone()));
    let staging_dir = transcription
        .staging_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&staging_dir).context("failed to prepare staging directory")?;

    tracing::info!(
        environment = %environment,
        provider = ?transcription.provider,
        model = %transcription.model,
        upload_dir = %settings.storage.upload_dir,
        staging_dir = %staging_dir.display(),
        "Configuration loaded"
    );

    let transcription_service = Arc::new(TranscriptionService::new(
        model,
        decoder_probe,
        staging_dir,
    ));

    let state = AppState {
        upload_store,
        transcription_service,
        enhancer: Arc::new(PassthroughEnhancer),
        max_upload_bytes: settings.server.max_upload_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
