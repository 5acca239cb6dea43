use anyhow::Result;
use cloudboard::*;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let (tx, _) =
        broadcast::channel::<panel::ChartUpdate>(app_config.publishing.broadcast_capacity);

    let ws_dashboard_connections = Arc::new(AtomicUsize::new(0));

    // One worker, one timer, one shutdown line per category.
    let mut shutdown_txs = Vec::new();
    let mut panel_handles = Vec::new();
    for category in models::CATEGORIES {
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        shutdown_txs.push(shutdown_tx);
        panel_handles.push(panel::spawn(
            category,
            panel::PanelDeps {
                tx: tx.clone(),
                ws_dashboard_connections: ws_dashboard_connections.clone(),
                shutdown_rx,
            },
            panel::PanelConfig {
                tick_interval_ms: app_config.dashboard.tick_interval_ms,
                stats_log_interval_secs: app_config.dashboard.stats_log_interval_secs,
            },
        ));
    }

    let app = routes::app(tx, ws_dashboard_connections, app_config.clone());
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let in_container = std::path::Path::new("/.dockerenv").exists()
        || std::env::var("CONTAINER").as_deref() == Ok("1");

    if in_container {
        // In Docker: run server until error or SIGTERM (no signal handler; avoids immediate exit)
        axum::serve(listener, app).await?;
    } else {
        tokio::select! {
            result = axum::serve(listener, app) => {
                result?;
            }
            _ = async {
                #[cfg(unix)]
                {
                    let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                        Ok(s) => s,
                        Err(_) => {
                            let _ = tokio::signal::ctrl_c().await;
                            return;
                        }
                    };
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {}
                        _ = sigterm.recv() => {}
                    }
                }
                #[cfg(not(unix))]
                {
                    tokio::signal::ctrl_c().await
                }
            } => {
                tracing::info!("Received shutdown signal");
                for shutdown_tx in shutdown_txs {
                    let _ = shutdown_tx.send(());
                }
                for handle in panel_handles {
                    let _ = handle.await;
                }
            }
        }
    }

    Ok(())
}
