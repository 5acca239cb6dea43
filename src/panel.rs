// Per-category panel: the tick state machine plus the background task that
// drives it on a fixed interval and publishes chart refreshes.

use crate::chart;
use crate::models::{Category, ChartSpec};
use crate::sampler;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tokio::time::{Duration, Instant, interval};
use tracing::Instrument;

/// Rate limit for "no receivers" logging (avoid logging every tick when no
/// one is on /ws/dashboard)
const NO_RECEIVERS_WARN_INTERVAL: Duration = Duration::from_secs(60);

/// Chart refresh published to dashboard stream subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartUpdate {
    pub category: Category,
    pub ticks: u64,
    pub chart: ChartSpec,
}

/// A panel either has not ticked yet or holds its last-rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Displaying(ChartSpec),
}

/// One category's view state. Each panel owns its tick counter and chart;
/// nothing is shared across panels.
pub struct Panel {
    category: Category,
    ticks: u64,
    state: PanelState,
}

impl Panel {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ticks: 0,
            state: PanelState::Idle,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Number of ticks fired so far. Starts at 0 and grows without bound for
    /// the lifetime of the panel.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Last-rendered chart, if the panel has ticked at least once.
    pub fn chart(&self) -> Option<&ChartSpec> {
        match &self.state {
            PanelState::Idle => None,
            PanelState::Displaying(chart) => Some(chart),
        }
    }

    /// One full refresh cycle: draw a fresh sample, map it, and replace the
    /// displayed chart. Returns the new chart description.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, now_ms: u64) -> ChartSpec {
        self.ticks += 1;
        let sample = sampler::generate(self.category, rng, now_ms);
        let chart = chart::chart_for(&sample);
        self.state = PanelState::Displaying(chart.clone());
        chart
    }
}

/// Current wall clock in epoch millis. A clock before the epoch logs a
/// warning and yields 0 rather than failing the tick.
pub fn now_epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                operation = "get_timestamp",
                "system time error"
            );
            0
        })
}

/// Channels and counters for a spawned panel task.
pub struct PanelDeps {
    pub tx: broadcast::Sender<ChartUpdate>,
    pub ws_dashboard_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Panel timing and logging config.
pub struct PanelConfig {
    pub tick_interval_ms: u64,
    /// How often to log panel stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Spawns the background task driving one category's panel. Each category
/// gets its own task and its own timer; ticks never synchronize across
/// panels.
pub fn spawn(
    category: Category,
    deps: PanelDeps,
    config: PanelConfig,
) -> tokio::task::JoinHandle<()> {
    let PanelDeps {
        tx,
        ws_dashboard_connections,
        mut shutdown_rx,
    } = deps;
    let PanelConfig {
        tick_interval_ms,
        stats_log_interval_secs,
    } = config;

    let panel_span =
        tracing::span!(tracing::Level::DEBUG, "panel", category = %category, tick_interval_ms);

    let run = async move {
        let mut panel = Panel::new(category);
        let mut tick = interval(Duration::from_millis(tick_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut last_no_receivers_warn: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let chart = panel.tick(&mut rand::thread_rng(), now_epoch_ms());
                    let update = ChartUpdate {
                        category,
                        ticks: panel.ticks(),
                        chart,
                    };

                    if tx.send(update).is_err() {
                        let should_warn = last_no_receivers_warn
                            .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_WARN_INTERVAL);
                        if should_warn {
                            tracing::debug!(
                                operation = "broadcast_chart",
                                "No active WebSocket clients; broadcast channel has no receivers"
                            );
                            last_no_receivers_warn = Some(Instant::now());
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Panel shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        ticks_total = panel.ticks(),
                        ws_dashboard_clients = ws_dashboard_connections
                            .load(std::sync::atomic::Ordering::Relaxed),
                        "panel stats"
                    );
                }
            }
        }
    };

    tokio::spawn(run.instrument(panel_span))
}
