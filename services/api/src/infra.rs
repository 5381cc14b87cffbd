use declutter::config::SettingsSourceConfig;
use declutter::error::AppError;
use declutter::workflows::recommendation::{
    FileSettingsStore, RecommendationEngine, RecommendationSettings, SettingsStore,
    StaticSettingsStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine plus the settings store it is configured from on every request.
pub(crate) struct RecommendationService {
    engine: RecommendationEngine,
    store: Arc<dyn SettingsStore>,
    fetch_timeout: Duration,
    stalled_fetches: Arc<AtomicUsize>,
}

const FETCH_RUNNING: u8 = 0;
const FETCH_DONE: u8 = 1;
const FETCH_ABANDONED: u8 = 2;

impl RecommendationService {
    pub(crate) fn new(
        engine: RecommendationEngine,
        store: Arc<dyn SettingsStore>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            engine,
            store,
            fetch_timeout,
            stalled_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn from_config(config: &SettingsSourceConfig) -> Self {
        let store: Arc<dyn SettingsStore> = match &config.path {
            Some(path) => Arc::new(FileSettingsStore::new(path.clone())),
            None => Arc::new(StaticSettingsStore::default()),
        };
        Self::new(RecommendationEngine::default(), store, config.fetch_timeout)
    }

    pub(crate) fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Current administrator settings. A failing or slow store yields the built-in
    /// defaults instead of an error. While a timed-out fetch is still blocked, no new
    /// fetch is started, so a hung store holds at most the threads it already has.
    pub(crate) async fn settings(&self) -> RecommendationSettings {
        if self.stalled_fetches.load(Ordering::Acquire) > 0 {
            warn!("settings store still blocked on an earlier fetch, using built-in defaults");
            return RecommendationSettings::default();
        }

        let store = Arc::clone(&self.store);
        let state = Arc::new(AtomicU8::new(FETCH_RUNNING));
        let fetch = {
            let state = Arc::clone(&state);
            let stalled = Arc::clone(&self.stalled_fetches);
            tokio::task::spawn_blocking(move || {
                let result = store.fetch();
                if state.swap(FETCH_DONE, Ordering::AcqRel) == FETCH_ABANDONED {
                    stalled.fetch_sub(1, Ordering::AcqRel);
                }
                result
            })
        };

        match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(Ok(Ok(settings))) => settings,
            Ok(Ok(Err(err))) => {
                warn!(%err, "settings fetch failed, using built-in defaults");
                RecommendationSettings::default()
            }
            Ok(Err(err)) => {
                warn!(%err, "settings fetch task aborted, using built-in defaults");
                RecommendationSettings::default()
            }
            Err(_) => {
                self.stalled_fetches.fetch_add(1, Ordering::AcqRel);
                let abandoned = state
                    .compare_exchange(
                        FETCH_RUNNING,
                        FETCH_ABANDONED,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    )
                    .is_ok();
                if !abandoned {
                    self.stalled_fetches.fetch_sub(1, Ordering::AcqRel);
                }
                warn!(
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "settings fetch timed out, using built-in defaults"
                );
                RecommendationSettings::default()
            }
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
