use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::strategy::StrategyConfig;
use super::thresholds::Thresholds;
use super::weights::WeightTable;

/// Runtime overrides for the engine. Each present field replaces the matching default
/// wholesale; absent fields keep their defaults independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSettings", rename_all = "camelCase")]
pub struct RecommendationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_config: Option<StrategyConfig>,
}

impl RecommendationSettings {
    pub fn is_empty(&self) -> bool {
        self.weights.is_none() && self.thresholds.is_none() && self.strategy_config.is_none()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    #[serde(default)]
    weights: Option<Value>,
    #[serde(default)]
    thresholds: Option<Value>,
    #[serde(default)]
    strategy_config: Option<Value>,
}

impl From<RawSettings> for RecommendationSettings {
    fn from(raw: RawSettings) -> Self {
        Self {
            weights: parse_section("weights", raw.weights),
            thresholds: parse_section("thresholds", raw.thresholds),
            strategy_config: parse_section("strategyConfig", raw.strategy_config),
        }
    }
}

fn parse_section<T: DeserializeOwned>(section: &'static str, raw: Option<Value>) -> Option<T> {
    let raw = raw.filter(|value| !value.is_null())?;
    match serde_json::from_value(raw) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(section, %err, "discarding malformed settings section, using default");
            None
        }
    }
}

/// Source of administrator-tuned settings, such as a file or a remote settings service.
pub trait SettingsStore: Send + Sync {
    fn fetch(&self) -> Result<RecommendationSettings, SettingsError>;
}

/// Error enumeration for settings retrieval failures.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// Reads settings from a JSON document on disk on every fetch, so edits apply without a
/// restart.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn fetch(&self) -> Result<RecommendationSettings, SettingsError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }
}

/// Fixed settings, used when no store is configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsStore {
    settings: RecommendationSettings,
}

impl StaticSettingsStore {
    pub fn new(settings: RecommendationSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for StaticSettingsStore {
    fn fetch(&self) -> Result<RecommendationSettings, SettingsError> {
        Ok(self.settings.clone())
    }
}

/// Fetches settings, substituting the built-in defaults when the store fails.
pub fn fetch_or_default<S: SettingsStore + ?Sized>(store: &S) -> RecommendationSettings {
    match store.fetch() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(%err, "settings fetch failed, using built-in defaults");
            RecommendationSettings::default()
        }
    }
}
