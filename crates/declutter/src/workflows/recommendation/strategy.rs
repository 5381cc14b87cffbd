use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::Factor;
use super::weights::{ActionScores, WeightTable};

/// Name reported when no strategy is active.
pub const DEFAULT_STRATEGY_NAME: &str = "Default";

/// Per-factor scaling. Factors without an entry scale by `1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<Factor, f64>")]
pub struct Multipliers(BTreeMap<Factor, f64>);

impl Multipliers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uniform(multiplier: f64) -> Self {
        Self(
            Factor::ordered()
                .into_iter()
                .map(|factor| (factor, multiplier))
                .collect(),
        )
    }

    pub fn with(mut self, factor: Factor, multiplier: f64) -> Self {
        self.0.insert(factor, multiplier);
        self
    }

    pub fn multiplier(&self, factor: Factor) -> f64 {
        self.0.get(&factor).copied().unwrap_or(1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Multipliers {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| Some((Factor::from_key(&key)?, value.as_f64()?)))
            .collect();
        Self(entries)
    }
}

impl From<Multipliers> for BTreeMap<Factor, f64> {
    fn from(multipliers: Multipliers) -> Self {
        multipliers.0
    }
}

/// Named scoring variant, e.g. an A/B arm that emphasises sentimental value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub name: String,
    #[serde(default)]
    pub multipliers: Multipliers,
}

impl StrategyConfig {
    pub fn new(name: impl Into<String>, multipliers: Multipliers) -> Self {
        Self {
            name: name.into(),
            multipliers,
        }
    }
}

/// Returns a copy of `weights` with every score scaled by its factor's multiplier and
/// rounded to one decimal place.
pub fn apply_strategy_multipliers(weights: &WeightTable, multipliers: &Multipliers) -> WeightTable {
    let mut scaled = WeightTable::new();
    for (factor, option, scores) in weights.iter() {
        let multiplier = multipliers.multiplier(factor);
        let mut adjusted = ActionScores::new();
        for (action, score) in scores.iter() {
            adjusted.insert(action, round_to_tenth(score * multiplier * 10.0));
        }
        scaled.insert(factor, option, adjusted);
    }
    scaled
}

/// Half-up rounding of an already ×10 value back to tenths, so `x.x5` boundaries land
/// where browser previews put them.
fn round_to_tenth(scaled_by_ten: f64) -> f64 {
    (scaled_by_ten + 0.5).floor() / 10.0
}
