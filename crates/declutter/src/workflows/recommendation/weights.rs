use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{ActionType, Factor};

/// Sparse per-action contribution. Actions that are absent contribute zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<ActionType, f64>"
)]
pub struct ActionScores(BTreeMap<ActionType, f64>);

impl ActionScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[(ActionType, f64)]) -> Self {
        Self(entries.iter().copied().collect())
    }

    pub fn get(&self, action: ActionType) -> Option<f64> {
        self.0.get(&action).copied()
    }

    pub fn insert(&mut self, action: ActionType, score: f64) {
        self.0.insert(action, score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionType, f64)> + '_ {
        self.0.iter().map(|(action, score)| (*action, *score))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, Value>> for ActionScores {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| Some((ActionType::from_key(&key)?, value.as_f64()?)))
            .collect();
        Self(entries)
    }
}

impl From<ActionScores> for BTreeMap<ActionType, f64> {
    fn from(scores: ActionScores) -> Self {
        scores.0
    }
}

pub type FactorWeights = BTreeMap<String, ActionScores>;

/// Nested `factor -> option -> action -> score` lookup.
///
/// Options are keyed by their questionnaire string so that tables loaded from the
/// settings store can carry entries the engine never consults. Unknown factors and
/// malformed option blocks are dropped while deserializing rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<Factor, FactorWeights>"
)]
pub struct WeightTable {
    factors: BTreeMap<Factor, FactorWeights>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in table used when no weights are supplied.
    pub fn standard() -> Self {
        use ActionType::*;

        let mut table = Self::new();

        table.set(Factor::Usage, "yes", &[(Keep, 3.0), (Accessible, 2.0)]);
        table.set(
            Factor::Usage,
            "rarely",
            &[(Keep, 1.0), (Storage, 2.0), (Sell, 1.0), (Donate, 1.0)],
        );
        table.set(Factor::Usage, "no", &[(Sell, 1.0), (Donate, 2.0), (Discard, 1.0)]);

        table.set(Factor::Sentimental, "high", &[(Keep, 3.0), (Storage, 2.0)]);
        table.set(Factor::Sentimental, "some", &[(Keep, 1.0), (Storage, 1.0)]);
        table.set(
            Factor::Sentimental,
            "none",
            &[(Sell, 1.0), (Donate, 1.0), (Discard, 1.0)],
        );

        table.set(
            Factor::Condition,
            "excellent",
            &[(Keep, 1.0), (Sell, 2.0), (Donate, 1.0)],
        );
        table.set(
            Factor::Condition,
            "good",
            &[(Keep, 1.0), (Sell, 1.0), (Donate, 1.0)],
        );
        table.set(Factor::Condition, "fair", &[(Donate, 1.0)]);
        table.set(Factor::Condition, "poor", &[(Discard, 3.0)]);

        table.set(Factor::Value, "high", &[(Keep, 1.0), (Sell, 3.0)]);
        table.set(Factor::Value, "medium", &[(Sell, 1.0), (Donate, 1.0)]);
        table.set(Factor::Value, "low", &[(Donate, 1.0), (Discard, 1.0)]);

        table.set(Factor::Replaceability, "easy", &[(Donate, 1.0), (Discard, 1.0)]);
        table.set(Factor::Replaceability, "moderate", &[(Storage, 1.0)]);
        table.set(Factor::Replaceability, "difficult", &[(Keep, 2.0), (Storage, 1.0)]);

        table.set(Factor::Space, "yes", &[(Keep, 2.0), (Accessible, 1.0)]);
        table.set(Factor::Space, "no", &[(Storage, 2.0), (Donate, 1.0)]);

        table
    }

    pub fn set(&mut self, factor: Factor, option: &str, entries: &[(ActionType, f64)]) {
        self.factors
            .entry(factor)
            .or_default()
            .insert(option.to_string(), ActionScores::from_entries(entries));
    }

    pub fn insert(&mut self, factor: Factor, option: impl Into<String>, scores: ActionScores) {
        self.factors
            .entry(factor)
            .or_default()
            .insert(option.into(), scores);
    }

    pub fn lookup(&self, factor: Factor, option: &str) -> Option<&ActionScores> {
        self.factors.get(&factor)?.get(option)
    }

    pub fn factor(&self, factor: Factor) -> Option<&FactorWeights> {
        self.factors.get(&factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, &str, &ActionScores)> + '_ {
        self.factors.iter().flat_map(|(factor, options)| {
            options
                .iter()
                .map(move |(option, scores)| (*factor, option.as_str(), scores))
        })
    }
}

impl From<BTreeMap<String, Value>> for WeightTable {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut factors = BTreeMap::new();
        for (key, value) in raw {
            let Some(factor) = Factor::from_key(&key) else {
                tracing::debug!(factor = %key, "ignoring unknown factor in weight table");
                continue;
            };
            let options = match serde_json::from_value::<BTreeMap<String, Value>>(value) {
                Ok(options) => options,
                Err(err) => {
                    tracing::debug!(factor = %key, %err, "ignoring malformed factor weights");
                    continue;
                }
            };
            let entry: &mut FactorWeights = factors.entry(factor).or_default();
            for (option, scores) in options {
                match serde_json::from_value::<ActionScores>(scores) {
                    Ok(scores) => {
                        entry.insert(option, scores);
                    }
                    Err(err) => {
                        tracing::debug!(
                            factor = %key,
                            %option,
                            %err,
                            "ignoring malformed option weights"
                        );
                    }
                }
            }
        }
        Self { factors }
    }
}

impl From<WeightTable> for BTreeMap<Factor, FactorWeights> {
    fn from(table: WeightTable) -> Self {
        table.factors
    }
}
