use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::ActionType;

/// Priority list used to settle ties. Always a permutation of every [`ActionType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TieBreakOrder(Vec<ActionType>);

impl TieBreakOrder {
    pub fn standard() -> Self {
        Self(vec![
            ActionType::Keep,
            ActionType::Accessible,
            ActionType::Storage,
            ActionType::Sell,
            ActionType::Donate,
            ActionType::Discard,
        ])
    }

    pub fn new(order: Vec<ActionType>) -> Result<Self, TieBreakOrderError> {
        if order.len() != ActionType::ordered().len() {
            return Err(TieBreakOrderError::WrongLength(order.len()));
        }
        for action in ActionType::ordered() {
            if !order.contains(&action) {
                return Err(TieBreakOrderError::Missing(action));
            }
        }
        Ok(Self(order))
    }

    /// Parses a raw list of action keys, substituting the standard order when the list is
    /// not a full permutation.
    pub fn parse_or_standard(raw: &[String]) -> Self {
        let parsed: Option<Vec<ActionType>> =
            raw.iter().map(|key| ActionType::from_key(key)).collect();

        let result = match parsed {
            Some(order) => Self::new(order),
            None => Err(TieBreakOrderError::UnknownAction),
        };

        match result {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!(%err, ?raw, "malformed tie-break order, using standard order");
                Self::standard()
            }
        }
    }

    pub fn as_slice(&self) -> &[ActionType] {
        &self.0
    }
}

impl Default for TieBreakOrder {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for TieBreakOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let keys: Vec<String> = match raw {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(key) => key,
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self::parse_or_standard(&keys))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TieBreakOrderError {
    #[error("tie-break order lists {0} actions, expected 6")]
    WrongLength(usize),
    #[error("tie-break order omits {0:?}")]
    Missing(ActionType),
    #[error("tie-break order names an unknown action")]
    UnknownAction,
}

/// Decision thresholds loaded alongside the weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    #[serde(
        default = "default_minimum_score_difference",
        deserialize_with = "minimum_score_difference_or_default"
    )]
    pub minimum_score_difference: f64,
    #[serde(default)]
    pub tie_break_order: TieBreakOrder,
}

impl Thresholds {
    pub fn standard() -> Self {
        Self {
            minimum_score_difference: default_minimum_score_difference(),
            tie_break_order: TieBreakOrder::standard(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_minimum_score_difference() -> f64 {
    1.0
}

/// Non-numeric values fall back to the default without discarding the tie-break order.
fn minimum_score_difference_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_f64().unwrap_or_else(|| {
        tracing::warn!(value = %raw, "minimumScoreDifference is not a number, using default");
        default_minimum_score_difference()
    }))
}
