use serde::Serialize;

use super::domain::{ActionType, Factor};

/// Human-readable text for an option key of `factor`.
pub fn option_label(factor: Factor, option: &str) -> Option<&'static str> {
    let label = match (factor, option) {
        (Factor::Usage, "yes") => "Yes, regularly",
        (Factor::Usage, "rarely") => "Rarely",
        (Factor::Usage, "no") => "No",
        (Factor::Sentimental, "high") => "High",
        (Factor::Sentimental, "some") => "Some",
        (Factor::Sentimental, "none") => "None",
        (Factor::Condition, "excellent") => "Excellent",
        (Factor::Condition, "good") => "Good",
        (Factor::Condition, "fair") => "Fair",
        (Factor::Condition, "poor") => "Poor",
        (Factor::Value, "high") => "High (worth selling)",
        (Factor::Value, "medium") => "Medium",
        (Factor::Value, "low") => "Low",
        (Factor::Replaceability, "easy") => "Easy to replace",
        (Factor::Replaceability, "moderate") => "Moderately easy",
        (Factor::Replaceability, "difficult") => "Difficult or impossible",
        (Factor::Space, "yes") => "Yes",
        (Factor::Space, "no") => "No",
        _ => return None,
    };
    Some(label)
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelEntry {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorLabels {
    pub key: &'static str,
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<LabelEntry>,
}

/// Display metadata for presentation layers. Carries no decision behavior.
#[derive(Debug, Clone, Serialize)]
pub struct LabelCatalog {
    pub actions: Vec<LabelEntry>,
    pub factors: Vec<FactorLabels>,
}

impl LabelCatalog {
    pub fn build() -> Self {
        let actions = ActionType::ordered()
            .into_iter()
            .map(|action| LabelEntry {
                key: action.key(),
                label: action.label(),
            })
            .collect();

        let factors = Factor::ordered()
            .into_iter()
            .map(|factor| FactorLabels {
                key: factor.key(),
                field: factor.answer_field(),
                label: factor.label(),
                options: factor
                    .option_keys()
                    .iter()
                    .copied()
                    .filter_map(|key| {
                        option_label(factor, key).map(|label| LabelEntry { key, label })
                    })
                    .collect(),
            })
            .collect();

        Self { actions, factors }
    }
}
