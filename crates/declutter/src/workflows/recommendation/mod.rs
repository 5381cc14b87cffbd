//! Disposition recommendations for household belongings.
//!
//! Scoring is a pure function of the questionnaire answers, the owner's profile and the
//! runtime settings: weights are looked up per answered factor, profile rules add fixed
//! deltas, and the highest score wins with ties settled by an explicit priority order.

pub mod domain;
pub mod labels;
mod policy;
pub mod reasoning;
mod rules;
pub mod settings;
pub mod strategy;
pub mod thresholds;
pub mod weights;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

pub use domain::{
    ActionType, Answers, BudgetPriority, ConditionAnswer, Factor, LivingSpace, MinimalistLevel,
    Profile, ReplaceAnswer, SentimentalAnswer, SentimentalStyle, SpaceAnswer, UsageAnswer,
    ValueAnswer,
};
pub use labels::{option_label, LabelCatalog};
pub use reasoning::generate_reasoning;
pub use rules::{Breakdown, ProfileRule, ScoreVector};
pub use settings::{
    fetch_or_default, FileSettingsStore, RecommendationSettings, SettingsError, SettingsStore,
    StaticSettingsStore,
};
pub use strategy::{apply_strategy_multipliers, Multipliers, StrategyConfig, DEFAULT_STRATEGY_NAME};
pub use thresholds::{Thresholds, TieBreakOrder, TieBreakOrderError};
pub use weights::{ActionScores, WeightTable};

use serde::{Deserialize, Serialize};

/// Built-in configuration, constructed once and handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineDefaults {
    pub weights: WeightTable,
    pub thresholds: Thresholds,
}

impl EngineDefaults {
    pub fn standard() -> Self {
        Self {
            weights: WeightTable::standard(),
            thresholds: Thresholds::standard(),
        }
    }
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stateless engine applying the defaults and any per-call settings to an item.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    defaults: EngineDefaults,
}

impl RecommendationEngine {
    pub fn new(defaults: EngineDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }

    pub fn classify(
        &self,
        answers: &Answers,
        profile: Option<&Profile>,
        settings: Option<&RecommendationSettings>,
    ) -> ActionType {
        self.evaluate(answers, profile, settings).recommendation
    }

    pub fn classify_with_details(
        &self,
        answers: &Answers,
        profile: Option<&Profile>,
        settings: Option<&RecommendationSettings>,
    ) -> RecommendationReport {
        let evaluation = self.evaluate(answers, profile, settings);
        let (runner_up, runner_up_score) =
            policy::runner_up(&evaluation.scores, evaluation.recommendation, evaluation.order);
        let margin = evaluation.max_score - runner_up_score;

        RecommendationReport {
            recommendation: evaluation.recommendation,
            scores: evaluation.scores,
            breakdown: evaluation.breakdown,
            max_score: evaluation.max_score,
            tied_recommendations: evaluation.tied,
            strategy_used: evaluation.strategy_used,
            runner_up,
            margin,
            close_call: margin < evaluation.minimum_score_difference,
        }
    }

    fn evaluate<'a>(
        &'a self,
        answers: &Answers,
        profile: Option<&Profile>,
        settings: Option<&'a RecommendationSettings>,
    ) -> Evaluation<'a> {
        let base_weights = settings
            .and_then(|settings| settings.weights.as_ref())
            .unwrap_or(&self.defaults.weights);
        let thresholds = settings
            .and_then(|settings| settings.thresholds.as_ref())
            .unwrap_or(&self.defaults.thresholds);
        let strategy = settings.and_then(|settings| settings.strategy_config.as_ref());

        let weights = match strategy {
            Some(strategy) => Cow::Owned(apply_strategy_multipliers(
                base_weights,
                &strategy.multipliers,
            )),
            None => Cow::Borrowed(base_weights),
        };

        let (mut scores, mut breakdown) = rules::aggregate(answers, &weights);
        if let Some(profile) = profile {
            rules::adjust_for_profile(&mut scores, &mut breakdown, answers, profile);
        }

        let resolution = policy::resolve(&scores, &thresholds.tie_break_order);
        tracing::debug!(
            item = answers.display_name(),
            recommendation = resolution.recommendation.key(),
            max_score = resolution.max_score,
            tied = resolution.tied.is_some(),
            "classified item"
        );

        Evaluation {
            recommendation: resolution.recommendation,
            scores,
            breakdown,
            max_score: resolution.max_score,
            tied: resolution.tied,
            strategy_used: strategy
                .map(|strategy| strategy.name.clone())
                .unwrap_or_else(|| DEFAULT_STRATEGY_NAME.to_string()),
            order: &thresholds.tie_break_order,
            minimum_score_difference: thresholds.minimum_score_difference,
        }
    }
}

struct Evaluation<'a> {
    recommendation: ActionType,
    scores: ScoreVector,
    breakdown: Breakdown,
    max_score: f64,
    tied: Option<Vec<ActionType>>,
    strategy_used: String,
    order: &'a TieBreakOrder,
    minimum_score_difference: f64,
}

/// Full scoring trail for the admin debug view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub recommendation: ActionType,
    pub scores: ScoreVector,
    pub breakdown: Breakdown,
    pub max_score: f64,
    pub tied_recommendations: Option<Vec<ActionType>>,
    pub strategy_used: String,
    pub runner_up: ActionType,
    pub margin: f64,
    pub close_call: bool,
}

/// Classifies with the built-in defaults. Equivalent to a standard engine's `classify`.
pub fn classify(
    answers: &Answers,
    profile: Option<&Profile>,
    settings: Option<&RecommendationSettings>,
) -> ActionType {
    RecommendationEngine::default().classify(answers, profile, settings)
}

/// Classifies with the built-in defaults and returns the full scoring trail.
pub fn classify_with_details(
    answers: &Answers,
    profile: Option<&Profile>,
    settings: Option<&RecommendationSettings>,
) -> RecommendationReport {
    RecommendationEngine::default().classify_with_details(answers, profile, settings)
}
