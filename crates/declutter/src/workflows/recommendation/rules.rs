use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{
    ActionType, Answers, BudgetPriority, Factor, LivingSpace, MinimalistLevel, Profile,
    SentimentalStyle, ValueAnswer,
};
use super::weights::{ActionScores, WeightTable};

/// Running total for every action. All six actions are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ActionType, f64>", into = "BTreeMap<ActionType, f64>")]
pub struct ScoreVector([f64; 6]);

impl ScoreVector {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, action: ActionType) -> f64 {
        self.0[action.index()]
    }

    pub fn add(&mut self, action: ActionType, delta: f64) {
        self.0[action.index()] += delta;
    }

    pub fn add_all(&mut self, scores: &ActionScores) {
        for (action, delta) in scores.iter() {
            self.add(action, delta);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionType, f64)> + '_ {
        ActionType::ordered()
            .into_iter()
            .map(|action| (action, self.get(action)))
    }
}

impl From<BTreeMap<ActionType, f64>> for ScoreVector {
    fn from(raw: BTreeMap<ActionType, f64>) -> Self {
        let mut scores = Self::zeroed();
        for (action, score) in raw {
            scores.add(action, score);
        }
        scores
    }
}

impl From<ScoreVector> for BTreeMap<ActionType, f64> {
    fn from(scores: ScoreVector) -> Self {
        scores.iter().collect()
    }
}

/// Named profile adjustment, used as the key in [`Breakdown::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileRule {
    ExtremeMinimalist,
    Maximalist,
    BudgetConscious,
    BudgetIndifferent,
    VerySentimental,
    CompactLiving,
}

/// Transparency record of every delta applied. Never consulted when deciding.
/// Serialized with one key per factor next to the `profile` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(flatten)]
    pub factors: BTreeMap<Factor, ActionScores>,
    pub profile: BTreeMap<ProfileRule, ActionScores>,
}

impl Breakdown {
    fn empty() -> Self {
        Self {
            factors: Factor::ordered()
                .into_iter()
                .map(|factor| (factor, ActionScores::new()))
                .collect(),
            profile: BTreeMap::new(),
        }
    }
}

/// Sums the weight-table contribution of every answered factor.
pub(crate) fn aggregate(answers: &Answers, weights: &WeightTable) -> (ScoreVector, Breakdown) {
    let mut scores = ScoreVector::zeroed();
    let mut breakdown = Breakdown::empty();

    for factor in Factor::ordered() {
        let Some(option) = answers.option_key(factor) else {
            continue;
        };
        let Some(contribution) = weights.lookup(factor, option) else {
            continue;
        };

        scores.add_all(contribution);
        breakdown.factors.insert(factor, contribution.clone());
    }

    (scores, breakdown)
}

/// Applies every profile rule whose attribute matches. Rules are independent.
pub(crate) fn adjust_for_profile(
    scores: &mut ScoreVector,
    breakdown: &mut Breakdown,
    answers: &Answers,
    profile: &Profile,
) {
    use ActionType::*;

    let mut apply = |rule: ProfileRule, deltas: &[(ActionType, f64)]| {
        let deltas = ActionScores::from_entries(deltas);
        scores.add_all(&deltas);
        breakdown.profile.insert(rule, deltas);
    };

    match profile.minimalist_level {
        Some(MinimalistLevel::Extreme) => apply(
            ProfileRule::ExtremeMinimalist,
            &[(Discard, 2.0), (Donate, 2.0), (Keep, -1.0)],
        ),
        Some(MinimalistLevel::Maximalist) => {
            apply(ProfileRule::Maximalist, &[(Keep, 2.0), (Storage, 1.0)])
        }
        _ => {}
    }

    match profile.budget_priority {
        Some(BudgetPriority::VeryImportant) if answers.value != Some(ValueAnswer::Low) => {
            apply(ProfileRule::BudgetConscious, &[(Sell, 2.0)])
        }
        Some(BudgetPriority::NotImportant) => {
            apply(ProfileRule::BudgetIndifferent, &[(Donate, 2.0)])
        }
        _ => {}
    }

    if profile.sentimental_value == Some(SentimentalStyle::VerySentimental) {
        apply(ProfileRule::VerySentimental, &[(Keep, 1.0), (Storage, 1.0)]);
    }

    if matches!(
        profile.living_space,
        Some(LivingSpace::SmallApartment | LivingSpace::Studio)
    ) {
        apply(ProfileRule::CompactLiving, &[(Storage, -1.0), (Donate, 1.0)]);
    }
}
