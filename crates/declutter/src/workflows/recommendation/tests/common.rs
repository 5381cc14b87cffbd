use crate::workflows::recommendation::domain::{
    ActionType, Answers, ConditionAnswer, Factor, MinimalistLevel, Profile, ReplaceAnswer,
    SentimentalAnswer, SpaceAnswer, UsageAnswer, ValueAnswer,
};
use crate::workflows::recommendation::{
    RecommendationEngine, RecommendationSettings, WeightTable,
};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::default()
}

/// Regularly used, cherished, good condition: the canonical "keep" item.
pub(super) fn reading_lamp() -> Answers {
    Answers {
        name: "Reading lamp".to_string(),
        used: Some(UsageAnswer::Yes),
        sentimental: Some(SentimentalAnswer::High),
        condition: Some(ConditionAnswer::Good),
        value: Some(ValueAnswer::Medium),
        replace: Some(ReplaceAnswer::Moderate),
        space: Some(SpaceAnswer::Yes),
    }
}

/// Unused, worthless, broken.
pub(super) fn broken_kettle() -> Answers {
    Answers {
        name: "Broken kettle".to_string(),
        used: Some(UsageAnswer::No),
        sentimental: Some(SentimentalAnswer::NoAttachment),
        condition: Some(ConditionAnswer::Poor),
        value: Some(ValueAnswer::Low),
        replace: Some(ReplaceAnswer::Easy),
        space: Some(SpaceAnswer::No),
    }
}

pub(super) fn used_only() -> Answers {
    Answers {
        name: "Cast iron pan".to_string(),
        used: Some(UsageAnswer::Yes),
        ..Answers::default()
    }
}

pub(super) fn extreme_minimalist() -> Profile {
    Profile {
        minimalist_level: Some(MinimalistLevel::Extreme),
        ..Profile::default()
    }
}

pub(super) fn table(entries: &[(Factor, &str, &[(ActionType, f64)])]) -> WeightTable {
    let mut table = WeightTable::new();
    for (factor, option, scores) in entries {
        table.set(*factor, option, scores);
    }
    table
}

pub(super) fn with_weights(weights: WeightTable) -> RecommendationSettings {
    RecommendationSettings {
        weights: Some(weights),
        ..RecommendationSettings::default()
    }
}
