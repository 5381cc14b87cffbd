use super::common::*;
use crate::workflows::recommendation::domain::{
    ActionType, BudgetPriority, Factor, LivingSpace, MinimalistLevel, Profile, SentimentalStyle,
    ValueAnswer,
};
use crate::workflows::recommendation::{ActionScores, ProfileRule};

#[test]
fn extreme_minimalism_lowers_keep_and_raises_disposal() {
    let baseline = engine().classify_with_details(&reading_lamp(), None, None);
    let adjusted =
        engine().classify_with_details(&reading_lamp(), Some(&extreme_minimalist()), None);

    assert_eq!(adjusted.scores.get(ActionType::Keep), 8.0);
    assert!(adjusted.scores.get(ActionType::Keep) < baseline.scores.get(ActionType::Keep));
    assert!(adjusted.scores.get(ActionType::Discard) > baseline.scores.get(ActionType::Discard));
    assert!(adjusted.scores.get(ActionType::Donate) > baseline.scores.get(ActionType::Donate));
    assert_eq!(
        adjusted.breakdown.profile[&ProfileRule::ExtremeMinimalist],
        ActionScores::from_entries(&[
            (ActionType::Discard, 2.0),
            (ActionType::Donate, 2.0),
            (ActionType::Keep, -1.0),
        ])
    );
}

#[test]
fn independent_rules_all_fire() {
    let profile = Profile {
        minimalist_level: Some(MinimalistLevel::Maximalist),
        budget_priority: Some(BudgetPriority::NotImportant),
        sentimental_value: Some(SentimentalStyle::VerySentimental),
        living_space: Some(LivingSpace::Studio),
    };

    let report = engine().classify_with_details(&reading_lamp(), Some(&profile), None);

    let rules: Vec<ProfileRule> = report.breakdown.profile.keys().copied().collect();
    assert_eq!(
        rules,
        vec![
            ProfileRule::Maximalist,
            ProfileRule::BudgetIndifferent,
            ProfileRule::VerySentimental,
            ProfileRule::CompactLiving,
        ]
    );
    assert_eq!(report.scores.get(ActionType::Keep), 12.0);
    assert_eq!(report.scores.get(ActionType::Storage), 4.0);
    assert_eq!(report.scores.get(ActionType::Donate), 5.0);
    assert_eq!(report.recommendation, ActionType::Keep);
}

#[test]
fn budget_rule_requires_value_that_is_not_low() {
    let profile = Profile {
        budget_priority: Some(BudgetPriority::VeryImportant),
        ..Profile::default()
    };

    let low_value = engine().classify_with_details(&broken_kettle(), Some(&profile), None);
    assert!(!low_value
        .breakdown
        .profile
        .contains_key(&ProfileRule::BudgetConscious));

    let mut answers = broken_kettle();
    answers.value = Some(ValueAnswer::Medium);
    let medium_value = engine().classify_with_details(&answers, Some(&profile), None);
    assert_eq!(
        medium_value.breakdown.profile[&ProfileRule::BudgetConscious],
        ActionScores::from_entries(&[(ActionType::Sell, 2.0)])
    );

    answers.value = None;
    let unanswered = engine().classify_with_details(&answers, Some(&profile), None);
    assert!(unanswered
        .breakdown
        .profile
        .contains_key(&ProfileRule::BudgetConscious));
}

#[test]
fn empty_profile_matches_missing_profile() {
    let without = engine().classify_with_details(&broken_kettle(), None, None);
    let empty = engine().classify_with_details(&broken_kettle(), Some(&Profile::default()), None);

    assert_eq!(without, empty);
}

#[test]
fn keep_can_go_negative_without_being_clamped() {
    let report =
        engine().classify_with_details(&broken_kettle(), Some(&extreme_minimalist()), None);

    assert_eq!(report.scores.get(ActionType::Keep), -1.0);
    assert_eq!(report.scores.get(ActionType::Discard), 9.0);
    assert_eq!(report.scores.get(ActionType::Donate), 8.0);
    assert_eq!(report.recommendation, ActionType::Discard);
}

#[test]
fn all_negative_scores_pick_the_least_negative() {
    let settings = with_weights(table(&[(
        Factor::Usage,
        "yes",
        &[
            (ActionType::Keep, -3.0),
            (ActionType::Storage, -1.0),
            (ActionType::Accessible, -2.0),
            (ActionType::Sell, -5.0),
            (ActionType::Donate, -4.0),
            (ActionType::Discard, -6.0),
        ],
    )]));

    let report = engine().classify_with_details(&used_only(), None, Some(&settings));

    assert_eq!(report.recommendation, ActionType::Storage);
    assert_eq!(report.max_score, -1.0);
    assert_eq!(report.tied_recommendations, None);
}
