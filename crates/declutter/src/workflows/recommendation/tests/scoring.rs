use super::common::*;
use crate::workflows::recommendation::domain::{ActionType, Answers, Factor};
use crate::workflows::recommendation::{classify, classify_with_details, ActionScores};

#[test]
fn reading_lamp_is_kept_with_expected_scores() {
    let report = classify_with_details(&reading_lamp(), None, None);

    assert_eq!(report.recommendation, ActionType::Keep);
    assert_eq!(report.scores.get(ActionType::Keep), 9.0);
    assert_eq!(report.scores.get(ActionType::Storage), 3.0);
    assert_eq!(report.scores.get(ActionType::Accessible), 3.0);
    assert_eq!(report.scores.get(ActionType::Sell), 2.0);
    assert_eq!(report.scores.get(ActionType::Donate), 2.0);
    assert_eq!(report.scores.get(ActionType::Discard), 0.0);
    assert_eq!(report.max_score, 9.0);
    assert_eq!(report.tied_recommendations, None);
    assert_eq!(report.strategy_used, "Default");
}

#[test]
fn unanswered_questionnaire_scores_every_action_at_zero() {
    let report = engine().classify_with_details(&Answers::named("Mystery box"), None, None);

    assert_eq!(report.scores.iter().count(), 6);
    assert!(report.scores.iter().all(|(_, score)| score == 0.0));
    assert_eq!(report.breakdown.factors.len(), 6);
    assert!(report
        .breakdown
        .factors
        .values()
        .all(|contribution| contribution.is_empty()));
    assert!(report.breakdown.profile.is_empty());
    assert_eq!(
        report.tied_recommendations,
        Some(ActionType::ordered().to_vec())
    );
    assert_eq!(report.recommendation, ActionType::Keep);
}

#[test]
fn serialized_scores_always_carry_six_actions() {
    let report = engine().classify_with_details(&used_only(), None, None);

    let json = serde_json::to_value(&report).expect("report serializes");
    let scores = json["scores"].as_object().expect("scores object");
    assert_eq!(scores.len(), 6);
    assert_eq!(scores["discard"], serde_json::json!(0.0));
    assert!(json["tiedRecommendations"].is_null());
}

#[test]
fn breakdown_lists_factors_beside_profile_record() {
    let report = engine().classify_with_details(&reading_lamp(), Some(&extreme_minimalist()), None);

    let json = serde_json::to_value(&report.breakdown).expect("breakdown serializes");
    let record = json.as_object().expect("breakdown object");
    assert_eq!(record.len(), 7);
    assert_eq!(json["usage"]["keep"], serde_json::json!(3.0));
    assert_eq!(json["profile"]["extremeMinimalist"]["keep"], serde_json::json!(-1.0));
    assert!(record.get("factors").is_none());

    let restored: crate::workflows::recommendation::Breakdown =
        serde_json::from_value(json).expect("breakdown deserializes");
    assert_eq!(restored, report.breakdown);
}

#[test]
fn breakdown_keeps_each_factor_contribution_separate() {
    let report = engine().classify_with_details(&reading_lamp(), None, None);

    assert_eq!(
        report.breakdown.factors[&Factor::Usage],
        ActionScores::from_entries(&[(ActionType::Keep, 3.0), (ActionType::Accessible, 2.0)])
    );
    assert_eq!(
        report.breakdown.factors[&Factor::Value],
        ActionScores::from_entries(&[(ActionType::Sell, 1.0), (ActionType::Donate, 1.0)])
    );
    assert_eq!(
        report.breakdown.factors[&Factor::Replaceability],
        ActionScores::from_entries(&[(ActionType::Storage, 1.0)])
    );
}

#[test]
fn factors_missing_from_custom_weights_contribute_nothing() {
    let weights = table(&[(Factor::Usage, "yes", &[(ActionType::Sell, 5.0)])]);
    let settings = with_weights(weights);

    let report = engine().classify_with_details(&reading_lamp(), None, Some(&settings));

    assert_eq!(report.recommendation, ActionType::Sell);
    assert_eq!(report.max_score, 5.0);
    assert_eq!(report.scores.get(ActionType::Keep), 0.0);
    assert!(report.breakdown.factors[&Factor::Sentimental].is_empty());
}

#[test]
fn classify_agrees_with_detailed_report() {
    let settings = with_weights(table(&[
        (Factor::Usage, "yes", &[(ActionType::Sell, 2.0), (ActionType::Donate, 2.0)]),
        (Factor::Space, "no", &[(ActionType::Storage, 4.0)]),
    ]));
    let profile = extreme_minimalist();

    for answers in [reading_lamp(), broken_kettle(), used_only(), Answers::default()] {
        for settings in [None, Some(&settings)] {
            for profile in [None, Some(&profile)] {
                let action = classify(&answers, profile, settings);
                let report = classify_with_details(&answers, profile, settings);
                assert_eq!(action, report.recommendation, "answers {answers:?}");
            }
        }
    }
}

#[test]
fn answer_casing_does_not_change_the_outcome() {
    let typed: Answers = serde_json::from_value(serde_json::json!({
        "name": "Reading lamp",
        "used": "Yes",
        "sentimental": " HIGH ",
        "condition": "Good",
        "value": "medium",
        "replace": "Moderate",
        "space": "YES"
    }))
    .expect("answers parse");

    let mut entered = Answers::named("Reading lamp");
    for (factor, raw) in Factor::ordered()
        .into_iter()
        .zip(["YES", "High", "good", " Medium", "moderate", "Yes"])
    {
        entered.set_option(factor, raw);
    }

    assert_eq!(typed, reading_lamp());
    assert_eq!(entered, typed);
    assert_eq!(
        classify_with_details(&typed, None, None),
        classify_with_details(&reading_lamp(), None, None)
    );
}
