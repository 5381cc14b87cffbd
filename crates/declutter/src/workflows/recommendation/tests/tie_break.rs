use super::common::*;
use crate::workflows::recommendation::domain::{ActionType, Factor};
use crate::workflows::recommendation::{
    RecommendationSettings, Thresholds, TieBreakOrder,
};

fn sell_donate_tie() -> RecommendationSettings {
    with_weights(table(&[(
        Factor::Usage,
        "yes",
        &[(ActionType::Sell, 2.0), (ActionType::Donate, 2.0)],
    )]))
}

fn reversed_order() -> TieBreakOrder {
    let mut order = ActionType::ordered().to_vec();
    order.reverse();
    TieBreakOrder::new(order).expect("reversed order is a permutation")
}

#[test]
fn standard_order_settles_ties() {
    let settings = sell_donate_tie();

    let report = engine().classify_with_details(&used_only(), None, Some(&settings));

    assert_eq!(report.recommendation, ActionType::Sell);
    assert_eq!(
        report.tied_recommendations,
        Some(vec![ActionType::Sell, ActionType::Donate])
    );
    assert_eq!(report.runner_up, ActionType::Donate);
    assert_eq!(report.margin, 0.0);
    assert!(report.close_call);
}

#[test]
fn custom_order_takes_precedence() {
    let mut settings = sell_donate_tie();
    settings.thresholds = Some(Thresholds {
        minimum_score_difference: 1.0,
        tie_break_order: reversed_order(),
    });

    let action = engine().classify(&used_only(), None, Some(&settings));

    assert_eq!(action, ActionType::Donate);
}

#[test]
fn factor_placement_does_not_change_tie_outcome() {
    let mut answers = used_only();
    answers.space = Some(crate::workflows::recommendation::SpaceAnswer::Yes);

    let first = with_weights(table(&[
        (Factor::Usage, "yes", &[(ActionType::Sell, 2.0)]),
        (Factor::Space, "yes", &[(ActionType::Donate, 2.0)]),
    ]));
    let second = with_weights(table(&[
        (Factor::Usage, "yes", &[(ActionType::Donate, 2.0)]),
        (Factor::Space, "yes", &[(ActionType::Sell, 2.0)]),
    ]));

    let first = engine().classify_with_details(&answers, None, Some(&first));
    let second = engine().classify_with_details(&answers, None, Some(&second));

    assert_eq!(first.recommendation, ActionType::Sell);
    assert_eq!(second.recommendation, ActionType::Sell);
    assert_eq!(first.scores, second.scores);
}

#[test]
fn malformed_order_from_settings_uses_standard_order() {
    let raw = serde_json::json!({
        "weights": { "usage": { "yes": { "sell": 2, "donate": 2 } } },
        "thresholds": { "tieBreakOrder": ["donate", "sell", "donate"] }
    });
    let settings: RecommendationSettings = serde_json::from_value(raw).expect("settings parse");

    let action = engine().classify(&used_only(), None, Some(&settings));

    assert_eq!(action, ActionType::Sell);
}

#[test]
fn unique_maximum_reports_runner_up_margin() {
    let report = engine().classify_with_details(&reading_lamp(), None, None);

    assert_eq!(report.tied_recommendations, None);
    // storage and accessible tie for second; accessible ranks first in the standard order
    assert_eq!(report.runner_up, ActionType::Accessible);
    assert_eq!(report.margin, 6.0);
    assert!(!report.close_call);
}
