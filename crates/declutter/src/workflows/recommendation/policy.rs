use super::domain::ActionType;
use super::rules::ScoreVector;
use super::thresholds::TieBreakOrder;

/// Outcome of the max-score selection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolution {
    pub recommendation: ActionType,
    pub max_score: f64,
    pub tied: Option<Vec<ActionType>>,
}

pub(crate) fn resolve(scores: &ScoreVector, order: &TieBreakOrder) -> Resolution {
    let candidates = ActionType::ordered();
    let (recommendation, max_score, tied) = select(scores, &candidates, order);
    Resolution {
        recommendation,
        max_score,
        tied: (tied.len() > 1).then_some(tied),
    }
}

/// Best action other than `winner`, settled with the same tie-break order.
pub(crate) fn runner_up(
    scores: &ScoreVector,
    winner: ActionType,
    order: &TieBreakOrder,
) -> (ActionType, f64) {
    let candidates: Vec<ActionType> = ActionType::ordered()
        .into_iter()
        .filter(|action| *action != winner)
        .collect();
    let (action, score, _) = select(scores, &candidates, order);
    (action, score)
}

fn select(
    scores: &ScoreVector,
    candidates: &[ActionType],
    order: &TieBreakOrder,
) -> (ActionType, f64, Vec<ActionType>) {
    let mut max_score = f64::NEG_INFINITY;
    for action in candidates {
        let score = scores.get(*action);
        if score > max_score {
            max_score = score;
        }
    }

    let tied: Vec<ActionType> = candidates
        .iter()
        .copied()
        .filter(|action| scores.get(*action) == max_score)
        .collect();

    if let [only] = tied.as_slice() {
        return (*only, max_score, tied);
    }

    for action in order.as_slice() {
        if tied.contains(action) {
            return (*action, max_score, tied);
        }
    }

    // Only reachable when every score is NaN; the order is a validated permutation.
    let fallback = tied.first().copied().unwrap_or(candidates[0]);
    (fallback, max_score, tied)
}
