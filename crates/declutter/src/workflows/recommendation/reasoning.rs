//! Fixed-template justifications for a chosen action.
//!
//! The generator only sees the action, the answers and the profile. It never re-scores,
//! so the admin debug view and the item editor render the same sentence for the same
//! inputs.

use super::domain::{
    ActionType, Answers, BudgetPriority, ConditionAnswer, LivingSpace, MinimalistLevel, Profile,
    ReplaceAnswer, SentimentalAnswer, SentimentalStyle, SpaceAnswer, UsageAnswer, ValueAnswer,
};

pub fn generate_reasoning(action: ActionType, answers: &Answers, profile: Option<&Profile>) -> String {
    let name = answers.display_name();
    let profile = profile.cloned().unwrap_or_default();
    let mut sentences = vec![opening(action, name)];

    match action {
        ActionType::Keep => {
            if answers.used == Some(UsageAnswer::Yes) {
                sentences.push("You use it regularly.".to_string());
            }
            if answers.sentimental == Some(SentimentalAnswer::High) {
                sentences.push("It carries strong sentimental value.".to_string());
            }
            if answers.replace == Some(ReplaceAnswer::Difficult) {
                sentences.push("It would be hard to replace.".to_string());
            }
            if profile.minimalist_level == Some(MinimalistLevel::Maximalist) {
                sentences.push("Your style leaves room for the things you love.".to_string());
            }
            if profile.sentimental_value == Some(SentimentalStyle::VerySentimental) {
                sentences.push("You value keeping meaningful things close.".to_string());
            }
        }
        ActionType::Storage => {
            if matches!(
                answers.sentimental,
                Some(SentimentalAnswer::High | SentimentalAnswer::Partial)
            ) {
                sentences.push("It holds sentimental value worth preserving.".to_string());
            }
            if answers.used == Some(UsageAnswer::Rarely) {
                sentences.push("You only reach for it occasionally.".to_string());
            }
            if answers.space == Some(SpaceAnswer::No) {
                sentences.push("Storing it frees up everyday living space.".to_string());
            }
            if profile.minimalist_level == Some(MinimalistLevel::Maximalist) {
                sentences.push("Your style favors holding on to things you may want later.".to_string());
            }
        }
        ActionType::Accessible => {
            if answers.used == Some(UsageAnswer::Yes) {
                sentences.push("Frequent use means it should be within easy reach.".to_string());
            }
            if answers.space == Some(SpaceAnswer::Yes) {
                sentences.push("You already have room for it.".to_string());
            }
        }
        ActionType::Sell => {
            if answers.value == Some(ValueAnswer::High) {
                sentences.push("It still holds significant resale value.".to_string());
            }
            if matches!(
                answers.condition,
                Some(ConditionAnswer::Excellent | ConditionAnswer::Good)
            ) {
                sentences.push("Its condition makes it attractive to buyers.".to_string());
            }
            if profile.budget_priority == Some(BudgetPriority::VeryImportant) {
                sentences.push("Selling it supports your budget goals.".to_string());
            }
        }
        ActionType::Donate => {
            if matches!(
                answers.condition,
                Some(ConditionAnswer::Good | ConditionAnswer::Fair)
            ) {
                sentences.push("It is in good enough shape to help someone else.".to_string());
            }
            if answers.used == Some(UsageAnswer::No) {
                sentences.push("You no longer use it.".to_string());
            }
            if profile.budget_priority == Some(BudgetPriority::NotImportant) {
                sentences.push("Giving it away is simpler than selling it.".to_string());
            }
            if matches!(
                profile.living_space,
                Some(LivingSpace::SmallApartment | LivingSpace::Studio)
            ) {
                sentences.push("Letting it go frees up room in a compact home.".to_string());
            }
            if profile.minimalist_level == Some(MinimalistLevel::Extreme) {
                sentences.push("Letting it go fits your minimalist goals.".to_string());
            }
        }
        ActionType::Discard => {
            if answers.condition == Some(ConditionAnswer::Poor) {
                sentences.push("Its condition is too worn to pass on.".to_string());
            }
            if answers.value == Some(ValueAnswer::Low) {
                sentences.push("It has little remaining value.".to_string());
            }
            if answers.replace == Some(ReplaceAnswer::Easy) {
                sentences.push("It is easy to replace if you ever need one again.".to_string());
            }
            if profile.minimalist_level == Some(MinimalistLevel::Extreme) {
                sentences.push("Clearing it out supports your minimalist goals.".to_string());
            }
        }
    }

    sentences.join(" ")
}

fn opening(action: ActionType, name: &str) -> String {
    match action {
        ActionType::Keep => format!("Keep {name}; it still earns its place in your home."),
        ActionType::Storage => {
            format!("Store {name} out of the way; it matters, but doesn't need prime space.")
        }
        ActionType::Accessible => {
            format!("Keep {name} somewhere easy to reach so it stays part of your routine.")
        }
        ActionType::Sell => format!("Sell {name}; it should still fetch a fair price."),
        ActionType::Donate => format!("Donate {name} so someone else can get use out of it."),
        ActionType::Discard => format!("Discard {name}; it has reached the end of its useful life."),
    }
}
