use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Disposition recommended for a belonging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Keep,
    Storage,
    Accessible,
    Sell,
    Donate,
    Discard,
}

impl ActionType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Keep,
            Self::Storage,
            Self::Accessible,
            Self::Sell,
            Self::Donate,
            Self::Discard,
        ]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Keep => 0,
            Self::Storage => 1,
            Self::Accessible => 2,
            Self::Sell => 3,
            Self::Donate => 4,
            Self::Discard => 5,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Storage => "storage",
            Self::Accessible => "accessible",
            Self::Sell => "sell",
            Self::Donate => "donate",
            Self::Discard => "discard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Keep => "Keep",
            Self::Storage => "Store",
            Self::Accessible => "Keep Accessible",
            Self::Sell => "Sell",
            Self::Donate => "Donate",
            Self::Discard => "Discard",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|action| action.key().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Questionnaire dimension feeding the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Usage,
    Sentimental,
    Condition,
    Value,
    Replaceability,
    Space,
}

impl Factor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Usage,
            Self::Sentimental,
            Self::Condition,
            Self::Value,
            Self::Replaceability,
            Self::Space,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Sentimental => "sentimental",
            Self::Condition => "condition",
            Self::Value => "value",
            Self::Replaceability => "replaceability",
            Self::Space => "space",
        }
    }

    /// Field name the questionnaire uses for this factor.
    pub const fn answer_field(self) -> &'static str {
        match self {
            Self::Usage => "used",
            Self::Sentimental => "sentimental",
            Self::Condition => "condition",
            Self::Value => "value",
            Self::Replaceability => "replace",
            Self::Space => "space",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Usage => "Usage",
            Self::Sentimental => "Sentimental Value",
            Self::Condition => "Condition",
            Self::Value => "Monetary Value",
            Self::Replaceability => "Replaceability",
            Self::Space => "Space Available",
        }
    }

    /// Valid option keys in questionnaire order.
    pub const fn option_keys(self) -> &'static [&'static str] {
        match self {
            Self::Usage => &["yes", "rarely", "no"],
            Self::Sentimental => &["high", "some", "none"],
            Self::Condition => &["excellent", "good", "fair", "poor"],
            Self::Value => &["high", "medium", "low"],
            Self::Replaceability => &["easy", "moderate", "difficult"],
            Self::Space => &["yes", "no"],
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered().into_iter().find(|factor| {
            factor.key().eq_ignore_ascii_case(raw) || factor.answer_field().eq_ignore_ascii_case(raw)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageAnswer {
    Yes,
    Rarely,
    No,
}

impl UsageAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Rarely => "rarely",
            Self::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentalAnswer {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "some")]
    Partial,
    #[serde(rename = "none")]
    NoAttachment,
}

impl SentimentalAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Partial => "some",
            Self::NoAttachment => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionAnswer {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ConditionAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueAnswer {
    High,
    Medium,
    Low,
}

impl ValueAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceAnswer {
    Easy,
    Moderate,
    Difficult,
}

impl ReplaceAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceAnswer {
    Yes,
    No,
}

impl SpaceAnswer {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Questionnaire responses for one item. Every answer is optional; unknown option strings
/// deserialize as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub used: Option<UsageAnswer>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sentimental: Option<SentimentalAnswer>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionAnswer>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueAnswer>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub replace: Option<ReplaceAnswer>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceAnswer>,
}

impl Answers {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Option key recorded for `factor`, used to index the weight table.
    pub fn option_key(&self, factor: Factor) -> Option<&'static str> {
        match factor {
            Factor::Usage => self.used.map(UsageAnswer::key),
            Factor::Sentimental => self.sentimental.map(SentimentalAnswer::key),
            Factor::Condition => self.condition.map(ConditionAnswer::key),
            Factor::Value => self.value.map(ValueAnswer::key),
            Factor::Replaceability => self.replace.map(ReplaceAnswer::key),
            Factor::Space => self.space.map(SpaceAnswer::key),
        }
    }

    /// Record an answer from its raw string form. Unknown keys clear the factor.
    pub fn set_option(&mut self, factor: Factor, raw: &str) {
        let value = serde_json::Value::String(raw.to_string());
        match factor {
            Factor::Usage => self.used = parse_option(value),
            Factor::Sentimental => self.sentimental = parse_option(value),
            Factor::Condition => self.condition = parse_option(value),
            Factor::Value => self.value = parse_option(value),
            Factor::Replaceability => self.replace = parse_option(value),
            Factor::Space => self.space = parse_option(value),
        }
    }

    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "this item"
        } else {
            trimmed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinimalistLevel {
    Extreme,
    Moderate,
    Balanced,
    Maximalist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetPriority {
    VeryImportant,
    SomewhatImportant,
    NotImportant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentalStyle {
    VerySentimental,
    SomewhatSentimental,
    NotSentimental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LivingSpace {
    Studio,
    SmallApartment,
    LargeApartment,
    House,
}

/// Personality profile consulted by the adjustment rules. Attributes the engine does not
/// know about are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub minimalist_level: Option<MinimalistLevel>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub budget_priority: Option<BudgetPriority>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sentimental_value: Option<SentimentalStyle>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub living_space: Option<LivingSpace>,
}

/// Strings are trimmed and lowercased first, so `" Yes"` reads the same as `"yes"`.
fn parse_option<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    let value = match value {
        serde_json::Value::String(raw) => {
            serde_json::Value::String(raw.trim().to_ascii_lowercase())
        }
        other => other,
    };
    T::deserialize(value).ok()
}

/// Accepts any JSON value and keeps it only when it parses as `T`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(parse_option))
}
