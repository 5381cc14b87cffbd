mod parser;

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::workflows::recommendation::{
    generate_reasoning, ActionType, Answers, Profile, RecommendationEngine,
    RecommendationSettings,
};

#[derive(Debug)]
pub enum InventoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for InventoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryImportError::Io(err) => write!(f, "failed to read inventory export: {}", err),
            InventoryImportError::Csv(err) => write!(f, "invalid inventory CSV data: {}", err),
            InventoryImportError::MissingColumn(column) => {
                write!(f, "inventory CSV header is missing the '{}' column", column)
            }
        }
    }
}

impl std::error::Error for InventoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryImportError::Io(err) => Some(err),
            InventoryImportError::Csv(err) => Some(err),
            InventoryImportError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for InventoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InventoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Questionnaire answers for one inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub line: u64,
    pub answers: Answers,
}

/// Recommendation produced for one inventory row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecommendation {
    pub line: u64,
    pub name: String,
    pub recommendation: ActionType,
    pub label: &'static str,
    pub reasoning: String,
}

pub struct InventoryImporter;

impl InventoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryItem>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InventoryItem>, InventoryImportError> {
        let items = parser::parse_rows(reader)?
            .into_iter()
            .map(|row| InventoryItem {
                line: row.line,
                answers: row.answers,
            })
            .collect();
        Ok(items)
    }
}

/// Classifies every item with the same profile and settings.
pub fn recommend_inventory(
    engine: &RecommendationEngine,
    items: &[InventoryItem],
    profile: Option<&Profile>,
    settings: Option<&RecommendationSettings>,
) -> Vec<InventoryRecommendation> {
    items
        .iter()
        .map(|item| {
            let recommendation = engine.classify(&item.answers, profile, settings);
            InventoryRecommendation {
                line: item.line,
                name: item.answers.display_name().to_string(),
                recommendation,
                label: recommendation.label(),
                reasoning: generate_reasoning(recommendation, &item.answers, profile),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendation::{ConditionAnswer, SpaceAnswer, UsageAnswer};
    use std::io::Cursor;

    const SAMPLE: &str = "Name,Used,Sentimental,Condition,Value,Replace,Space,Room\n\
        Grandma's quilt,rarely,high,good,medium,difficult,no,Bedroom\n\
        Broken toaster,no,none,poor,low,easy,,Kitchen\n\
        Mystery box,sometimes,,,,,,Garage\n";

    #[test]
    fn parses_rows_with_case_insensitive_headers() {
        let items = InventoryImporter::from_reader(Cursor::new(SAMPLE)).expect("inventory parses");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].answers.name, "Grandma's quilt");
        assert_eq!(items[0].answers.used, Some(UsageAnswer::Rarely));
        assert_eq!(items[0].answers.space, Some(SpaceAnswer::No));
        assert_eq!(items[1].answers.condition, Some(ConditionAnswer::Poor));
        assert_eq!(items[1].answers.space, None);
        assert_eq!(items[1].line, 3);
    }

    #[test]
    fn unknown_cells_are_left_unanswered() {
        let items = InventoryImporter::from_reader(Cursor::new(SAMPLE)).expect("inventory parses");

        let mystery = &items[2].answers;
        assert_eq!(mystery.used, None);
        assert_eq!(mystery.sentimental, None);
    }

    #[test]
    fn missing_name_column_is_rejected() {
        let err = InventoryImporter::from_reader(Cursor::new("used,space\nyes,yes\n"))
            .expect_err("header without name fails");

        assert!(matches!(err, InventoryImportError::MissingColumn("name")));
    }

    #[test]
    fn recommends_every_row() {
        let items = InventoryImporter::from_reader(Cursor::new(SAMPLE)).expect("inventory parses");
        let engine = RecommendationEngine::default();

        let results = recommend_inventory(&engine, &items, None, None);

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].recommendation, ActionType::Discard);
        assert!(results[1].reasoning.starts_with("Discard Broken toaster"));
        // no answers at all: every score is zero and the tie-break order decides
        assert_eq!(results[2].recommendation, ActionType::Keep);
    }
}
