use std::io::Read;

use csv::StringRecord;

use crate::workflows::recommendation::{Answers, Factor};

use super::InventoryImportError;

#[derive(Debug)]
pub(crate) struct InventoryRow {
    pub(crate) line: u64,
    pub(crate) answers: Answers,
}

/// Column positions resolved from the header row.
struct ColumnMap {
    name: usize,
    factors: Vec<(Factor, usize)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, InventoryImportError> {
        let position = |wanted: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(wanted))
        };

        let name = position("name").ok_or(InventoryImportError::MissingColumn("name"))?;
        let factors = Factor::ordered()
            .into_iter()
            .filter_map(|factor| position(factor.answer_field()).map(|index| (factor, index)))
            .collect();

        Ok(Self { name, factors })
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<InventoryRow>, InventoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let mut answers = Answers::named(record.get(columns.name).unwrap_or_default());
        for (factor, index) in &columns.factors {
            if let Some(raw) = record.get(*index).filter(|raw| !raw.is_empty()) {
                answers.set_option(*factor, raw);
            }
        }

        rows.push(InventoryRow { line, answers });
    }

    Ok(rows)
}
