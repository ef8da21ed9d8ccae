use super::LineGrammar;
use crate::trf::error::{Result, TrfError};
use crate::trf::fields::{float_or_blank, truncate};
use crate::trf::types::FieldMap;

/// Blank columns before the first round date, so dates line up with the
/// game groups of the player records.
const ROUND_DATES_GUTTER: usize = 88;
const POINT_SYSTEM_STRIDE: usize = 9;

pub(super) fn parse_count(record: &'static str, data: &str) -> Result<u32> {
    data.trim()
        .parse()
        .map_err(|_| TrfError::malformed(record, data))
}

/// Comma separated labels (202, 212).
pub(super) struct TieBreaksEntry;

impl LineGrammar for TieBreaksEntry {
    type Value = Vec<String>;

    const RECORD: &'static str = "Tie-breaks";

    fn parse(data: &str) -> Result<Self::Value> {
        Ok(data
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn format(value: &Self::Value) -> String {
        value.join(",")
    }
}

/// `<symbol><score>` groups on a fixed nine character stride (162, 362).
pub(super) struct PointSystemEntry;

impl LineGrammar for PointSystemEntry {
    type Value = FieldMap<f64>;

    const RECORD: &'static str = "Point system";

    fn parse(data: &str) -> Result<Self::Value> {
        let chars: Vec<char> = data.trim_end().chars().collect();
        let mut system = FieldMap::new();
        let mut pos = 0;
        while chars.len() - pos >= 3 {
            let end = (pos + POINT_SYSTEM_STRIDE).min(chars.len());
            let symbol: String = chars[pos..pos + 2].iter().collect();
            let score: String = chars[pos + 2..end].iter().collect();
            let score: f64 = score
                .trim()
                .parse()
                .map_err(|_| TrfError::malformed(Self::RECORD, data))?;
            system.insert(symbol.trim(), score);
            pos = end;
        }
        Ok(system)
    }

    fn format(value: &Self::Value) -> String {
        value
            .iter()
            .map(|(symbol, score)| {
                format!("{:>2}{}", truncate(symbol, 2), float_or_blank(Some(*score), 4))
            })
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// One date per round behind a fixed gutter (132).
pub(super) struct RoundDatesEntry;

impl LineGrammar for RoundDatesEntry {
    type Value = Vec<String>;

    const RECORD: &'static str = "Round dates";

    fn parse(data: &str) -> Result<Self::Value> {
        Ok(data
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn format(value: &Self::Value) -> String {
        format!("{}{}", " ".repeat(ROUND_DATES_GUTTER), value.join("  "))
    }
}

pub(super) fn round_dates_header(num_rounds: usize) -> String {
    let mut header = " ".repeat(ROUND_DATES_GUTTER - 2);
    for column in 1..=num_rounds {
        header.push_str(&format!("  {:R>8}", column));
    }
    header
}
