//! Federation-specific rating records.
//!
//! These lines carry a federation code instead of a numeric DIN and attach
//! to a player decoded earlier in the same file.

use regex::Regex;
use std::sync::LazyLock;

use super::LineGrammar;
use super::columns::Columns;
use crate::trf::error::{Result, TrfError};
use crate::trf::fields::{blank_if_zero, truncate};
use crate::trf::types::{NationalPlayer, Tournament};

static NATIONAL_PLAYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<player_id>[ 0-9]{4}) (?P<sex>[\w ])(?P<classification>[\w ]{3}) ",
        r"(?P<name>.{33}) (?P<rating>[ 0-9]{4}) (?P<origin>[\w ]{3}) ",
        r"(?P<national_id>.{11}) (?P<birth_date>.{10})\s*$",
    ))
    .expect("valid national player regex")
});

pub(super) struct NationalPlayerEntry;

impl LineGrammar for NationalPlayerEntry {
    type Value = NationalPlayer;

    const RECORD: &'static str = "National player";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&NATIONAL_PLAYER_RE, Self::RECORD, data)?;
        Ok(NationalPlayer {
            player_id: cols.int("player_id")?,
            name: cols.text("name"),
            sex: cols.char("sex"),
            classification: cols.text("classification"),
            rating: cols.optional_int("rating")?.unwrap_or(0),
            origin: cols.text("origin"),
            national_id: cols.text("national_id"),
            birth_date: cols.text("birth_date"),
        })
    }

    fn format(national: &Self::Value) -> String {
        format!(
            "{:>4} {}{:>3} {:<33} {:>4} {:<3} {:>11} {:>10}",
            national.player_id,
            national.sex,
            truncate(&national.classification, 3),
            truncate(&national.name, 33),
            blank_if_zero(national.rating.into()),
            truncate(&national.origin, 3),
            truncate(&national.national_id, 11),
            truncate(&national.birth_date, 10),
        )
    }
}

pub(crate) fn national_player_header() -> String {
    format!(
        "SSSS sCCC {} RRRR OOO IIIIIIIIIII BBBB/BB/BB",
        "N".repeat(33)
    )
}

/// Attaches one national record to its player, replacing an earlier record
/// of the same federation.
pub(crate) fn load_national_player(t: &mut Tournament, federation: &str, data: &str) -> Result<()> {
    let national = NationalPlayerEntry::parse(data)?;
    let player = t
        .player_mut(national.player_id)
        .ok_or_else(|| TrfError::UnknownPlayer {
            federation: federation.to_string(),
            player_id: national.player_id,
        })?;
    player
        .national_player_by_federation
        .insert(federation.to_string(), national);
    Ok(())
}

pub(crate) fn national_player_lines(players: &[&NationalPlayer]) -> Vec<String> {
    players
        .iter()
        .map(|national| NationalPlayerEntry::format(national))
        .collect()
}
