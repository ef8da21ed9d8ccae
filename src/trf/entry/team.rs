use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::columns::Columns;
use super::{LineGrammar, column_labels};
use crate::trf::error::{Result, TrfError};
use crate::trf::fields::{float_or_blank, or_blank, split_ints, truncate};
use crate::trf::types::{DeprecatedTeam, OodoTeamPairing, Team, TeamForfeitedMatch, TeamPabs};

const TEAM_NAME_WIDTH: usize = 32;

pub(super) const FORFEITED_MATCH_HEADER: &str = "TT RRR WWW BBB";

static TEAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<id>[ 0-9]{3}) (?P<name>.{32}) (?P<nickname>[ \w]{5}) ",
        r"(?P<strength_factor>[ 0-9]{6}) (?P<match_points>[ 0-9.]{6}) ",
        r"(?P<game_points>[ 0-9.]{6}) (?P<rank>[ 0-9]{3}) (?P<player_ids>(?: [ 0-9]{4})*)\s*$",
    ))
    .expect("valid team regex")
});

static TEAM_PABS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<match_points>[ 0-9.]{4}) (?P<game_points>[ 0-9.]{4})(?P<team_ids>(?: [ 0-9]{3})*)\s*$",
    )
    .expect("valid team PABs regex")
});

static FORFEITED_MATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<kind>[-+]{2}) (?P<round>[ 0-9]{3}) (?P<white_team_id>[ 0-9]{3}) (?P<black_team_id>[ 0-9]{3})\s*$",
    )
    .expect("valid forfeited match regex")
});

static OODO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<round>[ 0-9]{3}) (?P<team_id>[ 0-9]{3}) (?P<opponent_team_id>[ 0-9]{3})(?P<boards>(?: [ 0-9]{4})*)\s*$",
    )
    .expect("valid out of order team pairing regex")
});

/// Team record (310).
pub(super) struct TeamEntry;

impl LineGrammar for TeamEntry {
    type Value = Team;

    const RECORD: &'static str = "Team";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&TEAM_RE, Self::RECORD, data)?;
        Ok(Team {
            id: cols.int("id")?,
            name: cols.text("name"),
            nickname: cols.text("nickname"),
            strength_factor: cols.optional_int("strength_factor")?.unwrap_or(0),
            match_points: cols.float("match_points")?,
            game_points: cols.float("game_points")?,
            rank: cols.optional_int("rank")?,
            player_ids: cols.ints("player_ids", 5)?,
        })
    }

    fn format(team: &Self::Value) -> String {
        let mut line = format!(
            "{:>3} {:<32} {:<5} {:>6} {} {} {:>3} ",
            team.id,
            truncate(&team.name, TEAM_NAME_WIDTH),
            truncate(&team.nickname, 5),
            team.strength_factor,
            float_or_blank(Some(team.match_points), 6),
            float_or_blank(Some(team.game_points), 6),
            or_blank(team.rank),
        );
        for player_id in &team.player_ids {
            line.push_str(&format!(" {:>4}", player_id));
        }
        line
    }
}

pub(super) fn header(teams: &[Team]) -> String {
    let columns = teams.iter().map(|t| t.player_ids.len()).max().unwrap_or(0);
    format!(
        "SSS {} FFFFF EEEEEE MMMMMM GGGGGG RRR {}",
        "N".repeat(TEAM_NAME_WIDTH),
        column_labels(columns, 4, 'P')
    )
}

/// Team record of the older revision (013): a name column then player ids.
pub(super) struct DeprecatedTeamEntry;

impl LineGrammar for DeprecatedTeamEntry {
    type Value = DeprecatedTeam;

    const RECORD: &'static str = "Deprecated team";

    fn parse(data: &str) -> Result<Self::Value> {
        let split = data
            .char_indices()
            .nth(TEAM_NAME_WIDTH)
            .map_or(data.len(), |(idx, _)| idx);
        let (name, rest) = data.split_at(split);
        let player_ids = split_ints(rest, 5).map_err(|_| TrfError::malformed(Self::RECORD, data))?;
        Ok(DeprecatedTeam {
            name: name.trim().to_string(),
            player_ids,
        })
    }

    fn format(team: &Self::Value) -> String {
        let player_ids: Vec<String> = team
            .player_ids
            .iter()
            .map(|id| format!("{:>4}", id))
            .collect();
        format!(
            "{:<32} {}",
            truncate(&team.name, TEAM_NAME_WIDTH),
            player_ids.join(" ")
        )
    }
}

pub(super) fn deprecated_header(teams: &[DeprecatedTeam]) -> String {
    let columns = teams.iter().map(|t| t.player_ids.len()).max().unwrap_or(0);
    format!(
        "{}{}",
        "N".repeat(TEAM_NAME_WIDTH),
        column_labels(columns, 4, 'P')
    )
}

/// Pairing-allocated byes of a team tournament (320), one team column per
/// round.
pub(super) struct TeamPabsEntry;

impl LineGrammar for TeamPabsEntry {
    type Value = TeamPabs;

    const RECORD: &'static str = "Team PABs";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&TEAM_PABS_RE, Self::RECORD, data)?;
        let team_id_by_round: BTreeMap<u32, u32> = cols
            .optional_ints("team_ids", 4)?
            .into_iter()
            .zip(1..)
            .filter_map(|(team_id, round)| Some((round, team_id?)))
            .collect();
        Ok(TeamPabs {
            match_points: cols.optional_float("match_points")?,
            game_points: cols.float("game_points")?,
            team_id_by_round,
        })
    }

    fn format(pabs: &Self::Value) -> String {
        let mut line = format!(
            "{} {}",
            float_or_blank(pabs.match_points, 4),
            float_or_blank(Some(pabs.game_points), 4)
        );
        let last_round = pabs.team_id_by_round.keys().max().copied().unwrap_or(0);
        for round in 1..=last_round {
            let team_id = pabs.team_id_by_round.get(&round).filter(|&&id| id != 0);
            line.push_str(&format!(" {:>3}", or_blank(team_id)));
        }
        line
    }
}

pub(super) fn team_pabs_header(num_round_dates: usize) -> String {
    format!("MMMM GGGG{}", column_labels(num_round_dates, 3, 'R'))
}

/// Forfeited team match (330).
pub(super) struct TeamForfeitedMatchEntry;

impl LineGrammar for TeamForfeitedMatchEntry {
    type Value = TeamForfeitedMatch;

    const RECORD: &'static str = "Team forfeited match";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&FORFEITED_MATCH_RE, Self::RECORD, data)?;
        Ok(TeamForfeitedMatch {
            kind: cols.text("kind"),
            round: cols.int("round")?,
            white_team_id: cols.int("white_team_id")?,
            black_team_id: cols.int("black_team_id")?,
        })
    }

    fn format(forfeit: &Self::Value) -> String {
        format!(
            "{:>2} {:>3} {:>3} {:>3}",
            truncate(&forfeit.kind, 2),
            forfeit.round,
            forfeit.white_team_id,
            forfeit.black_team_id
        )
    }
}

/// Team pairing whose boards were not played in the default order (300).
pub(super) struct OodoTeamPairingEntry;

impl LineGrammar for OodoTeamPairingEntry {
    type Value = OodoTeamPairing;

    const RECORD: &'static str = "Out of order team boards";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&OODO_RE, Self::RECORD, data)?;
        Ok(OodoTeamPairing {
            round: cols.int("round")?,
            team_id: cols.int("team_id")?,
            opponent_team_id: cols.int("opponent_team_id")?,
            boards: cols.optional_ints("boards", 5)?,
        })
    }

    fn format(pairing: &Self::Value) -> String {
        let mut line = format!(
            "{:>3} {:>3} {:>3}",
            pairing.round, pairing.team_id, pairing.opponent_team_id
        );
        for board in &pairing.boards {
            match board {
                Some(id) if *id != 0 => line.push_str(&format!(" {:>4}", id)),
                _ => line.push_str(" 0000"),
            }
        }
        line
    }
}

pub(super) fn oodo_header(pairings: &[OodoTeamPairing]) -> String {
    let columns = pairings.iter().map(|p| p.boards.len()).max().unwrap_or(0);
    format!("RRR TT1 TT2{}", column_labels(columns, 4, 'P'))
}
