use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::dates::parse_date;

/// One round of a player's game list. `round` is positional (1-based) and
/// never written to the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    /// `None` for byes and unpaired rounds (written as `0000`).
    pub opponent_id: Option<u32>,
    pub color: char,
    pub result: char,
    pub round: u32,
}

/// Federation-specific rating record attached to a declared player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationalPlayer {
    /// Starting rank of the player this record belongs to (4 columns).
    pub player_id: u32,
    pub name: String,
    pub sex: char,
    pub classification: String,
    pub rating: u32,
    pub origin: String,
    pub national_id: String,
    pub birth_date: String,
}

impl NationalPlayer {
    pub fn new(player_id: u32) -> Self {
        Self {
            player_id,
            name: String::new(),
            sex: ' ',
            classification: String::new(),
            rating: 0,
            origin: String::new(),
            national_id: String::new(),
            birth_date: String::new(),
        }
    }
}

/// A `001` record.
///
/// Numeric columns are fixed width: `id`, `rating` and `rank` hold up to
/// 9999 and `fide_id` up to 11 digits. Wider values are written as-is and
/// the line no longer decodes. `points` is clamped to `99.9` on write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub sex: char,
    pub title: String,
    /// 0 when unrated.
    pub rating: u32,
    pub federation: String,
    pub fide_id: Option<u64>,
    pub birth_date: String,
    pub points: f64,
    pub rank: Option<u32>,
    pub games: Vec<Game>,
    pub national_player_by_federation: BTreeMap<String, NationalPlayer>,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            sex: 'm',
            title: String::new(),
            rating: 0,
            federation: String::new(),
            fide_id: None,
            birth_date: String::new(),
            points: 0.0,
            rank: None,
            games: Vec::new(),
            national_player_by_federation: BTreeMap::new(),
        }
    }

    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        parse_date(&self.birth_date)
    }
}

/// A `310` record. `id` and `rank` fit 3 columns, member ids 4.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub nickname: String,
    pub strength_factor: u32,
    pub match_points: f64,
    pub game_points: f64,
    pub rank: Option<u32>,
    pub player_ids: Vec<u32>,
}

/// Team record of the older format revision, kept for files that still use it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeprecatedTeam {
    pub name: String,
    pub player_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundBye {
    /// `F` (full point), `H` (half point) or `Z` (zero point).
    pub kind: char,
    pub round: u32,
    pub pairing_numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceleratedRound {
    pub match_points: Option<f64>,
    pub game_points: Option<f64>,
    pub first_round: u32,
    pub last_round: Option<u32>,
    pub first_id: u32,
    pub last_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProhibitedPairing {
    pub first_round: u32,
    pub last_round: Option<u32>,
    pub pairing_numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPabs {
    pub match_points: Option<f64>,
    pub game_points: f64,
    pub team_id_by_round: BTreeMap<u32, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamForfeitedMatch {
    /// Two characters out of `+` and `-`, white first.
    pub kind: String,
    pub round: u32,
    pub white_team_id: u32,
    pub black_team_id: u32,
}

/// Board order of a team pairing played out of the default order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OodoTeamPairing {
    pub round: u32,
    pub team_id: u32,
    pub opponent_team_id: u32,
    pub boards: Vec<Option<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbnormalPointsAssignment {
    pub kind: char,
    pub match_points: Option<f64>,
    pub game_points: Option<f64>,
    pub round: Option<u32>,
    pub pairing_numbers: Vec<Option<u32>>,
}

/// String-keyed map that remembers first-insertion order.
///
/// Inserting an existing key replaces its value and keeps its position.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> FieldMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for FieldMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A whole tournament report. Every collection keeps file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub city: String,
    pub federation: String,
    pub start_date: String,
    pub end_date: String,
    /// Declared player count; may disagree with `players.len()`.
    pub num_players: u32,
    pub num_rated_players: u32,
    pub num_teams: u32,
    pub tournament_type: String,
    pub encoded_type: String,
    pub chief_arbiter: String,
    pub deputy_arbiters: Vec<String>,
    pub allotted_time: String,
    pub time_control: String,
    pub round_dates: Vec<String>,
    pub num_rounds: u32,
    pub initial_color: String,
    pub individuals_point_system: FieldMap<f64>,
    pub teams_point_system: FieldMap<f64>,
    pub starting_rank_method: String,
    pub pairing_controller_id: String,
    pub tie_breaks: Vec<String>,
    pub standings_tie_breaks: Vec<String>,
    pub board_color_sequence: String,

    pub teams: Vec<Team>,
    pub deprecated_teams: Vec<DeprecatedTeam>,
    pub players: Vec<Player>,
    pub accelerated_rounds: Vec<AcceleratedRound>,
    pub prohibited_pairings: Vec<ProhibitedPairing>,
    pub round_byes: Vec<RoundBye>,
    pub team_pabs: Option<TeamPabs>,
    pub team_forfeited_matches: Vec<TeamForfeitedMatch>,
    pub oodo_team_pairings: Vec<OodoTeamPairing>,
    pub abnormal_points_assignments: Vec<AbnormalPointsAssignment>,
    /// Pre-rendered 801 lines, reproduced verbatim.
    pub informative_team_pairings_records: Vec<String>,
    /// Pre-rendered 802 lines, reproduced verbatim.
    pub informative_team_results_records: Vec<String>,

    pub xx_fields: FieldMap<String>,
    pub bb_fields: FieldMap<String>,
}

impl Tournament {
    /// Best guess of the number of rounds: the declared count, then the
    /// `XXR` extension field, then the round dates, then the longest game
    /// list (or one less than the player count when nobody has games).
    pub fn num_rounds_estimation(&self) -> u32 {
        if self.num_rounds != 0 {
            return self.num_rounds;
        }

        if let Some(rounds) = self.xx_fields.get("XXR")
            && let Ok(rounds) = rounds.trim().parse()
        {
            return rounds;
        }

        if !self.round_dates.is_empty() {
            return self.round_dates.len() as u32;
        }

        let longest = self
            .players
            .iter()
            .map(|p| p.games.len())
            .max()
            .unwrap_or(0);
        if longest > 0 {
            longest as u32
        } else {
            self.players.len().saturating_sub(1) as u32
        }
    }

    /// National rating records grouped by federation code, in player order.
    ///
    /// Groups come in ascending code order, which is also the order the
    /// blocks are written in, not the order they were first read.
    ///
    /// Recomputed on every call, so edits to the players are always reflected.
    pub fn national_players_by_federation(&self) -> BTreeMap<&str, Vec<&NationalPlayer>> {
        let mut by_federation: BTreeMap<&str, Vec<&NationalPlayer>> = BTreeMap::new();
        for player in &self.players {
            for (federation, national) in &player.national_player_by_federation {
                by_federation
                    .entry(federation.as_str())
                    .or_default()
                    .push(national);
            }
        }
        by_federation
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn parsed_start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn parsed_end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    pub fn parsed_round_dates(&self) -> Vec<Option<NaiveDate>> {
        self.round_dates.iter().map(|d| parse_date(d)).collect()
    }
}
