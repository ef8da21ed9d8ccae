//! Record grammars and the ordered table the codec walks.
//!
//! Every data line is `DIN data`, where DIN is a three character code. The
//! table lists one [`Entry`] per code in the canonical dump order. Entries
//! are either single-occurrence (the last decoded line wins, at most one
//! line on dump) or repeating (one list element per line, in file order).

mod columns;
mod national;
mod pairing;
mod player;
mod scalar;
mod team;

use super::error::Result;
use super::types::{FieldMap, Tournament};

use pairing::{
    AbnormalPointsAssignmentEntry, AcceleratedRoundEntry, ProhibitedPairingEntry, RoundByeEntry,
};
use player::PlayerEntry;
use scalar::{PointSystemEntry, RoundDatesEntry, TieBreaksEntry};
use team::{
    DeprecatedTeamEntry, OodoTeamPairingEntry, TeamEntry, TeamForfeitedMatchEntry,
    TeamPabsEntry,
};

pub(crate) use national::{load_national_player, national_player_header, national_player_lines};

/// Column grammar of one record type: how a single line's data (the text
/// after `DIN `) maps to and from a value.
pub(crate) trait LineGrammar {
    type Value;

    /// Record name used in error messages.
    const RECORD: &'static str;

    fn parse(data: &str) -> Result<Self::Value>;

    fn format(value: &Self::Value) -> String;
}

fn format_all<G: LineGrammar>(values: &[G::Value]) -> Vec<String> {
    values.iter().map(G::format).collect()
}

/// Labels for a repeating column block, e.g. ` PPP1 PPP2` for width 4.
pub(super) fn column_labels(count: usize, width: usize, fill: char) -> String {
    let mut labels = String::new();
    for column in 1..=count {
        let number = column.to_string();
        labels.push(' ');
        for _ in number.len()..width {
            labels.push(fill);
        }
        labels.push_str(&number);
    }
    labels
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextField {
    Name,
    City,
    Federation,
    StartDate,
    EndDate,
    TournamentType,
    ChiefArbiter,
    AllottedTime,
    InitialColor,
    StartingRankMethod,
    PairingControllerId,
    EncodedType,
    TimeControl,
    BoardColorSequence,
}

impl TextField {
    fn get(self, t: &Tournament) -> &str {
        match self {
            Self::Name => &t.name,
            Self::City => &t.city,
            Self::Federation => &t.federation,
            Self::StartDate => &t.start_date,
            Self::EndDate => &t.end_date,
            Self::TournamentType => &t.tournament_type,
            Self::ChiefArbiter => &t.chief_arbiter,
            Self::AllottedTime => &t.allotted_time,
            Self::InitialColor => &t.initial_color,
            Self::StartingRankMethod => &t.starting_rank_method,
            Self::PairingControllerId => &t.pairing_controller_id,
            Self::EncodedType => &t.encoded_type,
            Self::TimeControl => &t.time_control,
            Self::BoardColorSequence => &t.board_color_sequence,
        }
    }

    fn slot(self, t: &mut Tournament) -> &mut String {
        match self {
            Self::Name => &mut t.name,
            Self::City => &mut t.city,
            Self::Federation => &mut t.federation,
            Self::StartDate => &mut t.start_date,
            Self::EndDate => &mut t.end_date,
            Self::TournamentType => &mut t.tournament_type,
            Self::ChiefArbiter => &mut t.chief_arbiter,
            Self::AllottedTime => &mut t.allotted_time,
            Self::InitialColor => &mut t.initial_color,
            Self::StartingRankMethod => &mut t.starting_rank_method,
            Self::PairingControllerId => &mut t.pairing_controller_id,
            Self::EncodedType => &mut t.encoded_type,
            Self::TimeControl => &mut t.time_control,
            Self::BoardColorSequence => &mut t.board_color_sequence,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CountField {
    NumPlayers,
    NumRatedPlayers,
    NumTeams,
    NumRounds,
}

impl CountField {
    fn record(self) -> &'static str {
        match self {
            Self::NumPlayers => "Number of players",
            Self::NumRatedPlayers => "Number of rated players",
            Self::NumTeams => "Number of teams",
            Self::NumRounds => "Number of rounds",
        }
    }

    fn get(self, t: &Tournament) -> u32 {
        match self {
            Self::NumPlayers => t.num_players,
            Self::NumRatedPlayers => t.num_rated_players,
            Self::NumTeams => t.num_teams,
            Self::NumRounds => t.num_rounds,
        }
    }

    fn slot(self, t: &mut Tournament) -> &mut u32 {
        match self {
            Self::NumPlayers => &mut t.num_players,
            Self::NumRatedPlayers => &mut t.num_rated_players,
            Self::NumTeams => &mut t.num_teams,
            Self::NumRounds => &mut t.num_rounds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TieBreakField {
    Pairing,
    Standings,
}

impl TieBreakField {
    fn get(self, t: &Tournament) -> &Vec<String> {
        match self {
            Self::Pairing => &t.tie_breaks,
            Self::Standings => &t.standings_tie_breaks,
        }
    }

    fn slot(self, t: &mut Tournament) -> &mut Vec<String> {
        match self {
            Self::Pairing => &mut t.tie_breaks,
            Self::Standings => &mut t.standings_tie_breaks,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointSystemField {
    Individuals,
    Teams,
}

impl PointSystemField {
    fn get(self, t: &Tournament) -> &FieldMap<f64> {
        match self {
            Self::Individuals => &t.individuals_point_system,
            Self::Teams => &t.teams_point_system,
        }
    }

    fn slot(self, t: &mut Tournament) -> &mut FieldMap<f64> {
        match self {
            Self::Individuals => &mut t.individuals_point_system,
            Self::Teams => &mut t.teams_point_system,
        }
    }
}

/// What a table entry reads and writes on the tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Record {
    Text(TextField),
    Count(CountField),
    TieBreaks(TieBreakField),
    PointSystem(PointSystemField),
    DeputyArbiters,
    RoundDates,
    Players,
    Teams,
    RoundByes,
    AcceleratedRounds,
    ProhibitedPairings,
    TeamPabs,
    TeamForfeitedMatches,
    OodoTeamPairings,
    AbnormalPointsAssignments,
    InformativeTeamPairings,
    InformativeTeamResults,
    DeprecatedTeams,
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub din: &'static str,
    pub record: Record,
}

const fn entry(din: &'static str, record: Record) -> Entry {
    Entry { din, record }
}

/// Known record types, in dump order. Decode tries them top to bottom.
pub(crate) static ENTRIES: [Entry; 36] = [
    entry("012", Record::Text(TextField::Name)),
    entry("022", Record::Text(TextField::City)),
    entry("032", Record::Text(TextField::Federation)),
    entry("042", Record::Text(TextField::StartDate)),
    entry("052", Record::Text(TextField::EndDate)),
    entry("062", Record::Count(CountField::NumPlayers)),
    entry("072", Record::Count(CountField::NumRatedPlayers)),
    entry("082", Record::Count(CountField::NumTeams)),
    entry("092", Record::Text(TextField::TournamentType)),
    entry("102", Record::Text(TextField::ChiefArbiter)),
    entry("112", Record::DeputyArbiters),
    entry("122", Record::Text(TextField::AllottedTime)),
    entry("132", Record::RoundDates),
    entry("142", Record::Count(CountField::NumRounds)),
    entry("152", Record::Text(TextField::InitialColor)),
    entry("162", Record::PointSystem(PointSystemField::Individuals)),
    entry("172", Record::Text(TextField::StartingRankMethod)),
    entry("182", Record::Text(TextField::PairingControllerId)),
    entry("192", Record::Text(TextField::EncodedType)),
    entry("202", Record::TieBreaks(TieBreakField::Pairing)),
    entry("212", Record::TieBreaks(TieBreakField::Standings)),
    entry("222", Record::Text(TextField::TimeControl)),
    entry("352", Record::Text(TextField::BoardColorSequence)),
    entry("362", Record::PointSystem(PointSystemField::Teams)),
    entry("001", Record::Players),
    entry("310", Record::Teams),
    entry("240", Record::RoundByes),
    entry("250", Record::AcceleratedRounds),
    entry("260", Record::ProhibitedPairings),
    entry("320", Record::TeamPabs),
    entry("330", Record::TeamForfeitedMatches),
    entry("300", Record::OodoTeamPairings),
    entry("299", Record::AbnormalPointsAssignments),
    entry("801", Record::InformativeTeamPairings),
    entry("802", Record::InformativeTeamResults),
    entry("013", Record::DeprecatedTeams),
];

/// Finds the entry whose `DIN ` prefix starts `line`, with the data after it.
pub(crate) fn match_entry(line: &str) -> Option<(&'static Entry, &str)> {
    ENTRIES.iter().find_map(|entry| {
        let data = line.strip_prefix(entry.din)?.strip_prefix(' ')?;
        Some((entry, data))
    })
}

impl Entry {
    /// Decodes one line's data into the tournament.
    pub(crate) fn load(&self, t: &mut Tournament, data: &str) -> Result<()> {
        match self.record {
            Record::Text(field) => *field.slot(t) = data.trim().to_string(),
            Record::Count(field) => *field.slot(t) = scalar::parse_count(field.record(), data)?,
            Record::TieBreaks(field) => *field.slot(t) = TieBreaksEntry::parse(data)?,
            Record::PointSystem(field) => *field.slot(t) = PointSystemEntry::parse(data)?,
            Record::DeputyArbiters => t.deputy_arbiters.push(data.trim().to_string()),
            Record::RoundDates => t.round_dates = RoundDatesEntry::parse(data)?,
            Record::Players => t.players.push(PlayerEntry::parse(data)?),
            Record::Teams => t.teams.push(TeamEntry::parse(data)?),
            Record::RoundByes => t.round_byes.push(RoundByeEntry::parse(data)?),
            Record::AcceleratedRounds => {
                t.accelerated_rounds.push(AcceleratedRoundEntry::parse(data)?)
            }
            Record::ProhibitedPairings => {
                t.prohibited_pairings.push(ProhibitedPairingEntry::parse(data)?)
            }
            Record::TeamPabs => t.team_pabs = Some(TeamPabsEntry::parse(data)?),
            Record::TeamForfeitedMatches => t
                .team_forfeited_matches
                .push(TeamForfeitedMatchEntry::parse(data)?),
            Record::OodoTeamPairings => t.oodo_team_pairings.push(OodoTeamPairingEntry::parse(data)?),
            Record::AbnormalPointsAssignments => t
                .abnormal_points_assignments
                .push(AbnormalPointsAssignmentEntry::parse(data)?),
            Record::InformativeTeamPairings => t
                .informative_team_pairings_records
                .push(data.trim().to_string()),
            Record::InformativeTeamResults => t
                .informative_team_results_records
                .push(data.trim().to_string()),
            Record::DeprecatedTeams => t.deprecated_teams.push(DeprecatedTeamEntry::parse(data)?),
        }
        Ok(())
    }

    /// Renders the data part of every line this entry contributes. Empty
    /// values contribute nothing.
    pub(crate) fn lines(&self, t: &Tournament) -> Vec<String> {
        match self.record {
            Record::Text(field) => {
                let value = field.get(t);
                if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.to_string()]
                }
            }
            Record::Count(field) => match field.get(t) {
                0 => Vec::new(),
                value => vec![value.to_string()],
            },
            Record::TieBreaks(field) => single::<TieBreaksEntry>(field.get(t)),
            Record::PointSystem(field) => single::<PointSystemEntry>(field.get(t)),
            Record::DeputyArbiters => t.deputy_arbiters.clone(),
            Record::RoundDates => single::<RoundDatesEntry>(&t.round_dates),
            Record::Players => format_all::<PlayerEntry>(&t.players),
            Record::Teams => format_all::<TeamEntry>(&t.teams),
            Record::RoundByes => format_all::<RoundByeEntry>(&t.round_byes),
            Record::AcceleratedRounds => format_all::<AcceleratedRoundEntry>(&t.accelerated_rounds),
            Record::ProhibitedPairings => {
                format_all::<ProhibitedPairingEntry>(&t.prohibited_pairings)
            }
            Record::TeamPabs => t.team_pabs.iter().map(TeamPabsEntry::format).collect(),
            Record::TeamForfeitedMatches => {
                format_all::<TeamForfeitedMatchEntry>(&t.team_forfeited_matches)
            }
            Record::OodoTeamPairings => format_all::<OodoTeamPairingEntry>(&t.oodo_team_pairings),
            Record::AbnormalPointsAssignments => {
                format_all::<AbnormalPointsAssignmentEntry>(&t.abnormal_points_assignments)
            }
            Record::InformativeTeamPairings => t.informative_team_pairings_records.clone(),
            Record::InformativeTeamResults => t.informative_team_results_records.clone(),
            Record::DeprecatedTeams => format_all::<DeprecatedTeamEntry>(&t.deprecated_teams),
        }
    }

    /// Comment line describing the columns, written before the section.
    pub(crate) fn header(&self, t: &Tournament) -> Option<String> {
        match self.record {
            Record::RoundDates => Some(scalar::round_dates_header(t.round_dates.len())),
            Record::Players => Some(player::header(&t.players)),
            Record::Teams => Some(team::header(&t.teams)),
            Record::RoundByes => Some(pairing::round_bye_header(&t.round_byes)),
            Record::AcceleratedRounds => Some(pairing::ACCELERATED_ROUND_HEADER.to_string()),
            Record::ProhibitedPairings => {
                Some(pairing::prohibited_pairing_header(&t.prohibited_pairings))
            }
            Record::TeamPabs => Some(team::team_pabs_header(t.round_dates.len())),
            Record::TeamForfeitedMatches => Some(team::FORFEITED_MATCH_HEADER.to_string()),
            Record::OodoTeamPairings => Some(team::oodo_header(&t.oodo_team_pairings)),
            Record::AbnormalPointsAssignments => Some(pairing::abnormal_points_header(
                &t.abnormal_points_assignments,
            )),
            Record::InformativeTeamPairings => Some("Team pairings".to_string()),
            Record::InformativeTeamResults => Some("Team results".to_string()),
            Record::DeprecatedTeams => Some(team::deprecated_header(&t.deprecated_teams)),
            Record::Text(_)
            | Record::Count(_)
            | Record::TieBreaks(_)
            | Record::PointSystem(_)
            | Record::DeputyArbiters => None,
        }
    }
}

/// Single-occurrence value whose emptiness means "not present".
fn single<G>(value: &G::Value) -> Vec<String>
where
    G: LineGrammar,
    G::Value: IsEmpty,
{
    if value.is_empty() {
        Vec::new()
    } else {
        vec![G::format(value)]
    }
}

trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<V> IsEmpty for FieldMap<V> {
    fn is_empty(&self) -> bool {
        FieldMap::is_empty(self)
    }
}
