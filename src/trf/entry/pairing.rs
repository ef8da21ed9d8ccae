use regex::Regex;
use std::sync::LazyLock;

use super::columns::Columns;
use super::{LineGrammar, column_labels};
use crate::trf::error::Result;
use crate::trf::fields::{float_or_blank, or_blank};
use crate::trf::types::{AbnormalPointsAssignment, AcceleratedRound, ProhibitedPairing, RoundBye};

pub(super) const ACCELERATED_ROUND_HEADER: &str = "MMMM GGGG RRF RRL PPPF PPPL";

static ROUND_BYE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<kind>[fhz]) (?P<round>[ 0-9]{3})(?P<pairing_numbers>(?: [ 0-9]{4})+)\s*$")
        .expect("valid round bye regex")
});

static ACCELERATED_ROUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<match_points>[ 0-9.]{4}) (?P<game_points>[ 0-9.]{4}) ",
        r"(?P<first_round>[ 0-9]{3}) (?P<last_round>[ 0-9]{3}) ",
        r"(?P<first_id>[ 0-9]{4}) (?P<last_id>[ 0-9]{4})\s*$",
    ))
    .expect("valid accelerated round regex")
});

static PROHIBITED_PAIRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<first_round>[ 0-9]{3}) (?P<last_round>[ 0-9]{3})(?P<pairing_numbers>(?: [ 0-9]{4}){2,})\s*$",
    )
    .expect("valid prohibited pairing regex")
});

static ABNORMAL_POINTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<kind>[dwlfhz+ -]) (?P<match_points>[ 0-9.-]{4}) (?P<game_points>[ 0-9.-]{4})",
        r"(?P<round>(?:\s[ 0-9]{3})?)(?P<pairing_numbers>(?: [ 0-9]{4})*)\s*$",
    ))
    .expect("valid abnormal points assignment regex")
});

fn push_ids(line: &mut String, ids: &[u32]) {
    for id in ids {
        line.push_str(&format!(" {:>4}", id));
    }
}

/// Round bye requested ahead of pairing (240).
pub(super) struct RoundByeEntry;

impl LineGrammar for RoundByeEntry {
    type Value = RoundBye;

    const RECORD: &'static str = "Round bye";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&ROUND_BYE_RE, Self::RECORD, data)?;
        Ok(RoundBye {
            kind: cols.char("kind"),
            round: cols.int("round")?,
            pairing_numbers: cols.ints("pairing_numbers", 5)?,
        })
    }

    fn format(bye: &Self::Value) -> String {
        let mut line = format!("{} {:>3}", bye.kind, bye.round);
        push_ids(&mut line, &bye.pairing_numbers);
        line
    }
}

pub(super) fn round_bye_header(byes: &[RoundBye]) -> String {
    let columns = byes.iter().map(|b| b.pairing_numbers.len()).max().unwrap_or(0);
    format!("T RRR{}", column_labels(columns, 4, 'P'))
}

/// Virtual points added to a range of players for a range of rounds (250).
pub(super) struct AcceleratedRoundEntry;

impl LineGrammar for AcceleratedRoundEntry {
    type Value = AcceleratedRound;

    const RECORD: &'static str = "Accelerated round";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&ACCELERATED_ROUND_RE, Self::RECORD, data)?;
        Ok(AcceleratedRound {
            match_points: cols.optional_float("match_points")?,
            game_points: cols.optional_float("game_points")?,
            first_round: cols.int("first_round")?,
            last_round: cols.optional_int("last_round")?,
            first_id: cols.int("first_id")?,
            last_id: cols.int("last_id")?,
        })
    }

    fn format(round: &Self::Value) -> String {
        format!(
            "{} {} {:>3} {:>3} {:>4} {:>4}",
            float_or_blank(round.match_points, 4),
            float_or_blank(round.game_points, 4),
            round.first_round,
            or_blank(round.last_round.filter(|&r| r != 0)),
            round.first_id,
            round.last_id
        )
    }
}

/// Players that must not meet within a range of rounds (260).
pub(super) struct ProhibitedPairingEntry;

impl LineGrammar for ProhibitedPairingEntry {
    type Value = ProhibitedPairing;

    const RECORD: &'static str = "Prohibited pairings";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&PROHIBITED_PAIRING_RE, Self::RECORD, data)?;
        Ok(ProhibitedPairing {
            first_round: cols.int("first_round")?,
            last_round: cols.optional_int("last_round")?,
            pairing_numbers: cols.ints("pairing_numbers", 5)?,
        })
    }

    fn format(pairing: &Self::Value) -> String {
        let mut line = format!(
            "{:>3} {:>3}",
            pairing.first_round,
            or_blank(pairing.last_round.filter(|&r| r != 0))
        );
        push_ids(&mut line, &pairing.pairing_numbers);
        line
    }
}

pub(super) fn prohibited_pairing_header(pairings: &[ProhibitedPairing]) -> String {
    let columns = pairings
        .iter()
        .map(|p| p.pairing_numbers.len())
        .max()
        .unwrap_or(0);
    format!("RRF RRL{}", column_labels(columns, 4, 'P'))
}

/// Points awarded outside the regular scoring (299). A missing round is
/// written as `000` and read back as absent.
pub(super) struct AbnormalPointsAssignmentEntry;

impl LineGrammar for AbnormalPointsAssignmentEntry {
    type Value = AbnormalPointsAssignment;

    const RECORD: &'static str = "Abnormal points assignment";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&ABNORMAL_POINTS_RE, Self::RECORD, data)?;
        Ok(AbnormalPointsAssignment {
            kind: cols.char("kind"),
            match_points: cols.optional_float("match_points")?,
            game_points: cols.optional_float("game_points")?,
            round: cols.optional_int::<u32>("round")?.filter(|&r| r != 0),
            pairing_numbers: cols.optional_ints("pairing_numbers", 5)?,
        })
    }

    fn format(assignment: &Self::Value) -> String {
        let round = match assignment.round {
            Some(round) if round != 0 => format!("{:>3}", round),
            _ => "000".to_string(),
        };
        let mut line = format!(
            "{} {} {} {}",
            assignment.kind,
            float_or_blank(assignment.match_points, 4),
            float_or_blank(assignment.game_points, 4),
            round
        );
        for pairing_number in &assignment.pairing_numbers {
            match pairing_number {
                Some(id) if *id != 0 => line.push_str(&format!(" {:>4}", id)),
                _ => line.push_str(" 0000"),
            }
        }
        line
    }
}

pub(super) fn abnormal_points_header(assignments: &[AbnormalPointsAssignment]) -> String {
    let columns = assignments
        .iter()
        .map(|a| a.pairing_numbers.len())
        .max()
        .unwrap_or(0);
    format!("T MMMM GGGG RRR{}", column_labels(columns, 4, 'T'))
}
