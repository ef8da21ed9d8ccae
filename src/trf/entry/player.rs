use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;

use super::LineGrammar;
use super::columns::Columns;
use crate::trf::error::{Result, TrfError};
use crate::trf::fields::{blank_if_zero, float_or_blank, optional_int, or_blank, truncate};
use crate::trf::types::{Game, Player};

/// Width of one `␠␠opp␠c␠r` game group.
const GAME_WIDTH: usize = 10;

static PLAYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<id>[ 0-9]{4}) (?P<sex>[\w ])(?P<title>[\w ]{3}) ",
        r"(?P<name>.{33}) (?P<rating>[ 0-9]{4}) (?P<federation>[\w ]{3}) ",
        r"(?P<fide_id>[ 0-9]{11}) (?P<birth_date>.{10}) (?P<points>[ 0-9.]{4}) ",
        r"(?P<rank>[ 0-9]{4})(?P<games>(?:\s\s[ 0-9]{4} [bsw\- ] [1=0+wdl\-hfuz ]| {10})*)\s*$",
    ))
    .expect("valid player regex")
});

/// Player record (001): identity, rating data and one group per round.
pub(super) struct PlayerEntry;

impl LineGrammar for PlayerEntry {
    type Value = Player;

    const RECORD: &'static str = "Player";

    fn parse(data: &str) -> Result<Self::Value> {
        let cols = Columns::capture(&PLAYER_RE, Self::RECORD, data)?;
        let games =
            parse_games(cols.raw("games")).map_err(|_| TrfError::malformed(Self::RECORD, data))?;

        Ok(Player {
            id: cols.int("id")?,
            name: cols.text("name"),
            sex: cols.char("sex"),
            title: cols.text("title"),
            rating: cols.optional_int("rating")?.unwrap_or(0),
            federation: cols.text("federation"),
            fide_id: cols.optional_int("fide_id")?,
            birth_date: cols.text("birth_date"),
            points: cols.float("points")?,
            rank: cols.optional_int("rank")?,
            games,
            national_player_by_federation: Default::default(),
        })
    }

    fn format(player: &Self::Value) -> String {
        let mut line = format!(
            "{:>4} {}{:>3} {:<33} {:>4} {:<3} {:>11} {:>10} {} {:>4}",
            player.id,
            player.sex,
            truncate(&player.title, 3),
            truncate(&player.name, 33),
            blank_if_zero(player.rating.into()),
            truncate(&player.federation, 3),
            or_blank(player.fide_id),
            truncate(&player.birth_date, 10),
            float_or_blank(Some(player.points), 4),
            or_blank(player.rank),
        );
        for game in &player.games {
            let opponent = match game.opponent_id {
                Some(id) if id != 0 => id.to_string(),
                _ => "0000".to_string(),
            };
            line.push_str(&format!("  {:>4} {} {}", opponent, game.color, game.result));
        }
        line
    }
}

/// Reads the game groups. Rounds are numbered by position; a trailing
/// group shorter than `opp c r` is ignored.
fn parse_games(raw: &str) -> std::result::Result<Vec<Game>, ParseIntError> {
    let chars: Vec<char> = raw.chars().skip(2).collect();
    let end = chars
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |idx| idx + 1);

    let mut games = Vec::new();
    for (idx, group) in chars[..end].chunks(GAME_WIDTH).enumerate() {
        if group.len() < 8 {
            break;
        }
        let opponent: String = group[..4].iter().collect();
        games.push(Game {
            opponent_id: optional_int::<u32>(&opponent)?.filter(|&id| id != 0),
            color: group[5],
            result: group[7],
            round: idx as u32 + 1,
        });
    }
    Ok(games)
}

pub(super) fn header(players: &[Player]) -> String {
    let mut header = format!(
        "SSSS sTTT {} RRRR FFF IIIIIIIIIII BBBB/BB/BB PPPP RRRR",
        "N".repeat(33)
    );
    let columns = players.iter().map(|p| p.games.len()).max().unwrap_or(0);
    for column in 1..=columns {
        let digit = column % 10;
        header.push_str(&format!("  {0}{0}{0}{0} {0} {0}", digit));
    }
    header
}
