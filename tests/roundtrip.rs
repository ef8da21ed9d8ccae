//! Decode/encode cycles over randomly generated tournaments.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use chess_trf::{
    AbnormalPointsAssignment, AcceleratedRound, DeprecatedTeam, FieldMap, Game, NationalPlayer,
    OodoTeamPairing, Player, ProhibitedPairing, RoundBye, Team, TeamForfeitedMatch, TeamPabs,
    Tournament, dumps, loads,
};

const TOURNAMENTS: u64 = 25;
const CYCLES: usize = 20;
const MAX_PLAYERS: u32 = 60;
const MAX_NAME_SIZE: usize = 30;

fn letters(rng: &mut StdRng, max: usize, spaces: bool) -> String {
    let alphabet: &[u8] = if spaces {
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ "
    } else {
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
    };
    let size = rng.gen_range(0..=max);
    let text: String = (0..size)
        .map(|_| *alphabet.choose(rng).unwrap() as char)
        .collect();
    text.trim().to_string()
}

fn pick(rng: &mut StdRng, chars: &str) -> char {
    let chars: Vec<char> = chars.chars().collect();
    *chars.choose(rng).unwrap()
}

fn date(rng: &mut StdRng) -> String {
    format!(
        "{:04}/{:02}/{:02}",
        rng.gen_range(1900..=3000),
        rng.gen_range(1..=12),
        rng.gen_range(1..=31)
    )
}

fn half_points(rng: &mut StdRng, max: u32) -> f64 {
    f64::from(rng.gen_range(0..=max * 2)) / 2.0
}

fn maybe<T>(rng: &mut StdRng, value: impl FnOnce(&mut StdRng) -> T) -> Option<T> {
    if rng.gen_bool(0.7) { Some(value(rng)) } else { None }
}

fn game(rng: &mut StdRng, players: u32, round: u32) -> Game {
    Game {
        opponent_id: maybe(rng, |r| r.gen_range(1..=players)),
        color: pick(rng, "wb-"),
        result: pick(rng, "-+WDL1=0HFUZwdlhfuz"),
        round,
    }
}

fn national(rng: &mut StdRng, player_id: u32) -> NationalPlayer {
    NationalPlayer {
        player_id,
        name: letters(rng, MAX_NAME_SIZE, true),
        sex: pick(rng, "mw"),
        classification: letters(rng, 3, false),
        rating: rng.gen_range(0..=3000),
        origin: letters(rng, 3, false),
        national_id: rng.gen_range(0..=99_999_999u32).to_string(),
        birth_date: date(rng),
    }
}

fn player(rng: &mut StdRng, id: u32, players: u32) -> Player {
    let rounds = rng.gen_range(0..players);
    let mut player = Player {
        id,
        name: letters(rng, MAX_NAME_SIZE, true),
        sex: pick(rng, "mwMW"),
        title: ["", "GM", "IM", "WGM", "FM", "WIM", "CM", "WFM", "WCM"]
            .choose(rng)
            .unwrap()
            .to_string(),
        rating: rng.gen_range(0..=3000),
        federation: letters(rng, 3, false),
        fide_id: maybe(rng, |r| r.gen_range(1..=99_999_999_999)),
        birth_date: date(rng),
        points: half_points(rng, players.min(99)),
        rank: maybe(rng, |r| r.gen_range(0..=players)),
        games: (1..=rounds).map(|round| game(rng, players, round)).collect(),
        national_player_by_federation: Default::default(),
    };
    for federation in ["ENG", "FRA", "GER"] {
        if rng.gen_bool(0.2) {
            player
                .national_player_by_federation
                .insert(federation.to_string(), national(rng, id));
        }
    }
    player
}

fn team(rng: &mut StdRng, id: u32) -> Team {
    Team {
        id,
        name: letters(rng, MAX_NAME_SIZE, true),
        nickname: letters(rng, 5, false),
        strength_factor: rng.gen_range(0..=3000),
        match_points: half_points(rng, 30),
        game_points: half_points(rng, 99),
        rank: maybe(rng, |r| r.gen_range(1..=999)),
        player_ids: (0..rng.gen_range(0..=6))
            .map(|_| rng.gen_range(1..=9999))
            .collect(),
    }
}

fn ids(rng: &mut StdRng, min: usize, max: usize) -> Vec<u32> {
    (0..rng.gen_range(min..=max))
        .map(|_| rng.gen_range(1..=9999))
        .collect()
}

fn optional_ids(rng: &mut StdRng, max: usize) -> Vec<Option<u32>> {
    (0..rng.gen_range(0..=max))
        .map(|_| maybe(rng, |r| r.gen_range(1..=9999)))
        .collect()
}

fn point_system(rng: &mut StdRng, symbols: &[&str]) -> FieldMap<f64> {
    let mut system = FieldMap::new();
    for symbol in symbols {
        if rng.gen_bool(0.6) {
            system.insert(*symbol, half_points(rng, 9));
        }
    }
    system
}

fn team_pabs(rng: &mut StdRng) -> TeamPabs {
    let mut team_id_by_round = BTreeMap::new();
    for round in 1..=14 {
        if rng.gen_bool(0.4) {
            team_id_by_round.insert(round, rng.gen_range(1..=999));
        }
    }
    TeamPabs {
        match_points: maybe(rng, |r| half_points(r, 4)),
        game_points: half_points(rng, 9),
        team_id_by_round,
    }
}

fn tournament(rng: &mut StdRng) -> Tournament {
    let players = rng.gen_range(2..=MAX_PLAYERS);
    let mut t = Tournament {
        name: letters(rng, MAX_NAME_SIZE, true),
        city: letters(rng, MAX_NAME_SIZE, true),
        federation: letters(rng, 3, false),
        start_date: date(rng),
        end_date: date(rng),
        num_players: players,
        num_rated_players: rng.gen_range(0..players),
        num_teams: rng.gen_range(0..players),
        tournament_type: letters(rng, MAX_NAME_SIZE, true),
        encoded_type: letters(rng, MAX_NAME_SIZE, false),
        chief_arbiter: letters(rng, MAX_NAME_SIZE, true),
        deputy_arbiters: vec![letters(rng, MAX_NAME_SIZE, true)],
        allotted_time: letters(rng, MAX_NAME_SIZE, true),
        time_control: letters(rng, MAX_NAME_SIZE, false),
        round_dates: (0..rng.gen_range(0..=14)).map(|_| date(rng)).collect(),
        num_rounds: rng.gen_range(0..=14),
        initial_color: letters(rng, 6, false),
        individuals_point_system: point_system(rng, &["W", "D", "L", "Z", "U", "FW", "FL"]),
        teams_point_system: point_system(rng, &["TW", "TD", "TL"]),
        starting_rank_method: letters(rng, 10, false),
        pairing_controller_id: letters(rng, 10, false),
        tie_breaks: (0..rng.gen_range(0..=4))
            .map(|_| letters(rng, 8, false))
            .filter(|label| !label.is_empty())
            .collect(),
        standings_tie_breaks: Vec::new(),
        board_color_sequence: letters(rng, 4, false),
        players: (1..=players).map(|id| player(rng, id, players)).collect(),
        ..Default::default()
    };

    t.teams = (1..=rng.gen_range(0..=8)).map(|id| team(rng, id)).collect();
    t.deprecated_teams = (0..rng.gen_range(0..=2))
        .map(|_| DeprecatedTeam {
            name: letters(rng, MAX_NAME_SIZE, true),
            player_ids: ids(rng, 0, 5),
        })
        .collect();
    t.round_byes = (0..rng.gen_range(0..=3))
        .map(|_| RoundBye {
            kind: pick(rng, "FHZ"),
            round: rng.gen_range(1..=14),
            pairing_numbers: ids(rng, 1, 4),
        })
        .collect();
    t.accelerated_rounds = (0..rng.gen_range(0..=3))
        .map(|_| AcceleratedRound {
            match_points: maybe(rng, |r| half_points(r, 9)),
            game_points: maybe(rng, |r| half_points(r, 9)),
            first_round: rng.gen_range(1..=14),
            last_round: maybe(rng, |r| r.gen_range(1..=14)),
            first_id: rng.gen_range(1..=9999),
            last_id: rng.gen_range(1..=9999),
        })
        .collect();
    t.prohibited_pairings = (0..rng.gen_range(0..=2))
        .map(|_| ProhibitedPairing {
            first_round: rng.gen_range(1..=14),
            last_round: maybe(rng, |r| r.gen_range(1..=14)),
            pairing_numbers: ids(rng, 2, 5),
        })
        .collect();
    t.team_pabs = maybe(rng, team_pabs);
    t.team_forfeited_matches = (0..rng.gen_range(0..=3))
        .map(|_| TeamForfeitedMatch {
            kind: ["++", "+-", "-+", "--"].choose(rng).unwrap().to_string(),
            round: rng.gen_range(1..=14),
            white_team_id: rng.gen_range(1..=999),
            black_team_id: rng.gen_range(1..=999),
        })
        .collect();
    t.oodo_team_pairings = (0..rng.gen_range(0..=3))
        .map(|_| OodoTeamPairing {
            round: rng.gen_range(1..=14),
            team_id: rng.gen_range(1..=999),
            opponent_team_id: rng.gen_range(1..=999),
            boards: optional_ids(rng, 6),
        })
        .collect();
    t.abnormal_points_assignments = (0..rng.gen_range(0..=3))
        .map(|_| AbnormalPointsAssignment {
            kind: pick(rng, "DWLFHZ+-"),
            match_points: maybe(rng, |r| half_points(r, 4) - 1.0),
            game_points: maybe(rng, |r| half_points(r, 9)),
            round: maybe(rng, |r| r.gen_range(1..=14)),
            pairing_numbers: optional_ids(rng, 4),
        })
        .collect();
    t.informative_team_pairings_records = (0..rng.gen_range(0..=3))
        .map(|_| letters(rng, 60, true))
        .collect();
    t.informative_team_results_records = (0..rng.gen_range(0..=3))
        .map(|_| letters(rng, 60, true))
        .collect();

    for _ in 0..rng.gen_range(0..=5) {
        let key = format!("XX{}", pick(rng, "ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
        let value = letters(rng, MAX_NAME_SIZE, true);
        t.xx_fields.insert(key, value);
    }
    for _ in 0..rng.gen_range(0..=3) {
        let key = format!("BB{}", pick(rng, "WDLZF"));
        let value = format!("{:.1}", half_points(rng, 2));
        t.bb_fields.insert(key, value);
    }
    t
}

fn assert_same_players(decoded: &Tournament, original: &Tournament, cycle: usize) {
    assert_eq!(decoded.players.len(), original.players.len());
    for (player, expected) in decoded.players.iter().zip(&original.players) {
        let context = format!("player {} in cycle {}", expected.id, cycle);
        assert_eq!(player.id, expected.id, "{context}");
        assert_eq!(player.sex, expected.sex, "{context}");
        assert_eq!(player.title, expected.title, "{context}");
        assert_eq!(player.name, expected.name, "{context}");
        assert_eq!(player.rating, expected.rating, "{context}");
        assert_eq!(player.federation, expected.federation, "{context}");
        assert_eq!(player.fide_id, expected.fide_id, "{context}");
        assert_eq!(player.birth_date, expected.birth_date, "{context}");
        assert_eq!(player.points, expected.points, "{context}");
        assert_eq!(player.rank, expected.rank, "{context}");
        assert_eq!(player.games, expected.games, "{context}");
    }
}

#[test]
fn test_random_tournaments_survive_repeated_round_trips() {
    for seed in 0..TOURNAMENTS {
        let mut rng = StdRng::seed_from_u64(seed);
        let original = tournament(&mut rng);
        let first = dumps(&original);

        let mut text = first.clone();
        for cycle in 1..=CYCLES {
            let decoded = loads(&text).unwrap_or_else(|e| panic!("seed {seed}: {e}"));
            assert_same_players(&decoded, &original, cycle);
            assert_eq!(decoded, original, "seed {seed}, cycle {cycle}");

            text = dumps(&decoded);
            assert_eq!(text, first, "seed {seed}, cycle {cycle}");
        }
    }
}

#[test]
fn test_truncated_fields_become_stable_after_first_pass() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut original = tournament(&mut rng);
    original.players[0].name = "Z".repeat(50);
    original.players[0].title = "ABCD".to_string();
    if let Some(team) = original.teams.first_mut() {
        team.name = "Y".repeat(40);
    }

    let once = dumps(&loads(&dumps(&original)).unwrap());
    let decoded = loads(&once).unwrap();
    assert_eq!(decoded.players[0].name, "Z".repeat(33));
    assert_eq!(decoded.players[0].title, "ABC");
    assert_eq!(dumps(&decoded), once);
}
