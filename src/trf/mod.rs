mod codec;
pub mod dates;
mod entry;
mod error;
pub mod federation;
mod fields;
pub mod json;
mod types;

pub use codec::{
    DumpOptions, dump, dump_lines, dump_lines_with, dumps, dumps_with, load, load_lines, loads,
};
pub use error::{Result, TrfError};
pub use types::{
    AbnormalPointsAssignment, AcceleratedRound, DeprecatedTeam, FieldMap, Game, NationalPlayer,
    OodoTeamPairing, Player, ProhibitedPairing, RoundBye, Team, TeamForfeitedMatch, TeamPabs,
    Tournament,
};
