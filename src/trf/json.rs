//! JSON rendering of decoded tournaments for tools that do not speak TRF.

use super::types::Tournament;

pub fn to_json(t: &Tournament) -> serde_json::Result<String> {
    serde_json::to_string(t)
}

pub fn to_json_pretty(t: &Tournament) -> serde_json::Result<String> {
    serde_json::to_string_pretty(t)
}
