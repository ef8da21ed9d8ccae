use thiserror::Error;

/// Errors raised while decoding (or writing) a tournament report.
#[derive(Debug, Error)]
pub enum TrfError {
    /// A line carried a known record code but its data did not fit the record's columns.
    #[error("{record} data not matching pattern: {data}")]
    MalformedRecord { record: &'static str, data: String },

    /// A national rating record pointed at a player id that was never declared.
    #[error("National player entry ({federation}) for unknown player [{player_id}]")]
    UnknownPlayer { federation: String, player_id: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrfError {
    pub(crate) fn malformed(record: &'static str, data: &str) -> Self {
        Self::MalformedRecord {
            record,
            data: data.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrfError>;

#[cfg(test)]
mod tests {
    use super::TrfError;

    #[test]
    fn test_malformed_message_carries_raw_data() {
        let err = TrfError::malformed("Player", "   x garbage");
        assert_eq!(
            err.to_string(),
            "Player data not matching pattern:    x garbage"
        );
    }

    #[test]
    fn test_unknown_player_message_names_id() {
        let err = TrfError::UnknownPlayer {
            federation: "GER".to_string(),
            player_id: 42,
        };
        assert!(err.to_string().contains("[42]"));
        assert!(err.to_string().contains("GER"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: TrfError = io.into();
        assert!(matches!(err, TrfError::Io(_)));
    }
}
