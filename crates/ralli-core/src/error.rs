//! Error types for the Ralli admin console

/// Main error type for the Ralli admin console
///
/// The first group of variants are rejections of a user action. Their display
/// text is shown to the user verbatim as an error notification, so keep the
/// wording user-facing. The remaining variants are infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required form field was empty
    #[error("Please fill in all fields")]
    IncompleteForm {
        /// Names of the empty fields
        missing: Vec<String>,
    },

    /// The selected sport is not part of the catalog
    #[error("Unknown sport: {sport}")]
    UnknownSport {
        /// Sport name as submitted
        sport: String,
    },

    /// A line threshold that does not parse as a finite number
    #[error("Line value must be a number")]
    InvalidLineValue {
        /// Raw submitted value
        value: String,
    },

    /// A line referenced a player or stat type that does not exist
    #[error("Selected player or stat type was not found")]
    MissingReference {
        /// Submitted player id
        player_id: String,
        /// Submitted stat type id
        stat_type_id: String,
    },

    /// A record looked up by id does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. `Line`
        kind: &'static str,
        /// Requested id
        id: String,
    },

    /// A status change on a record that is no longer active
    #[error("{kind} {id} is already {status}")]
    InvalidTransition {
        /// Record kind, e.g. `Game`
        kind: &'static str,
        /// Record id
        id: String,
        /// Current status of the record
        status: String,
    },

    /// A value that does not parse into the expected enumeration
    #[error("Invalid {field}: {value}")]
    InvalidValue {
        /// Field being parsed
        field: &'static str,
        /// Raw value
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error rejects a user action rather than reporting an
    /// infrastructure failure
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::IncompleteForm { .. }
                | Self::UnknownSport { .. }
                | Self::InvalidLineValue { .. }
                | Self::MissingReference { .. }
                | Self::NotFound { .. }
                | Self::InvalidTransition { .. }
                | Self::InvalidValue { .. }
        )
    }
}
