//! Input and session errors.

/// Errors from parsing a line of player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A move needs exactly four tokens: column, row, column, row.
    #[error("expected 4 values like `C 6 D 5`, found {found}")]
    WrongTokenCount {
        /// Number of tokens found.
        found: usize,
    },

    /// A column token is not a single letter A-H.
    #[error("invalid column `{token}`, use a letter from A to H")]
    InvalidColumn {
        /// The offending token.
        token: String,
    },

    /// A row token is not a number.
    #[error("invalid row `{token}`, use a number from 1 to 8")]
    InvalidRow {
        /// The offending token.
        token: String,
    },

    /// A row number is outside 1-8.
    #[error("row {row} is off the board, use a number from 1 to 8")]
    RowOutOfRange {
        /// The parsed row.
        row: i64,
    },
}

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An I/O error occurred while reading input or drawing.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
