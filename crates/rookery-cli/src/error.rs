//! Text-interface errors.

/// Errors raised while reading and interpreting player input.
///
/// Everything except [`Io`](CliError::Io) is recoverable: the controller
/// prints the message and asks again.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Input starts like a move but does not have the `a2 to a4` shape.
    #[error("could not read a move from '{input}', use the form: a2 to a4")]
    MalformedMove {
        /// The offending line.
        input: String,
    },

    /// A square name is off the board or not a square at all.
    #[error("'{input}' is not a square on the board")]
    InvalidSquare {
        /// The token that failed to parse.
        input: String,
    },

    /// A promotion answer names no piece kind.
    #[error("'{input}' is not a piece, choose knight, bishop, rook or queen")]
    UnknownPieceKind {
        /// The answer given.
        input: String,
    },

    /// A command is missing one of its arguments.
    #[error("'{command}' needs more arguments")]
    MissingArgument {
        /// The command word.
        command: String,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The setting name given.
        name: String,
    },

    /// `set` gave a value the setting does not accept.
    #[error("invalid value '{value}' for setting {name}")]
    InvalidSettingValue {
        /// The setting name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
