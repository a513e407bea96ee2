//! Error types for command line editing.

/// Result alias with the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while validating, parsing or editing a command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request was missing a required input or carried a malformed one.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The command line, or a single token of it, could not be parsed.
    #[error("failed to parse {input:?}: {reason}")]
    Parse {
        /// The text which failed to parse
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A value was assigned to a key-only switch.
    #[error("'{name}' is a bool argument")]
    BoolArgument {
        /// Name of the switch
        name: String,
    },
}

/// The broad class of an [`Error`], for hosts which report them distinctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::Validation`]
    Validation,
    /// See [`Error::Parse`]
    Parse,
    /// See [`Error::BoolArgument`]
    BoolArgument,
}

impl Error {
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::BoolArgument { .. } => ErrorKind::BoolArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::BoolArgument {
            name: "quiet".into(),
        };
        assert_eq!(e.to_string(), "'quiet' is a bool argument");
        assert_eq!(e.kind(), ErrorKind::BoolArgument);

        let e = Error::parse("foo=\"bar", "unterminated quote");
        assert_eq!(
            e.to_string(),
            "failed to parse \"foo=\\\"bar\": unterminated quote"
        );
        assert_eq!(e.kind(), ErrorKind::Parse);

        let e = Error::Validation("'name' should be set".into());
        assert_eq!(e.to_string(), "invalid request: 'name' should be set");
        assert_eq!(e.kind(), ErrorKind::Validation);
    }
}
