use thiserror::Error;

/// Error decoding JSON bytes into a structured value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed input: {source}")]
    MalformedInput {
        #[from]
        source: serde_json::Error,
    },
}

/// Error converting a script value into the structured model.
///
/// Both variants are hard failures: a value that cannot be represented is
/// never coerced to null or silently dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("self-referential table (identity {identity:#x})")]
    Cycle { identity: usize },

    #[error("cannot convert {kind} value")]
    UnsupportedKind { kind: &'static str },
}

impl ConvertError {
    pub fn cycle(identity: usize) -> Self {
        Self::Cycle { identity }
    }

    pub fn unsupported_kind(kind: &'static str) -> Self {
        Self::UnsupportedKind { kind }
    }
}
