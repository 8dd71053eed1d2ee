//! Error taxonomy shared by every codec and the hasher.

use thiserror::Error;

/// Errors from encode, decode, and hash operations.
///
/// Each operation is all-or-nothing: the first failure aborts and is
/// wrapped with the name of the failing field or section on the way out.
/// No partial report or hash is ever surfaced.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input outside its valid size bounds (addresses, hex strings, blobs).
    #[error("invalid length for {field}: expected {expected}, got {got}")]
    InputLength {
        field: String,
        expected: String,
        got: usize,
    },

    /// Structural or hex decode failure.
    #[error("malformed {context}: {reason}")]
    MalformedEncoding { context: String, reason: String },

    /// A mandatory field was absent after tag dispatch.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Unrecognized 4-byte extra-args tag.
    #[error("unknown extra args tag 0x{tag}")]
    UnknownTag { tag: String },

    /// Decode succeeded but left unconsumed input.
    #[error("trailing bytes after decoding {context}")]
    TrailingData { context: String },

    /// A nested failure, wrapped with the field or section being processed.
    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<CodecError>,
    },

    #[error("{0}")]
    Other(String),
}

impl CodecError {
    /// Wrap an error with the name of the field or section it occurred in.
    pub fn in_field(field: impl Into<String>, source: CodecError) -> Self {
        CodecError::Field {
            field: field.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_names() {
        let err = CodecError::InputLength {
            field: "address".into(),
            expected: "1..=32 bytes".into(),
            got: 33,
        };
        assert_eq!(err.to_string(), "invalid length for address: expected 1..=32 bytes, got 33");
    }

    #[test]
    fn wrapped_errors_chain_context() {
        let inner = CodecError::MissingField { field: "gasLimit".into() };
        let outer = CodecError::in_field("token price updates", inner);
        assert_eq!(
            outer.to_string(),
            "token price updates: missing required field: gasLimit"
        );
    }
}
