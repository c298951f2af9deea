//! Assertion failure type.

use thiserror::Error;

/// Why two JSON texts failed an equivalence assertion.
#[derive(Debug, Error)]
pub enum JsonEqError {
    /// The expected text is not valid JSON.
    #[error("Expected ('{text}') is not valid json.\n{source}")]
    InvalidExpected {
        text: String,
        #[source]
        source: serde_json::Error,
    },
    /// The actual text is not valid JSON.
    #[error("Actual ('{text}') is not valid json.\n{source}")]
    InvalidActual {
        text: String,
        #[source]
        source: serde_json::Error,
    },
    /// Neither text is valid JSON.
    #[error(
        "Expected ('{expected}') is not valid json.\n{expected_error}\n\
         Actual ('{actual}') is not valid json.\n{actual_error}"
    )]
    InvalidBoth {
        expected: String,
        expected_error: serde_json::Error,
        actual: String,
        actual_error: serde_json::Error,
    },
    /// Both texts decode but are not equivalent.
    #[error("Not equivalent JSON:\nexpected: {expected}\nactual:   {actual}")]
    NotEquivalent { expected: String, actual: String },
}

impl JsonEqError {
    /// `true` when at least one input failed to decode.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, JsonEqError::NotEquivalent { .. })
    }
}
