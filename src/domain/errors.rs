use thiserror::Error;

/// Reason a single quote field was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldErrorKind {
    #[error("expected a number, boolean, or numeric string")]
    UnsupportedType,

    #[error("text is not a plain non-negative number")]
    NonNumericText,

    #[error("expected a whole number")]
    NotAnInteger,

    #[error("value {value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Errors surfaced by the quoting pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Model not loaded: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Invalid value for {field}: {kind}")]
    InvalidField {
        field: &'static str,
        kind: FieldErrorKind,
    },

    #[error("Prediction failed: {reason}")]
    Inference { reason: String },
}
