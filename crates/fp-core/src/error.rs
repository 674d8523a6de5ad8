use thiserror::Error;

pub type FpResult<T> = Result<T, FpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Not found: {what}")]
    NotFound { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
