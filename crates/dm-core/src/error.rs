use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite demand value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative demand value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Empty series for {what}")]
    Empty { what: &'static str },

    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },
}
