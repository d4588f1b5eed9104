/// Everything that can go wrong before a single instruction is emitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },
    #[error("number out of range: {token}")]
    OutOfRange { token: String },
    /// The same value reached the solver twice.
    #[error("duplicate value: {value}")]
    Duplicate { value: i32 },
    #[error("invalid instruction: {line:?}")]
    InvalidMove { line: String },
    #[error("failed to read instructions: {0}")]
    Read(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
