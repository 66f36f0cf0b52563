#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Amount is empty!")]
    EmptyAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Precision {0} is too large")]
    PrecisionTooLarge(usize),

    #[error("Amount is out of range")]
    Overflow,

    #[error("Unexpected table row: {0}")]
    InvalidRow(String),
}
