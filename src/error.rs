// The Serialize and Deserialize traits are derived to ensure that Errors can be
// transmitted to or from a server, which is necessary for them to function as Resources.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Chain RPC error: {0}")]
    Rpc(String),

    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("Invalid chain data: {0}")]
    Chain(String),

    #[error("No wallet is linked!")]
    WalletUnavailable,
}

impl Error {
    pub fn rpc(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Rpc(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Rpc(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

impl From<rex_sdk::Error> for Error {
    fn from(error: rex_sdk::Error) -> Self {
        Error::Chain(error.to_string())
    }
}
