pub mod asset;
mod error;
pub mod manage;
pub mod system;
pub mod tables;

pub use asset::Asset;
pub use error::Error;
pub use manage::{reduce, FormError, ManageEvent, ManageState, TransactionType, PRICE_OF_REX};
pub use system::{ActionKind, SystemStatus, TransactionReceipt};
pub use tables::{balance_table_requests, RexBalances, TableRequest, TableRows, TableSnapshot};
