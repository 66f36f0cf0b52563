mod rpc;
mod wallet;

pub use rpc::{ChainRpc, GetTableRowsParams};
pub use wallet::{PermissionLevel, RexAction, SharedWallet, Unlinked, Wallet};
