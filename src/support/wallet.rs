use crate::Error;
use async_trait::async_trait;
use rex_sdk::{system::ContractInfo, ActionKind, Asset, TransactionReceipt};
use serde::Serialize;
use std::rc::Rc;

pub const SYSTEM_CONTRACT: &str = "eosio";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PermissionLevel {
    pub actor: String,
    pub permission: String,
}

/// A REX action as the system contract expects its data.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RexAction {
    BuyRex { from: String, amount: Asset },
    SellRex { from: String, rex: Asset },
}

impl RexAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            RexAction::BuyRex { .. } => ActionKind::BuyRex,
            RexAction::SellRex { .. } => ActionKind::SellRex,
        }
    }

    pub fn actor(&self) -> &str {
        match self {
            RexAction::BuyRex { from, .. } | RexAction::SellRex { from, .. } => from,
        }
    }

    pub fn contract(&self) -> ContractInfo {
        ContractInfo {
            account: SYSTEM_CONTRACT.to_string(),
            action: self.kind().action_name().to_string(),
        }
    }

    pub fn authorization(&self) -> Vec<PermissionLevel> {
        vec![PermissionLevel {
            actor: self.actor().to_string(),
            permission: "active".to_string(),
        }]
    }

    /// The action in the `{ account, name, authorization, data }` shape wallets sign.
    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::json!({
            "account": SYSTEM_CONTRACT,
            "name": self.kind().action_name(),
            "authorization": self.authorization(),
            "data": serde_json::to_value(self)?,
        }))
    }
}

/// Signs and broadcasts actions on behalf of the user.
#[async_trait(?Send)]
pub trait Wallet {
    async fn transact(&self, action: &RexAction) -> Result<TransactionReceipt, Error>;
}

pub type SharedWallet = Rc<dyn Wallet>;

/// Used until a signing wallet is linked. Every submission fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unlinked;

#[async_trait(?Send)]
impl Wallet for Unlinked {
    async fn transact(&self, _action: &RexAction) -> Result<TransactionReceipt, Error> {
        Err(Error::WalletUnavailable)
    }
}
