use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// The system actions this screen submits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    BuyRex,
    SellRex,
}

impl ActionKind {
    pub const ALL: [ActionKind; 2] = [ActionKind::BuyRex, ActionKind::SellRex];

    /// The on-chain action name.
    pub fn action_name(&self) -> &'static str {
        match self {
            ActionKind::BuyRex => "buyrex",
            ActionKind::SellRex => "sellrex",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::BuyRex => write!(f, "BUYREX"),
            ActionKind::SellRex => write!(f, "SELLREX"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: String,
    pub block_num: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub account: String,
    pub action: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub pending: bool,
    pub last_transaction: Option<TransactionReceipt>,
    pub last_contract: Option<ContractInfo>,
    pub last_error: Option<String>,
}

/// Status of every submitted action, shared across screens.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    actions: HashMap<ActionKind, ActionStatus>,
}

impl SystemStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: ActionKind) -> Option<&ActionStatus> {
        self.actions.get(&kind)
    }

    pub fn is_pending(&self, kind: ActionKind) -> bool {
        self.status(kind).is_some_and(|status| status.pending)
    }

    pub fn any_pending(&self) -> bool {
        ActionKind::ALL.iter().any(|kind| self.is_pending(*kind))
    }

    pub fn last_transaction(&self, kind: ActionKind) -> Option<&TransactionReceipt> {
        self.status(kind)
            .and_then(|status| status.last_transaction.as_ref())
    }

    pub fn last_contract(&self, kind: ActionKind) -> Option<&ContractInfo> {
        self.status(kind)
            .and_then(|status| status.last_contract.as_ref())
    }

    pub fn last_error(&self, kind: ActionKind) -> Option<&str> {
        self.status(kind)
            .and_then(|status| status.last_error.as_deref())
    }

    /// Marks `kind` as submitted, forgetting its previous outcome.
    pub fn begin(&mut self, kind: ActionKind, contract: ContractInfo) {
        self.actions.insert(
            kind,
            ActionStatus {
                pending: true,
                last_contract: Some(contract),
                ..Default::default()
            },
        );
    }

    pub fn succeed(&mut self, kind: ActionKind, transaction: TransactionReceipt) {
        let status = self.actions.entry(kind).or_default();
        status.pending = false;
        status.last_transaction = Some(transaction);
        status.last_error = None;
    }

    pub fn fail(&mut self, kind: ActionKind, error: impl ToString) {
        let status = self.actions.entry(kind).or_default();
        status.pending = false;
        status.last_transaction = None;
        status.last_error = Some(error.to_string());
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
