use crate::{
    state::{ChainState, ChainStateStoreFields},
    support::{ChainRpc, RexAction, SharedWallet},
    Error,
};
use async_trait::async_trait;
use leptos::prelude::*;
use reactive_stores::Store;
use rex_sdk::{Asset, TableRequest};
use tracing::{debug, error, info};

/// The action creators the manage screen is given. They report their outcome
/// through the shared chain store, not through the form.
#[async_trait(?Send)]
pub trait RexActions {
    /// Forgets the status of previously submitted actions.
    fn clear_system_state(&self);

    async fn get_table_by_bounds(&self, request: &TableRequest) -> Result<(), Error>;

    async fn buyrex(&self, amount: Asset) -> Result<(), Error>;

    async fn sellrex(&self, rex: Asset) -> Result<(), Error>;
}

/// Reads tables from a node and submits actions through the linked wallet.
pub struct ChainActions {
    rpc: ChainRpc,
    wallet: SharedWallet,
    account: Signal<String>,
    chain: Store<ChainState>,
}

impl ChainActions {
    pub fn new(
        rpc: ChainRpc,
        wallet: SharedWallet,
        account: Signal<String>,
        chain: Store<ChainState>,
    ) -> Self {
        Self {
            rpc,
            wallet,
            account,
            chain,
        }
    }

    async fn submit(&self, action: RexAction) -> Result<(), Error> {
        let kind = action.kind();
        debug!("submitting {kind}: {:?}", action.to_json());

        self.chain
            .system()
            .update(|system| system.begin(kind, action.contract()));

        match self.wallet.transact(&action).await {
            Ok(receipt) => {
                info!("{kind} included in transaction {}", receipt.transaction_id);
                self.chain
                    .system()
                    .update(|system| system.succeed(kind, receipt));
                Ok(())
            }
            Err(error) => {
                error!("{kind} failed: {error}");
                self.chain
                    .system()
                    .update(|system| system.fail(kind, &error));
                Err(error)
            }
        }
    }
}

#[async_trait(?Send)]
impl RexActions for ChainActions {
    fn clear_system_state(&self) {
        self.chain.system().update(|system| system.clear());
    }

    async fn get_table_by_bounds(&self, request: &TableRequest) -> Result<(), Error> {
        let rows = self
            .rpc
            .get_table_rows(request)
            .await
            .inspect_err(|error| error!("{}: {error}", request.table))?;

        self.chain
            .tables()
            .update(|tables| tables.insert(request.key(), rows));

        Ok(())
    }

    async fn buyrex(&self, amount: Asset) -> Result<(), Error> {
        let from = self.account.get_untracked();
        self.submit(RexAction::BuyRex { from, amount }).await
    }

    async fn sellrex(&self, rex: Asset) -> Result<(), Error> {
        let from = self.account.get_untracked();
        self.submit(RexAction::SellRex { from, rex }).await
    }
}
