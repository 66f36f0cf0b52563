use crate::{actions::RexActions, constants::*};
use leptos::prelude::*;
use reactive_stores::Store;
use rex_sdk::{SystemStatus, TableSnapshot};
use send_wrapper::SendWrapper;
use std::{ops::Deref, rc::Rc};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub url: RwSignal<String>,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: RwSignal::new(url.into()),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(NODE)
    }
}

impl Deref for Endpoint {
    type Target = RwSignal<String>;
    fn deref(&self) -> &Self::Target {
        &self.url
    }
}

/// The signed-in account, persisted in local storage.
#[derive(Copy, Clone)]
pub struct Settings {
    pub account: Signal<String>,
    pub set_account: WriteSignal<String>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub chain_id: &'static str,
    pub chain_symbol: &'static str,
}

impl Default for Connection {
    fn default() -> Self {
        Self {
            chain_id: CHAIN_ID,
            chain_symbol: CHAIN_SYMBOL,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockExplorer {
    pub name: &'static str,
    /// URL with a `{txid}` placeholder.
    pub transaction_url: &'static str,
}

impl BlockExplorer {
    pub fn transaction_link(&self, transaction_id: &str) -> String {
        self.transaction_url.replace("{txid}", transaction_id)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct BlockExplorers(pub &'static [BlockExplorer]);

impl Default for BlockExplorers {
    fn default() -> Self {
        Self(BLOCK_EXPLORERS)
    }
}

impl Deref for BlockExplorers {
    type Target = [BlockExplorer];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Chain data shared by every screen: table reads and action status.
#[derive(Store, Clone, Debug, Default)]
pub struct ChainState {
    pub tables: TableSnapshot,
    pub system: SystemStatus,
}

/// The action creators, provided as context.
// The actions hold browser handles, so they are pinned to the main thread.
#[derive(Clone)]
pub struct Actions(pub SendWrapper<Rc<dyn RexActions>>);

impl Actions {
    pub fn new(actions: impl RexActions + 'static) -> Self {
        Self(SendWrapper::new(Rc::new(actions)))
    }
}

impl Deref for Actions {
    type Target = dyn RexActions;

    fn deref(&self) -> &Self::Target {
        &**self.0
    }
}
