use std::rc::Rc;

use codee::string::FromToStringCodec;
use leptos::{ev::SubmitEvent, html::Input, prelude::*};
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use leptos_use::storage::use_local_storage;
use lucide_leptos::Wallet as WalletIcon;
use reactive_stores::Store;
use tracing::{debug, info};

pub mod actions;
pub mod components;
pub mod constants;
mod error;
pub mod i18n;
pub mod state;
pub mod support;
pub mod utils;

use actions::ChainActions;
use components::ManageRex;
use constants::ACCOUNT_STORAGE_KEY;
use i18n::Translator;
use state::{Actions, BlockExplorers, ChainState, Connection, Endpoint, Settings};
use support::{ChainRpc, SharedWallet, Unlinked};

pub use error::Error;

pub const BASE_URL: &str = "/rex-leptos";

#[component]
pub fn App(
    /// Signs and broadcasts REX actions. Without one, every submission fails
    /// with [`Error::WalletUnavailable`].
    #[prop(optional)]
    wallet: Option<SharedWallet>,
) -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    let (account, set_account, _) = use_local_storage::<String, FromToStringCodec>(ACCOUNT_STORAGE_KEY);

    provide_context(Endpoint::default());
    provide_context(Settings {
        account,
        set_account,
    });
    provide_context(Connection::default());
    provide_context(BlockExplorers::default());
    provide_context(Translator::english());
    provide_context(Store::new(ChainState::default()));

    let endpoint = use_context::<Endpoint>().expect("endpoint context missing!");
    let settings = use_context::<Settings>().expect("settings context missing!");
    let connection = use_context::<Connection>().expect("connection context missing!");
    let chain = use_context::<Store<ChainState>>().expect("chain store context missing!");
    let i18n = use_context::<Translator>().expect("translator context missing!");

    let wallet = wallet.unwrap_or_else(|| Rc::new(Unlinked));

    provide_context(Actions::new(ChainActions::new(
        ChainRpc::new(endpoint),
        wallet,
        settings.account,
        chain,
    )));

    Effect::new(move |_| info!("Endpoint set to {}", endpoint.get()));
    Effect::new(move |_| info!("Chain ID set to {}", connection.chain_id));
    Effect::new(move |_| debug!("Account set to {:?}", settings.account.get()));

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text=i18n.t("rex_interface_manage_rex_header") />
        <Router>
            <header>
                <div class="flex justify-between items-center gap-4">
                    <div
                        id="mainTitle"
                        class="my-2 font-bold text-3xl line-clamp-1 inline-flex items-center gap-2"
                    >
                        <WalletIcon size=28 />
                        "REX"
                    </div>
                    <AccountForm />
                </div>
                <hr />
            </header>
            <main class="p-2 overflow-x-auto">
                <Routes fallback=move || i18n.t("global_page_not_found")>
                    <Route path=path!("/rex-leptos") view=Home />
                    <Route path=path!("/rex-leptos/manage") view=Home />
                </Routes>
            </main>
        </Router>
    }
}

/// Mounts a fresh [`ManageRex`] for every account, so each account starts
/// with an untouched form and reloaded balances.
#[component]
fn Home() -> impl IntoView {
    info!("rendering <Home/>");

    let settings = use_context::<Settings>().expect("settings context missing!");
    let i18n = use_context::<Translator>().expect("translator context missing!");

    move || {
        let account = settings.account.get();
        if account.is_empty() {
            view! { <p class="text-sm">{i18n.t("global_settings_account_missing")}</p> }.into_any()
        } else {
            view! { <ManageRex /> }.into_any()
        }
    }
}

#[component]
pub fn AccountForm() -> impl IntoView {
    info!("rendering <AccountForm/>");

    let settings = use_context::<Settings>().expect("settings context missing!");
    let i18n = use_context::<Translator>().expect("translator context missing!");

    let account_input = NodeRef::<Input>::new();

    // The value is not read until the form is submitted.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = account_input
            .get()
            .expect("<input> should be mounted")
            .value()
            .trim()
            .to_string();
        settings.set_account.set(value);
    };

    view! {
        <form class="flex items-center gap-2" on:submit=on_submit>
            <label class="text-sm" for="account">
                {i18n.t("global_settings_account_label")}
            </label>
            <input
                id="account"
                type="text"
                autocomplete="username"
                value=settings.account.get_untracked()
                node_ref=account_input
                class="w-40"
            />
            <input type="submit" value=i18n.t("global_settings_account_update") />
        </form>
    }
}
