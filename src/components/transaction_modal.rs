use crate::{
    i18n::Translator,
    state::{BlockExplorers, ChainState, ChainStateStoreFields},
    utils::shorten_transaction_id,
};
use leptos::{html::Dialog, prelude::*};
use lucide_leptos::{ExternalLink, X};
use reactive_stores::Store;
use rex_sdk::ActionKind;
use tracing::info;

/// Dialog wrapping a confirmation step. Below the given content it follows the
/// status of `action`: pending, the resulting transaction, or the failure.
#[component]
pub fn TransactionModal(
    #[prop(into)] title: String,
    #[prop(into)] action: Signal<ActionKind>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    info!("rendering <TransactionModal/>");

    on_cleanup(move || {
        info!("cleaning up <TransactionModal/>");
    });

    let chain = use_context::<Store<ChainState>>().expect("chain store context missing!");
    let explorers = use_context::<BlockExplorers>().expect("block explorers context missing!");
    let i18n = use_context::<Translator>().expect("translator context missing!");

    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    let status = Memo::new(move |_| chain.system().read().status(action.get()).cloned());

    let transaction_details = move || {
        let status = status.get()?;

        if status.pending {
            return Some(
                view! {
                    <p class="text-sm text-muted-foreground">
                        {i18n.t("global_transaction_pending")}
                    </p>
                }
                .into_any(),
            );
        }

        if let Some(error) = status.last_error {
            return Some(
                view! {
                    <p role="alert" class="text-sm font-semibold text-gold">
                        {i18n.t_with("global_transaction_failed", &[("error", error.as_str())])}
                    </p>
                }
                .into_any(),
            );
        }

        let transaction = status.last_transaction?;
        let contract = status
            .last_contract
            .map(|contract| format!("{}::{}", contract.account, contract.action))
            .unwrap_or_default();

        let links = explorers
            .iter()
            .map(|explorer| {
                let href = explorer.transaction_link(&transaction.transaction_id);
                let label = i18n.t_with("global_transaction_view_on", &[("explorer", explorer.name)]);
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-1 text-sm"
                    >
                        {label}
                        <ExternalLink size=14 />
                    </a>
                }
            })
            .collect_view();

        Some(
            view! {
                <div class="space-y-1">
                    <p class="text-sm font-semibold">{i18n.t("global_transaction_complete")}</p>
                    <p class="text-xs text-muted-foreground font-mono">
                        {contract} " " {shorten_transaction_id(&transaction.transaction_id)}
                    </p>
                    <div class="flex flex-col gap-1">{links}</div>
                </div>
            }
            .into_any(),
        )
    };

    view! {
        <dialog
            node_ref=dialog_ref
            on:close=move |_| on_close.run(())
            class="inset-0 p-4 min-w-80 rounded-md border-neutral-200"
        >
            <div class="flex flex-col gap-4">
                <div class="flex items-center justify-between">
                    <h3 class="m-0 text-base font-semibold">{title}</h3>
                    <button
                        aria-label=i18n.t("common:close")
                        class="p-1 border-none bg-transparent"
                        on:click=move |_| on_close.run(())
                    >
                        <X size=16 />
                    </button>
                </div>
                {children()}
                {transaction_details}
            </div>
        </dialog>
    }
}
