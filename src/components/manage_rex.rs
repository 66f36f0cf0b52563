use crate::{
    components::{BalanceSummary, FormMessageError, TokenField, TransactionModal},
    constants::CORE_PRECISION,
    i18n::Translator,
    state::{Actions, ChainState, ChainStateStoreFields, Connection, Settings},
    utils::display_preview,
};
use leptos::{either::Either, ev, prelude::*};
use reactive_stores::Store;
use rex_sdk::{
    balance_table_requests,
    manage::{Field, Submission},
    reduce,
    tables::{EOSIO, REX_PRECISION, REX_SYMBOL},
    ActionKind, ManageEvent, ManageState, TableRequest, TransactionType, PRICE_OF_REX,
};
use tracing::{debug, error, info};

/// Buy or sell REX against the account's REX fund.
#[component]
pub fn ManageRex() -> impl IntoView {
    info!("rendering <ManageRex/>");

    on_cleanup(move || {
        info!("cleaning up <ManageRex/>");
    });

    let actions = use_context::<Actions>().expect("actions context missing!");
    let chain = use_context::<Store<ChainState>>().expect("chain store context missing!");
    let settings = use_context::<Settings>().expect("settings context missing!");
    let connection = use_context::<Connection>().expect("connection context missing!");
    let i18n = use_context::<Translator>().expect("translator context missing!");

    let chain_symbol = connection.chain_symbol;

    // forget results of transactions made on an earlier visit
    actions.clear_system_state();

    // Actions

    let refresh_table = Action::new_local({
        let actions = actions.clone();
        move |request: &TableRequest| {
            let actions = actions.clone();
            let request = request.clone();
            async move { actions.get_table_by_bounds(&request).await }
        }
    });

    let submit = Action::new_local(move |submission: &Submission| {
        let actions = actions.clone();
        let Submission { action, amount } = submission.clone();
        async move {
            match action {
                ActionKind::BuyRex => actions.buyrex(amount).await,
                ActionKind::SellRex => actions.sellrex(amount).await,
            }
        }
    });

    let account = settings.account.get_untracked();
    debug!("loading REX balances for {account:?}");
    for request in balance_table_requests(&account) {
        _ = refresh_table.dispatch(request);
    }

    Effect::new(move |_| {
        if let Some(Err(error)) = refresh_table.value().get() {
            error!("balance refresh failed: {error}");
        }
    });

    // State

    let state = RwSignal::new(ManageState::default());

    let loaded = Memo::new(move |_| chain.tables().read().is_loaded(EOSIO, EOSIO));
    let balances = Memo::new(move |_| {
        chain
            .tables()
            .read()
            .balances(&settings.account.get(), chain_symbol)
    });

    let dispatch = move |event: ManageEvent| {
        debug!("{event:?}");
        let balances = balances.get_untracked();
        state.update(|state| *state = reduce(std::mem::take(state), &event, &balances));
    };

    let transaction_type = Memo::new(move |_| state.read().transaction_type);
    let confirming = Memo::new(move |_| state.read().confirming);
    let save_disabled = Memo::new(move |_| state.read().save_disabled());
    let display_success_message = Memo::new(move |_| state.read().display_success_message());
    let error = Signal::derive(move || state.read().error);
    let amount_to_buy = Memo::new(move |_| state.read().amount_to_buy.clone());
    let amount_to_sell = Memo::new(move |_| state.read().amount_to_sell.clone());
    let preview = Memo::new(move |_| state.read().preview(PRICE_OF_REX));
    let action_kind = Signal::derive(move || transaction_type.get().action());
    let any_pending = Memo::new(move |_| chain.system().read().any_pending());

    // on:click handlers

    let confirm_transaction = move |_: ev::MouseEvent| {
        if let Some(submission) = state.read_untracked().submission() {
            _ = submit.dispatch(submission);
        }
    };

    let cancel = move |_: ev::MouseEvent| dispatch(ManageEvent::Cancel);

    // HTML Elements

    let header = move || {
        view! {
            <div class="space-y-1">
                <h2 class="m-0 text-xl font-semibold">
                    {i18n.t_with("rex_interface_manage_rex_header", &[("chainSymbol", chain_symbol)])}
                </h2>
                <p class="m-0 text-sm text-muted-foreground">
                    {i18n.t_with("rex_interface_manage_rex_subheader", &[("chainSymbol", chain_symbol)])}
                </p>
            </div>
        }
    };

    let confirmation_text = move || {
        let Some(preview) = preview.get() else {
            return String::new();
        };
        let amount = preview.amount.to_string();
        let rex_amount = display_preview(preview.rex_amount);

        match transaction_type.get() {
            TransactionType::Buy => i18n.t_with(
                "rex_interface_manage_rex_confirmation_modal_buy_rex",
                &[("amountToBuy", amount.as_str()), ("rexAmount", rex_amount.as_str())],
            ),
            TransactionType::Sell => i18n.t_with(
                "rex_interface_manage_rex_confirmation_modal_sell_rex",
                &[("amountToSell", amount.as_str()), ("rexAmount", rex_amount.as_str())],
            ),
        }
    };

    let success_message = move || {
        if !display_success_message.get() {
            return None;
        }
        let preview = preview.get()?;
        let key = match transaction_type.get() {
            TransactionType::Buy => "rex_interface_manage_rex_amount_to_buy",
            TransactionType::Sell => "rex_interface_manage_rex_amount_to_sell",
        };
        let amount = preview.amount.to_string();
        let rex_amount = display_preview(preview.rex_amount);

        Some(view! {
            <div class="py-2 px-3 text-sm rounded-md bg-secondary text-secondary-foreground">
                {i18n.t_with(key, &[("amount", amount.as_str()), ("rexAmount", rex_amount.as_str())])}
            </div>
        })
    };

    let amount_field = move || match transaction_type.get() {
        TransactionType::Buy => Either::Left(view! {
            <TokenField
                field=Field::AmountToBuy
                label=i18n.t_with("rex_interface_manage_rex_buy", &[("chainSymbol", chain_symbol)])
                symbol=chain_symbol
                precision=CORE_PRECISION
                amount=amount_to_buy
                on_change=Callback::new(dispatch)
            />
        }),
        TransactionType::Sell => Either::Right(view! {
            <TokenField
                field=Field::AmountToSell
                label=i18n.t_with("rex_interface_manage_rex_sell", &[("chainSymbol", chain_symbol)])
                symbol=REX_SYMBOL
                precision=REX_PRECISION
                amount=amount_to_sell
                on_change=Callback::new(dispatch)
            />
        }),
    };

    let form = move || {
        view! {
            <BalanceSummary balances=balances />
            <form class="flex flex-col gap-4" on:submit=|ev| ev.prevent_default()>
                <div class="flex flex-col sm:flex-row gap-4">
                    <label class="flex flex-col gap-1 w-full">
                        <span class="text-sm font-semibold">
                            {i18n.t("rex_interface_transaction_type_label")}
                        </span>
                        <select
                            autofocus=true
                            name=Field::TransactionType.name()
                            class="py-1.5 px-3 rounded-md border border-solid border-muted bg-background"
                            prop:value=move || transaction_type.get().as_str()
                            on:change=move |ev| {
                                dispatch(
                                    ManageEvent::change(
                                        Field::TransactionType,
                                        event_target_value(&ev),
                                        true,
                                    ),
                                )
                            }
                        >
                            {TransactionType::ALL
                                .into_iter()
                                .map(|transaction_type| {
                                    view! {
                                        <option value=transaction_type.as_str()>
                                            {i18n
                                                .t(
                                                    &format!(
                                                        "rex_interface_manage_rex_options_{transaction_type}",
                                                    ),
                                                )}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    {amount_field}
                </div>
                {success_message}
                <FormMessageError error=error />
                <button
                    type="button"
                    class="py-2 px-4 rounded-md border-none bg-primary text-primary-foreground font-medium"
                    disabled=move || save_disabled.get()
                    on:click=move |_| dispatch(ManageEvent::Confirm)
                >
                    {move || match transaction_type.get() {
                        TransactionType::Buy => i18n.t("rex_interface_manage_rex_buy_button"),
                        TransactionType::Sell => i18n.t("rex_interface_manage_rex_sell_button"),
                    }}
                </button>
            </form>
        }
    };

    // nothing is shown until the system tables have been read
    move || {
        loaded.get().then(|| {
            view! {
                <div class="flex flex-col gap-4 max-w-lg">
                    {header}
                    <Show when=move || confirming.get() fallback=form>
                        <TransactionModal
                            title=i18n.t("rex_interface_manage_rex_confirmation_modal_header")
                            action=action_kind
                            on_close=move || dispatch(ManageEvent::Close)
                        >
                            <p>{confirmation_text}</p>
                            <div class="flex justify-between gap-2">
                                <button
                                    type="button"
                                    class="py-2 px-4 rounded-md border-none bg-secondary text-secondary-foreground"
                                    on:click=cancel
                                >
                                    {i18n.t("common:cancel")}
                                </button>
                                <button
                                    type="button"
                                    class="py-2 px-4 rounded-md border-none bg-green-600 text-white"
                                    disabled=move || any_pending.get() || submit.pending().get()
                                    on:click=confirm_transaction
                                >
                                    {i18n.t("common:confirm")}
                                </button>
                            </div>
                        </TransactionModal>
                    </Show>
                </div>
            }
        })
    }
}
