use crate::{i18n::Translator, state::Connection, utils::display_balance};
use leptos::prelude::*;
use rex_sdk::RexBalances;

#[component]
pub fn BalanceSummary(#[prop(into)] balances: Signal<RexBalances>) -> impl IntoView {
    let i18n = use_context::<Translator>().expect("translator context missing!");
    let connection = use_context::<Connection>().expect("connection context missing!");

    let funded = move || {
        i18n.t_with(
            "rex_interface_rent_funding_balance",
            &[
                ("fundedBalance", display_balance(&balances.read().funded).as_str()),
                ("chainSymbol", connection.chain_symbol),
            ],
        )
    };
    let total = move || {
        i18n.t_with(
            "rex_interface_rent_rex_balance",
            &[("rexBalance", display_balance(&balances.read().total).as_str())],
        )
    };
    let matured = move || {
        i18n.t_with(
            "rex_interface_rent_rex_balance_mature",
            &[("rexBalance", display_balance(&balances.read().matured).as_str())],
        )
    };

    view! {
        <div class="p-3 space-y-1 text-sm rounded-md border border-solid border-muted">
            <p>{funded}</p>
            <p>{total}</p>
            <p>{matured}</p>
        </div>
    }
}
