use leptos::{ev, prelude::*};
use rex_sdk::{manage::Field, Asset, ManageEvent};
use tracing::debug;

/// Amount input. Reports every keystroke as a field change: the formatted asset
/// (`"5.0000 EOS"`) when the text is a valid amount, `""` when it is empty, and
/// the raw text flagged invalid otherwise.
#[component]
pub fn TokenField(
    field: Field,
    #[prop(into)] label: String,
    #[prop(into)] symbol: String,
    precision: u8,
    #[prop(into)] amount: Signal<Option<Asset>>,
    #[prop(into)] on_change: Callback<ManageEvent>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let filled = Memo::new(move |_| amount.read().is_some());

    // The form drops the stored amount on cancel, close and type switch. Only
    // that transition resets the text; half-typed input like "." stays put.
    Effect::new(move |was_filled: Option<bool>| {
        let filled = filled.get();
        if clears_text(was_filled, filled) {
            set_text.set(String::new());
        }
        filled
    });

    let symbol_label = symbol.clone();

    let on_input = move |ev: ev::Event| {
        let input = event_target_value(&ev);
        set_text.set(input.clone());
        on_change.run(input_change(field, input, precision, &symbol));
    };

    view! {
        <label class="flex flex-col gap-1 w-full">
            <span class="text-sm font-semibold">{label}</span>
            <div class="flex items-center gap-2">
                <input
                    type="text"
                    inputmode="decimal"
                    autocomplete="off"
                    placeholder="0.0000"
                    name=field.name()
                    class="w-full py-1.5 px-3 rounded-md border border-solid border-muted bg-background"
                    prop:value=move || text.get()
                    on:input=on_input
                />
                <span class="text-sm text-muted-foreground">{symbol_label}</span>
            </div>
        </label>
    }
}

/// True when a stored amount was just dropped.
fn clears_text(was_filled: Option<bool>, filled: bool) -> bool {
    was_filled == Some(true) && !filled
}

/// Maps the text of an amount input to the change it reports.
pub fn input_change(field: Field, input: String, precision: u8, symbol: &str) -> ManageEvent {
    match Asset::from_user_input(&input, precision, symbol) {
        Ok(asset) if asset.is_zero() => {
            debug!("{}: zero amount", field.name());
            ManageEvent::change(field, input, false)
        }
        Ok(asset) => ManageEvent::change(field, asset.to_string(), true),
        Err(rex_sdk::Error::EmptyAmount) => ManageEvent::change(field, "", true),
        Err(error) => {
            debug!("{}: {error}", field.name());
            ManageEvent::change(field, input, false)
        }
    }
}
