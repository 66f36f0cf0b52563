use crate::i18n::Translator;
use leptos::prelude::*;
use rex_sdk::FormError;

#[component]
pub fn FormMessageError(#[prop(into)] error: Signal<Option<FormError>>) -> impl IntoView {
    let i18n = use_context::<Translator>().expect("translator context missing!");

    move || {
        error.get().map(|error| {
            view! {
                <div
                    role="alert"
                    data-code=error.code()
                    class="my-5 py-2 px-3 text-sm font-semibold rounded-md bg-gold/20 text-gold"
                >
                    {i18n.t(error.code())}
                </div>
            }
        })
    }
}
