use std::{collections::HashMap, sync::LazyLock};

type Catalog = HashMap<&'static str, &'static str>;

static EN: LazyLock<Catalog> = LazyLock::new(|| {
    HashMap::from([
        ("common:confirm", "Confirm"),
        ("common:cancel", "Cancel"),
        ("common:close", "Close"),
        ("rex_interface_manage_rex_header", "Manage REX"),
        (
            "rex_interface_manage_rex_subheader",
            "Buy REX with {{chainSymbol}} from your REX fund, or sell matured REX back into it.",
        ),
        ("rex_interface_rent_funding_balance", "Funded balance: {{fundedBalance}} {{chainSymbol}}"),
        ("rex_interface_rent_rex_balance", "REX balance: {{rexBalance}} REX"),
        ("rex_interface_rent_rex_balance_mature", "Matured REX: {{rexBalance}} REX"),
        ("rex_interface_transaction_type_label", "Transaction type"),
        ("rex_interface_manage_rex_options_buy", "Buy REX"),
        ("rex_interface_manage_rex_options_sell", "Sell REX"),
        ("rex_interface_manage_rex_buy", "Amount of {{chainSymbol}} to spend"),
        ("rex_interface_manage_rex_sell", "Amount of REX to sell"),
        (
            "rex_interface_manage_rex_amount_to_buy",
            "{{amount}} buys roughly {{rexAmount}} REX.",
        ),
        (
            "rex_interface_manage_rex_amount_to_sell",
            "Selling {{amount}} (preview rate: {{rexAmount}}).",
        ),
        ("rex_interface_manage_rex_buy_button", "Buy REX"),
        ("rex_interface_manage_rex_sell_button", "Sell REX"),
        ("rex_interface_manage_rex_confirmation_modal_header", "Confirm REX transaction"),
        (
            "rex_interface_manage_rex_confirmation_modal_buy_rex",
            "Spend {{amountToBuy}} to buy roughly {{rexAmount}} REX?",
        ),
        (
            "rex_interface_manage_rex_confirmation_modal_sell_rex",
            "Sell {{amountToSell}} (preview rate: {{rexAmount}})?",
        ),
        ("invalid_amount", "The amount entered is not valid."),
        ("insufficient_balance_matured", "There is not enough balance for this amount."),
        ("global_transaction_pending", "Waiting for the wallet..."),
        ("global_transaction_complete", "Transaction submitted."),
        ("global_transaction_failed", "Transaction failed: {{error}}"),
        ("global_transaction_view_on", "View on {{explorer}}"),
        ("global_settings_account_label", "Account"),
        ("global_settings_account_update", "Update"),
        ("global_settings_account_missing", "Enter an account name to manage its REX."),
        ("global_page_not_found", "This page could not be found."),
    ])
});

/// Localized-string lookup, modelled on i18next: unknown keys come back unchanged
/// and `{{name}}` placeholders are filled from the arguments.
#[derive(Copy, Clone, Debug)]
pub struct Translator {
    catalog: &'static Catalog,
}

impl Translator {
    pub fn english() -> Self {
        Self { catalog: &EN }
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.catalog.get(key).copied().unwrap_or(key);

        args.iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_arguments() {
        let i18n = Translator::english();
        assert_eq!(
            i18n.t_with(
                "rex_interface_rent_funding_balance",
                &[("fundedBalance", "10.0000"), ("chainSymbol", "EOS")]
            ),
            "Funded balance: 10.0000 EOS"
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        let i18n = Translator::english();
        assert_eq!(i18n.t("no_such_key"), "no_such_key");
        assert_eq!(i18n.t("common:cancel"), "Cancel");
    }

    #[test]
    fn every_form_error_has_a_message() {
        let i18n = Translator::english();
        for error in [
            rex_sdk::FormError::InvalidAmount,
            rex_sdk::FormError::InsufficientBalanceMatured,
        ] {
            assert_ne!(i18n.t(error.code()), error.code());
        }
    }
}
