//! State machine behind the "manage REX" form.
//!
//! The form only ever changes through [`reduce`], so every transition can be
//! exercised without a renderer. The view derives what it shows from
//! [`ManageState`] and the current [`RexBalances`].

use crate::{asset::Asset, system::ActionKind, tables::RexBalances};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use tracing::{debug, warn};

/// Fixed price used for the buy/sell preview, in core tokens per REX.
// TODO: derive this from the rexpool table (total_lendable / total_rex) once the
// screen reads it.
pub const PRICE_OF_REX: f64 = 0.001;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Buy,
    Sell,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Buy, TransactionType::Sell];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }

    pub fn action(&self) -> ActionKind {
        match self {
            TransactionType::Buy => ActionKind::BuyRex,
            TransactionType::Sell => ActionKind::SellRex,
        }
    }

    /// The amount field that is active for this type.
    pub fn amount_field(&self) -> Field {
        match self {
            TransactionType::Buy => Field::AmountToBuy,
            TransactionType::Sell => Field::AmountToSell,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors shown under the form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormError {
    InvalidAmount,
    InsufficientBalanceMatured,
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::InvalidAmount => "invalid_amount",
            FormError::InsufficientBalanceMatured => "insufficient_balance_matured",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    TransactionType,
    AmountToBuy,
    AmountToSell,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::TransactionType => "transactionType",
            Field::AmountToBuy => "amountToBuy",
            Field::AmountToSell => "amountToSell",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ManageEvent {
    /// A form field reported a new value. `valid` is the field's own verdict.
    Change {
        field: Field,
        value: String,
        valid: bool,
    },
    /// The primary button was pressed.
    Confirm,
    /// The cancel button inside the confirmation view.
    Cancel,
    /// The confirmation dialog was closed.
    Close,
}

impl ManageEvent {
    pub fn change(field: Field, value: impl Into<String>, valid: bool) -> Self {
        ManageEvent::Change {
            field,
            value: value.into(),
            valid,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManageState {
    pub confirming: bool,
    pub transaction_type: TransactionType,
    pub amount_to_buy: Option<Asset>,
    pub amount_to_sell: Option<Asset>,
    pub error: Option<FormError>,
}

/// What to submit once the user confirms.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub action: ActionKind,
    pub amount: Asset,
}

/// The "you will get about N REX" line.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    pub amount: Asset,
    pub rex_amount: f64,
}

impl ManageState {
    pub fn active_amount(&self) -> Option<&Asset> {
        match self.transaction_type {
            TransactionType::Buy => self.amount_to_buy.as_ref(),
            TransactionType::Sell => self.amount_to_sell.as_ref(),
        }
    }

    pub fn save_disabled(&self) -> bool {
        self.error.is_some() || self.active_amount().is_none()
    }

    pub fn display_success_message(&self) -> bool {
        !self.save_disabled()
    }

    pub fn preview(&self, price_of_rex: f64) -> Option<Preview> {
        self.active_amount().map(|amount| Preview {
            amount: amount.clone(),
            rex_amount: rex_amount(amount, price_of_rex),
        })
    }

    /// The action to submit, chosen by the transaction type alone.
    pub fn submission(&self) -> Option<Submission> {
        self.active_amount().map(|amount| Submission {
            action: self.transaction_type.action(),
            amount: amount.clone(),
        })
    }

    fn clear_amounts(&mut self) {
        self.amount_to_buy = None;
        self.amount_to_sell = None;
    }
}

/// Converted amount for the preview, `amount / price`.
pub fn rex_amount(amount: &Asset, price_of_rex: f64) -> f64 {
    amount.to_f64() / price_of_rex
}

pub fn reduce(state: ManageState, event: &ManageEvent, balances: &RexBalances) -> ManageState {
    let mut next = state;

    match event {
        ManageEvent::Change {
            field,
            value,
            valid,
        } => {
            next.error = None;

            if !valid {
                next.error = Some(FormError::InvalidAmount);
                return next;
            }

            match field {
                Field::TransactionType => match value.parse::<TransactionType>() {
                    Ok(transaction_type) => {
                        next.transaction_type = transaction_type;
                        next.clear_amounts();
                    }
                    Err(error) => warn!("{error}"),
                },
                Field::AmountToBuy | Field::AmountToSell => {
                    let amount = match parse_amount(value) {
                        // buyrex and sellrex reject a zero quantity
                        Ok(Some(amount)) if amount.is_zero() => {
                            next.error = Some(FormError::InvalidAmount);
                            return next;
                        }
                        Ok(amount) => amount,
                        Err(()) => {
                            next.error = Some(FormError::InvalidAmount);
                            return next;
                        }
                    };

                    let available = if *field == Field::AmountToBuy {
                        &balances.funded
                    } else {
                        &balances.matured
                    };

                    if amount
                        .as_ref()
                        .is_some_and(|amount| available.cmp_amount(amount) == Ordering::Less)
                    {
                        next.error = Some(FormError::InsufficientBalanceMatured);
                    }

                    if *field == Field::AmountToBuy {
                        next.amount_to_buy = amount;
                    } else {
                        next.amount_to_sell = amount;
                    }
                }
            }
        }
        ManageEvent::Confirm => {
            if next.save_disabled() {
                debug!("confirm ignored, form is not ready");
            } else {
                next.confirming = true;
            }
        }
        ManageEvent::Cancel | ManageEvent::Close => {
            next.confirming = false;
            next.clear_amounts();
        }
    }

    debug!("{event:?} -> {next:?}");

    next
}

// An empty field clears the amount.
fn parse_amount(value: &str) -> Result<Option<Asset>, ()> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value.parse::<Asset>().map(Some).map_err(|error| {
        warn!("{error}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(funded: &str, matured: &str) -> RexBalances {
        RexBalances {
            matured: matured.parse().unwrap(),
            total: matured.parse().unwrap(),
            funded: funded.parse().unwrap(),
        }
    }

    fn apply(state: ManageState, events: &[ManageEvent], balances: &RexBalances) -> ManageState {
        events
            .iter()
            .fold(state, |state, event| reduce(state, event, balances))
    }

    #[test]
    fn starts_on_buy_with_nothing_entered() {
        let state = ManageState::default();
        assert_eq!(state.transaction_type, TransactionType::Buy);
        assert!(!state.confirming);
        assert!(state.save_disabled());
        assert!(!state.display_success_message());
    }

    #[test]
    fn buy_within_funded_balance() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = reduce(
            ManageState::default(),
            &ManageEvent::change(Field::AmountToBuy, "5.0000 EOS", true),
            &balances,
        );

        assert_eq!(state.error, None);
        assert!(!state.save_disabled());
        assert!(state.display_success_message());

        let preview = state.preview(PRICE_OF_REX).unwrap();
        assert_eq!(preview.amount.to_string(), "5.0000 EOS");
        assert_eq!(preview.rex_amount, 5000.0);
    }

    #[test]
    fn buy_beyond_funded_balance() {
        let balances = balances("10.0000 EOS", "100.0000 REX");
        let state = reduce(
            ManageState::default(),
            &ManageEvent::change(Field::AmountToBuy, "10.0001 EOS", true),
            &balances,
        );

        assert_eq!(state.error, Some(FormError::InsufficientBalanceMatured));
        assert_eq!(state.error.unwrap().code(), "insufficient_balance_matured");
        assert!(state.save_disabled());
        // the value is kept so the user can correct it
        assert!(state.amount_to_buy.is_some());
    }

    #[test]
    fn sell_beyond_matured_balance() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::TransactionType, "sell", true),
                ManageEvent::change(Field::AmountToSell, "1.0000 REX", true),
            ],
            &balances,
        );

        assert_eq!(state.transaction_type, TransactionType::Sell);
        assert_eq!(state.error, Some(FormError::InsufficientBalanceMatured));
        assert!(state.save_disabled());
    }

    #[test]
    fn sell_checks_matured_not_funded() {
        let balances = balances("0.0000 EOS", "2.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::TransactionType, "sell", true),
                ManageEvent::change(Field::AmountToSell, "2.0000 REX", true),
            ],
            &balances,
        );

        assert_eq!(state.error, None);
        assert!(!state.save_disabled());
        assert_eq!(
            state.submission(),
            Some(Submission {
                action: ActionKind::SellRex,
                amount: "2.0000 REX".parse().unwrap(),
            })
        );
    }

    #[test]
    fn invalid_input_is_not_stored() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "1.0000 EOS", true),
                ManageEvent::change(Field::AmountToBuy, "1.00.00 EOS", false),
            ],
            &balances,
        );

        assert_eq!(state.error, Some(FormError::InvalidAmount));
        assert_eq!(state.error.unwrap().code(), "invalid_amount");
        assert_eq!(state.amount_to_buy, Some("1.0000 EOS".parse().unwrap()));
        assert!(state.save_disabled());
    }

    #[test]
    fn unparseable_valid_input_counts_as_invalid() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = reduce(
            ManageState::default(),
            &ManageEvent::change(Field::AmountToBuy, "lots", true),
            &balances,
        );

        assert_eq!(state.error, Some(FormError::InvalidAmount));
        assert_eq!(state.amount_to_buy, None);
    }

    #[test]
    fn zero_amount_counts_as_invalid() {
        let balances = balances("10.0000 EOS", "10.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "0.0000 EOS", true),
                ManageEvent::change(Field::AmountToSell, "0.0000 REX", true),
            ],
            &balances,
        );

        assert_eq!(state.error, Some(FormError::InvalidAmount));
        assert_eq!(state.amount_to_buy, None);
        assert_eq!(state.amount_to_sell, None);
        assert!(state.save_disabled());
    }

    #[test]
    fn next_valid_change_clears_the_error() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "50.0000 EOS", true),
                ManageEvent::change(Field::AmountToBuy, "5.0000 EOS", true),
            ],
            &balances,
        );

        assert_eq!(state.error, None);
        assert!(!state.save_disabled());
    }

    #[test]
    fn empty_amount_clears_the_field() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "5.0000 EOS", true),
                ManageEvent::change(Field::AmountToBuy, "", true),
            ],
            &balances,
        );

        assert_eq!(state.amount_to_buy, None);
        assert_eq!(state.error, None);
        assert!(state.save_disabled());
    }

    #[test]
    fn switching_type_clears_both_amounts() {
        let balances = balances("10.0000 EOS", "10.0000 REX");
        let state = ManageState {
            amount_to_buy: Some("1.0000 EOS".parse().unwrap()),
            amount_to_sell: Some("1.0000 REX".parse().unwrap()),
            ..Default::default()
        };

        for value in ["sell", "buy", "buy"] {
            let next = reduce(
                state.clone(),
                &ManageEvent::change(Field::TransactionType, value, true),
                &balances,
            );
            assert_eq!(next.amount_to_buy, None);
            assert_eq!(next.amount_to_sell, None);
            assert_eq!(next.transaction_type.as_str(), value);
        }
    }

    #[test]
    fn unknown_type_keeps_selection() {
        let balances = balances("10.0000 EOS", "10.0000 REX");
        let state = reduce(
            ManageState::default(),
            &ManageEvent::change(Field::TransactionType, "lend", true),
            &balances,
        );

        assert_eq!(state.transaction_type, TransactionType::Buy);
        assert_eq!(state.error, None);
    }

    #[test]
    fn confirm_requires_a_clean_form() {
        let balances = balances("1.0000 EOS", "0.0000 REX");

        let state = reduce(ManageState::default(), &ManageEvent::Confirm, &balances);
        assert!(!state.confirming);

        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "2.0000 EOS", true),
                ManageEvent::Confirm,
            ],
            &balances,
        );
        assert!(!state.confirming);

        let state = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "1.0000 EOS", true),
                ManageEvent::Confirm,
            ],
            &balances,
        );
        assert!(state.confirming);
        assert_eq!(state.submission().unwrap().action, ActionKind::BuyRex);
    }

    #[test]
    fn cancel_and_close_return_to_the_form() {
        let balances = balances("10.0000 EOS", "0.0000 REX");
        let confirming = apply(
            ManageState::default(),
            &[
                ManageEvent::change(Field::AmountToBuy, "5.0000 EOS", true),
                ManageEvent::Confirm,
            ],
            &balances,
        );
        assert!(confirming.confirming);

        for event in [ManageEvent::Cancel, ManageEvent::Close] {
            let state = reduce(confirming.clone(), &event, &balances);
            assert!(!state.confirming);
            assert_eq!(state.amount_to_buy, None);
            assert_eq!(state.amount_to_sell, None);
            assert!(state.save_disabled());
        }
    }

    #[test]
    fn field_names_match_form_inputs() {
        assert_eq!(Field::AmountToBuy.name(), "amountToBuy");
        assert_eq!(TransactionType::Sell.amount_field(), Field::AmountToSell);
        assert_eq!(
            serde_json::to_string(&TransactionType::Sell).unwrap(),
            "\"sell\""
        );
    }
}
