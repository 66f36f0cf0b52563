mod balance_summary;
mod form_message_error;
mod manage_rex;
mod token_field;
mod transaction_modal;

pub use balance_summary::BalanceSummary;
pub use form_message_error::FormMessageError;
pub use manage_rex::ManageRex;
pub use token_field::TokenField;
pub use transaction_modal::TransactionModal;
