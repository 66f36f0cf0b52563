use rex_sdk::Asset;

pub fn shorten_transaction_id(transaction_id: impl ToString) -> String {
    let transaction_id = transaction_id.to_string();
    if transaction_id.len() > 20 {
        format!(
            "{}...{}",
            &transaction_id[..10],
            &transaction_id[transaction_id.len() - 8..]
        )
    } else {
        transaction_id // Return the id as is if it's too short to shorten
    }
}

/// Balances are always shown with four decimals, whatever their precision.
pub fn display_balance(asset: &Asset) -> String {
    format!("{:.4}", asset.to_f64())
}

/// Preview amounts drop trailing zeros: `5000`, `2.5`.
pub fn display_preview(value: f64) -> String {
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_ids_only() {
        let id = "6b0b7ce0bd1c0bd9e30b81cdd0c0ab8f6dd59ddfc9bf1b4c2bce6f49dba1c2cd";
        assert_eq!(shorten_transaction_id(id), "6b0b7ce0bd...dba1c2cd");
        assert_eq!(shorten_transaction_id("abc"), "abc");
    }

    #[test]
    fn formats_balances_and_previews() {
        let asset: Asset = "2500.5 REX".parse().unwrap();
        assert_eq!(display_balance(&asset), "2500.5000");
        assert_eq!(display_preview(5000.0), "5000");
        assert_eq!(display_preview(2.5), "2.5");
        assert_eq!(display_preview(0.0), "0");
    }
}
