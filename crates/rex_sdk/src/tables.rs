use crate::{asset::Asset, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

pub const EOSIO: &str = "eosio";
pub const REXBAL: &str = "rexbal";
pub const REXFUND: &str = "rexfund";

pub const REX_SYMBOL: &str = "REX";
pub const REX_PRECISION: u8 = 4;

/// A range-bounded read of a contract table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRequest {
    pub code: String,
    pub scope: String,
    pub table: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

impl TableRequest {
    pub fn by_bounds(
        code: impl Into<String>,
        scope: impl Into<String>,
        table: impl Into<String>,
        lower_bound: impl Into<String>,
        upper_bound: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            scope: scope.into(),
            table: table.into(),
            lower_bound: lower_bound.into(),
            upper_bound: upper_bound.into(),
        }
    }

    /// Where the result of this request is kept in a [`TableSnapshot`].
    pub fn key(&self) -> TableKey {
        TableKey {
            code: self.code.clone(),
            scope: self.scope.clone(),
            table: self.table.clone(),
            bound: self.lower_bound.clone(),
        }
    }
}

/// The two reads the manage screen needs for `account`: its REX balance row and its
/// REX fund row.
pub fn balance_table_requests(account: &str) -> [TableRequest; 2] {
    [
        TableRequest::by_bounds(EOSIO, EOSIO, REXBAL, account, account),
        TableRequest::by_bounds(EOSIO, EOSIO, REXFUND, account, account),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub code: String,
    pub scope: String,
    pub table: String,
    pub bound: String,
}

impl TableKey {
    pub fn new(
        code: impl Into<String>,
        scope: impl Into<String>,
        table: impl Into<String>,
        bound: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            scope: scope.into(),
            table: table.into(),
            bound: bound.into(),
        }
    }
}

/// The body of a `get_table_rows` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRows {
    pub rows: Vec<Value>,
    #[serde(default)]
    pub more: bool,
}

/// Everything read from chain tables so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSnapshot {
    tables: HashMap<TableKey, TableRows>,
}

impl TableSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: TableKey, rows: TableRows) {
        self.tables.insert(key, rows);
    }

    pub fn get(&self, key: &TableKey) -> Option<&TableRows> {
        self.tables.get(key)
    }

    /// True once any table under `code`/`scope` has been read.
    pub fn is_loaded(&self, code: &str, scope: &str) -> bool {
        self.tables
            .keys()
            .any(|key| key.code == code && key.scope == scope)
    }

    /// `rows[0][field]` of the given table, if present.
    pub fn first_row_field(&self, key: &TableKey, field: &str) -> Option<&Value> {
        self.get(key)
            .and_then(|table| table.rows.first())
            .and_then(|row| row.get(field))
    }

    pub fn balances(&self, account: &str, core_symbol: &str) -> RexBalances {
        let rexbal = TableKey::new(EOSIO, EOSIO, REXBAL, account);
        let rexfund = TableKey::new(EOSIO, EOSIO, REXFUND, account);

        let defaults = RexBalances::empty(core_symbol);

        let read = |key: &TableKey, field: &str, default: Asset| {
            match self.first_row_field(key, field).map(asset_from_value) {
                Some(Ok(asset)) => asset,
                Some(Err(error)) => {
                    warn!("{}.{}: {error}", key.table, field);
                    default
                }
                None => default,
            }
        };

        RexBalances {
            matured: read(&rexbal, "matured_rex", defaults.matured),
            total: read(&rexbal, "rex_balance", defaults.total),
            funded: read(&rexfund, "balance", defaults.funded),
        }
    }
}

// `matured_rex` is a raw int64 on chain, the other balances are asset strings.
fn asset_from_value(value: &Value) -> Result<Asset, Error> {
    match value {
        Value::String(s) => s.parse(),
        Value::Number(n) => n
            .as_i64()
            .map(|amount| Asset::new(amount, REX_PRECISION, REX_SYMBOL))
            .ok_or_else(|| Error::InvalidRow(n.to_string())),
        other => Err(Error::InvalidRow(other.to_string())),
    }
}

/// The three balances shown on the manage screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RexBalances {
    /// REX that may be sold now.
    pub matured: Asset,
    /// All REX held, matured or not.
    pub total: Asset,
    /// Core tokens deposited in the REX fund, available for buying.
    pub funded: Asset,
}

impl RexBalances {
    pub fn empty(core_symbol: &str) -> Self {
        Self {
            matured: Asset::zero(REX_PRECISION, REX_SYMBOL),
            total: Asset::zero(REX_PRECISION, REX_SYMBOL),
            funded: Asset::zero(4, core_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> TableRows {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn mount_requests_are_bounded_by_account() {
        let [rexbal, rexfund] = balance_table_requests("alice");

        assert_eq!(rexbal.table, REXBAL);
        assert_eq!(rexfund.table, REXFUND);
        for request in [&rexbal, &rexfund] {
            assert_eq!(request.code, EOSIO);
            assert_eq!(request.scope, EOSIO);
            assert_eq!(request.lower_bound, "alice");
            assert_eq!(request.upper_bound, "alice");
        }
        assert_eq!(rexbal.key(), TableKey::new("eosio", "eosio", "rexbal", "alice"));
    }

    #[test]
    fn missing_tables_default_to_zero() {
        let snapshot = TableSnapshot::new();
        assert!(!snapshot.is_loaded(EOSIO, EOSIO));

        let balances = snapshot.balances("alice", "EOS");
        assert_eq!(balances.matured.to_string(), "0.0000 REX");
        assert_eq!(balances.total.to_string(), "0.0000 REX");
        assert_eq!(balances.funded.to_string(), "0.0000 EOS");
    }

    #[test]
    fn reads_balances_from_first_rows() {
        let mut snapshot = TableSnapshot::new();
        snapshot.insert(
            TableKey::new(EOSIO, EOSIO, REXBAL, "alice"),
            rows(json!({
                "rows": [{
                    "owner": "alice",
                    "vote_stake": "1.0000 EOS",
                    "rex_balance": "10000.0000 REX",
                    "matured_rex": 25000000
                }],
                "more": false
            })),
        );
        snapshot.insert(
            TableKey::new(EOSIO, EOSIO, REXFUND, "alice"),
            rows(json!({ "rows": [{ "owner": "alice", "balance": "10.0000 EOS" }] })),
        );

        assert!(snapshot.is_loaded(EOSIO, EOSIO));

        let balances = snapshot.balances("alice", "EOS");
        assert_eq!(balances.matured.to_string(), "2500.0000 REX");
        assert_eq!(balances.total.to_string(), "10000.0000 REX");
        assert_eq!(balances.funded.to_string(), "10.0000 EOS");

        // another account has nothing loaded
        assert_eq!(snapshot.balances("bob", "EOS"), RexBalances::empty("EOS"));
    }

    #[test]
    fn empty_or_malformed_rows_fall_back() {
        let mut snapshot = TableSnapshot::new();
        snapshot.insert(
            TableKey::new(EOSIO, EOSIO, REXBAL, "alice"),
            rows(json!({ "rows": [{ "rex_balance": "garbage", "matured_rex": true }] })),
        );
        snapshot.insert(
            TableKey::new(EOSIO, EOSIO, REXFUND, "alice"),
            rows(json!({ "rows": [] })),
        );

        assert!(snapshot.is_loaded(EOSIO, EOSIO));
        assert_eq!(snapshot.balances("alice", "TLOS"), RexBalances::empty("TLOS"));
    }
}
