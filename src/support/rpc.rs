use crate::{state::Endpoint, Error};
use leptos::prelude::*;
use rex_sdk::{TableRequest, TableRows};
use serde::Serialize;
use tracing::{debug, error};

/// Rows fetched per request. The balance tables hold one row per account.
const TABLE_ROWS_LIMIT: u32 = 1;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GetTableRowsParams<'a> {
    pub json: bool,
    pub code: &'a str,
    pub scope: &'a str,
    pub table: &'a str,
    pub lower_bound: &'a str,
    pub upper_bound: &'a str,
    pub limit: u32,
}

impl<'a> From<&'a TableRequest> for GetTableRowsParams<'a> {
    fn from(request: &'a TableRequest) -> Self {
        Self {
            json: true,
            code: &request.code,
            scope: &request.scope,
            table: &request.table,
            lower_bound: &request.lower_bound,
            upper_bound: &request.upper_bound,
            limit: TABLE_ROWS_LIMIT,
        }
    }
}

/// Read-only access to a node's chain API.
#[derive(Clone, Debug)]
pub struct ChainRpc {
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl ChainRpc {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_table_rows(&self, request: &TableRequest) -> Result<TableRows, Error> {
        let url = format!(
            "{}/v1/chain/get_table_rows",
            self.endpoint.get_untracked().trim_end_matches('/')
        );
        let params = GetTableRowsParams::from(request);

        debug!("POST {url} {params:?}");

        let response = self.client.post(&url).json(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{url} returned {status}: {body}");
            return Err(Error::rpc(format!("{status}: {body}")));
        }

        let rows = response.json::<TableRows>().await?;
        debug!("{}: {} row(s)", request.table, rows.rows.len());

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rex_sdk::balance_table_requests;
    use serde_json::json;

    #[test]
    fn table_request_body() {
        let [rexbal, _] = balance_table_requests("alice");
        let params = GetTableRowsParams::from(&rexbal);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "json": true,
                "code": "eosio",
                "scope": "eosio",
                "table": "rexbal",
                "lower_bound": "alice",
                "upper_bound": "alice",
                "limit": 1
            })
        );
    }
}
