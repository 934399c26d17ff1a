//! Charging sessions (transactions)

use shared::ActionResponse;
use shared::DataResult;
use shared::models::{Transaction, TransactionDataResult};

use super::{CentralServerClient, log_call};
use crate::endpoint::ServerRoute;
use crate::query::{PagingParams, QueryParams};
use crate::ClientResult;

impl CentralServerClient {
    /// One transaction, with its user
    pub async fn get_transaction(&self, id: i64) -> ClientResult<Transaction> {
        log_call("get_transaction");
        let id = id.to_string();
        let url = self.url(ServerRoute::Transaction, &[("id", &id)])?;
        let query = QueryParams::new().with("WithUser", true);
        self.rest.get_json(&url, &self.secured(), Some(&query)).await
    }

    /// Most recent completed transaction on a connector, if any
    pub async fn get_last_transaction(
        &self,
        charging_station_id: &str,
        connector_id: u32,
    ) -> ClientResult<Option<Transaction>> {
        log_call("get_last_transaction");
        let url = self.url(
            ServerRoute::ChargingStationTransactions,
            &[("id", charging_station_id)],
        )?;
        let query = QueryParams::new()
            .with("ConnectorID", connector_id)
            .with("Limit", 1)
            .with("Skip", 0)
            .with("Status", "completed")
            .with("SortFields", "-timestamp");
        let data: DataResult<Transaction> =
            self.rest.get_json(&url, &self.secured(), Some(&query)).await?;
        Ok(data.into_first())
    }

    /// Completed transactions, with totals in `stats`
    pub async fn get_transactions(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<TransactionDataResult> {
        log_call("get_transactions");
        let url = self.url(ServerRoute::TransactionsCompleted, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    /// In-progress transactions, with their users
    pub async fn get_transactions_active(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<Transaction>> {
        log_call("get_transactions_active");
        let url = self.url(ServerRoute::TransactionsActive, &[])?;
        self.get_list(&url, params.with("WithUser", true), paging, sorting)
            .await
    }

    /// Transaction with its consumption curve in `values`
    pub async fn get_transaction_consumption(&self, transaction_id: i64) -> ClientResult<Transaction> {
        log_call("get_transaction_consumption");
        let id = transaction_id.to_string();
        let url = self.url(ServerRoute::TransactionConsumptions, &[("id", &id)])?;
        self.rest.get_json(&url, &self.secured(), None).await
    }

    /// Stop accounting for a transaction the station never closed
    pub async fn soft_stop_transaction(&self, transaction_id: i64) -> ClientResult<ActionResponse> {
        log_call("soft_stop_transaction");
        let id = transaction_id.to_string();
        let url = self.url(ServerRoute::TransactionSoftStop, &[("id", &id)])?;
        self.rest
            .put_json(&url, &self.secured(), &serde_json::json!({}))
            .await
    }
}
