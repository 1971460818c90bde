//! In-memory auction service for tests and offline runs

use super::api::AuctionApi;
use crate::storefront::models::{Lot, OrderRequest};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Which endpoint a call went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    GetLotList,
    GetLotItem,
    PlaceBid,
    OrderLots,
}

/// One recorded call with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetLotList,
    GetLotItem { id: String },
    PlaceBid { id: String, price: u64 },
    OrderLots(OrderRequest),
}

impl ApiCall {
    pub fn method(&self) -> ApiMethod {
        match self {
            ApiCall::GetLotList => ApiMethod::GetLotList,
            ApiCall::GetLotItem { .. } => ApiMethod::GetLotItem,
            ApiCall::PlaceBid { .. } => ApiMethod::PlaceBid,
            ApiCall::OrderLots(_) => ApiMethod::OrderLots,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    lots: Vec<Lot>,
    calls: Vec<ApiCall>,
    /// Remaining forced failures per endpoint
    failures: HashMap<ApiMethod, usize>,
}

/// Cloning shares the state, so a test can keep a handle after moving one
/// copy into the controller
#[derive(Debug, Clone, Default)]
pub struct MockAuctionApi {
    state: Arc<Mutex<MockState>>,
}

impl MockAuctionApi {
    pub fn new(lots: Vec<Lot>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                lots,
                ..MockState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the next `times` calls to `method` fail
    pub fn fail_next(&self, method: ApiMethod, times: usize) {
        self.lock().failures.insert(method, times);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, method: ApiMethod) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.method() == method)
            .count()
    }

    pub fn lots(&self) -> Vec<Lot> {
        self.lock().lots.clone()
    }

    fn begin(&self, call: ApiCall) -> Result<MutexGuard<'_, MockState>> {
        let method = call.method();
        let mut state = self.lock();
        state.calls.push(call);

        if let Some(remaining) = state.failures.get_mut(&method) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(anyhow!("{:?} failed", method));
            }
        }
        Ok(state)
    }
}

impl AuctionApi for MockAuctionApi {
    async fn get_lot_list(&self) -> Result<Vec<Lot>> {
        let state = self.begin(ApiCall::GetLotList)?;
        Ok(state.lots.clone())
    }

    async fn get_lot_item(&self, id: &str) -> Result<Lot> {
        let state = self.begin(ApiCall::GetLotItem { id: id.to_string() })?;
        state
            .lots
            .iter()
            .find(|lot| lot.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("Lot {id} not found"))
    }

    async fn place_bid(&self, id: &str, price: u64) -> Result<Lot> {
        let mut state = self.begin(ApiCall::PlaceBid {
            id: id.to_string(),
            price,
        })?;
        let lot = state
            .lots
            .iter_mut()
            .find(|lot| lot.id == id)
            .ok_or_else(|| anyhow!("Lot {id} not found"))?;

        lot.price = price;
        lot.history.get_or_insert_with(Vec::new).push(price);
        Ok(lot.clone())
    }

    async fn order_lots(&self, order: &OrderRequest) -> Result<()> {
        let _state = self.begin(ApiCall::OrderLots(order.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::models::LotStatus;

    fn api() -> MockAuctionApi {
        MockAuctionApi::new(vec![Lot {
            id: "a1".to_string(),
            status: LotStatus::Active,
            price: 100,
            history: Some(vec![100]),
            ..Lot::default()
        }])
    }

    #[tokio::test]
    async fn place_bid_should_append_history() {
        let api = api();
        let lot = api.place_bid("a1", 150).await.unwrap();

        assert_eq!(lot.price, 150);
        assert_eq!(lot.history, Some(vec![100, 150]));
        assert_eq!(
            api.calls(),
            vec![ApiCall::PlaceBid {
                id: "a1".to_string(),
                price: 150
            }]
        );
    }

    #[tokio::test]
    async fn forced_failures_should_run_out() {
        let api = api();
        api.fail_next(ApiMethod::GetLotList, 1);

        assert!(api.get_lot_list().await.is_err());
        assert_eq!(api.get_lot_list().await.unwrap().len(), 1);
        assert_eq!(api.call_count(ApiMethod::GetLotList), 2);
    }

    #[tokio::test]
    async fn unknown_lot_should_fail() {
        assert!(api().get_lot_item("nope").await.is_err());
    }
}
