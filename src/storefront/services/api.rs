//! # Auction API client
//!
//! JSON over HTTP. Lot image paths come back relative and are rewritten to
//! absolute CDN URLs before they reach the models.

use crate::storefront::models::{Lot, OrderRequest};
use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The remote auction service
pub trait AuctionApi: Send + Sync {
    fn get_lot_list(&self) -> impl Future<Output = Result<Vec<Lot>>> + Send;

    fn get_lot_item(&self, id: &str) -> impl Future<Output = Result<Lot>> + Send;

    /// Place a bid and get the lot back with its updated history
    fn place_bid(&self, id: &str, price: u64) -> impl Future<Output = Result<Lot>> + Send;

    fn order_lots(&self, order: &OrderRequest) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Deserialize)]
struct LotList {
    #[allow(dead_code)]
    #[serde(default)]
    total: u64,
    items: Vec<Lot>,
}

#[derive(Debug, Serialize)]
struct BidRequest {
    price: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpAuctionApi {
    client: Client,
    api_url: String,
    cdn_url: String,
}

impl HttpAuctionApi {
    /// Client for the service hosted at `origin`, e.g. `https://example.org`
    pub fn new(origin: &str, timeout: Duration) -> Result<Self> {
        let origin = origin.trim_end_matches('/');
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: format!("{origin}/api/onotebenado"),
            cdn_url: format!("{origin}/content/onotebenado"),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn cdn_url(&self) -> &str {
        &self.cdn_url
    }

    fn with_cdn_image(&self, mut lot: Lot) -> Lot {
        lot.image = format!("{}{}", self.cdn_url, lot.image);
        lot
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send_post(path, body).await?;
        Self::decode(response).await
    }

    async fn send_post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!("POST {}", url);
        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .context("Failed to decode auction API response")
    }

    /// Turn a non-2xx response into an error carrying the server's message
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        bail!("Auction API returned {}: {}", status.as_u16(), message)
    }
}

impl AuctionApi for HttpAuctionApi {
    async fn get_lot_list(&self) -> Result<Vec<Lot>> {
        let list: LotList = self.get("/lot").await?;
        tracing::debug!("fetched {} lots", list.items.len());
        Ok(list
            .items
            .into_iter()
            .map(|lot| self.with_cdn_image(lot))
            .collect())
    }

    async fn get_lot_item(&self, id: &str) -> Result<Lot> {
        let lot: Lot = self.get(&format!("/lot/{id}/")).await?;
        Ok(self.with_cdn_image(lot))
    }

    async fn place_bid(&self, id: &str, price: u64) -> Result<Lot> {
        let lot: Lot = self
            .post(&format!("/lot/{id}/_bid"), &BidRequest { price })
            .await?;
        Ok(self.with_cdn_image(lot))
    }

    async fn order_lots(&self, order: &OrderRequest) -> Result<()> {
        let response = self.send_post("/order", order).await?;
        Self::check_status(response).await?;
        tracing::info!("order placed for {} lots", order.items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_should_derive_from_origin() {
        let api = HttpAuctionApi::new("https://larek.test/", Duration::from_secs(1)).unwrap();

        assert_eq!(api.api_url(), "https://larek.test/api/onotebenado");
        assert_eq!(api.cdn_url(), "https://larek.test/content/onotebenado");
    }

    #[test]
    fn image_should_be_prefixed_with_cdn() {
        let api = HttpAuctionApi::new("https://larek.test", Duration::from_secs(1)).unwrap();
        let lot = api.with_cdn_image(Lot {
            image: "/lot1.jpg".to_string(),
            ..Lot::default()
        });

        assert_eq!(lot.image, "https://larek.test/content/onotebenado/lot1.jpg");
    }
}
