//! Epic Games storefront client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::store::deserialize_null_default;
use crate::domain::ports::{RawOfferElement, StoreClient};
use crate::error::StoreError;

/// Implementation of the storefront client against the freeGamesPromotions
/// endpoint
pub struct EpicStoreClient {
    http: Client,
    endpoint: String,
    locale: String,
    country: String,
}

impl EpicStoreClient {
    pub fn new(endpoint: String, locale: String, country: String) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            locale,
            country,
        }
    }
}

/// Response envelope from the storefront: data.Catalog.searchStore.elements
#[derive(Deserialize)]
struct FreeGamesResponse {
    data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "Catalog")]
    catalog: CatalogData,
}

#[derive(Deserialize)]
struct CatalogData {
    #[serde(rename = "searchStore")]
    search_store: SearchStoreData,
}

#[derive(Deserialize)]
struct SearchStoreData {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    elements: Vec<RawOfferElement>,
}

#[async_trait]
impl StoreClient for EpicStoreClient {
    async fn fetch_free_games(&self) -> Result<Vec<RawOfferElement>, StoreError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("locale", self.locale.as_str()),
                ("country", self.country.as_str()),
                ("allowCountries", self.country.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: FreeGamesResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        Ok(body.data.catalog.search_store.elements)
    }
}
