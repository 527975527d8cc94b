//! HTTP wrapper for the item endpoints

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::http_server::response::{ErrorResponse, ItemSaved, MessageResponse};
use crate::model::{Item, ItemPayload};

use super::errors::{ClientError, ClientResult};

/// Typed access to `/api/items`.
///
/// No timeout is configured: a request that never completes keeps the
/// calling operation pending.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/items/{}", self.base_url, id)
    }

    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        let response = self.http.get(self.items_url()).send().await?;
        decode(response).await
    }

    pub async fn get_item(&self, id: i64) -> ClientResult<Item> {
        let response = self.http.get(self.item_url(id)).send().await?;
        decode(response).await
    }

    pub async fn create_item(&self, payload: &ItemPayload) -> ClientResult<ItemSaved> {
        let response = self.http.post(self.items_url()).json(payload).send().await?;
        decode(response).await
    }

    pub async fn update_item(&self, id: i64, payload: &ItemPayload) -> ClientResult<ItemSaved> {
        let response = self.http.put(self.item_url(id)).json(payload).send().await?;
        decode(response).await
    }

    pub async fn delete_item(&self, id: i64) -> ClientResult<MessageResponse> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an error status into `ClientError::Api`
/// carrying the server's `error` message.
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.items_url(), "http://localhost:3000/api/items");
        assert_eq!(client.item_url(12), "http://localhost:3000/api/items/12");
    }
}
