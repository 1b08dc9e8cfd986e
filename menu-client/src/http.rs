//! Network HTTP client

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::{
    Customer, CustomerCreate, MenuItem, MenuItemCreate, MenuItemImage, MenuItemUpdate,
    StatusUpdate,
};

use crate::{ClientConfig, ClientError, ClientResult, MenuApi};

/// Network HTTP client for the menu server REST API
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Internal(format!("Invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Internal(format!(
                "Invalid base URL: {}",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append percent-encoded path segments to the base URL
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        // Structured error body first
        if let Ok(ApiResponse {
            code: Some(code),
            message,
            details,
            ..
        }) = serde_json::from_str::<ApiResponse>(&text)
        {
            return Err(ClientError::Api {
                code,
                message,
                details,
            });
        }
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(format!("{status}: {text}"))),
        }
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn message(&self, request: RequestBuilder) -> ClientResult<String> {
        let body: ApiResponse = self.json(request).await?;
        Ok(body.message)
    }

    async fn no_content(&self, request: RequestBuilder) -> ClientResult<()> {
        self.send(request).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        self.json(self.client.get(self.url(segments))).await
    }

    // ========== Customers ==========

    /// GET /customers
    pub async fn get_customers(&self) -> ClientResult<Vec<Customer>> {
        self.get(&["customers"]).await
    }

    /// GET /customers/{id}
    pub async fn get_customer(&self, id: i64) -> ClientResult<Customer> {
        self.get(&["customers", &id.to_string()]).await
    }

    /// GET /customers/email/{email}
    pub async fn get_customer_by_email(&self, email: &str) -> ClientResult<Customer> {
        self.get(&["customers", "email", email]).await
    }

    /// POST /customers
    pub async fn create_customer(&self, customer: &CustomerCreate) -> ClientResult<Customer> {
        let request = self.client.post(self.url(&["customers"]));
        self.json(request.json(customer)).await
    }

    /// PUT /customers/{customer.customer_id}
    pub async fn update_customer(&self, customer: &CustomerCreate) -> ClientResult<()> {
        let id = customer.customer_id.to_string();
        let request = self.client.put(self.url(&["customers", &id]));
        self.no_content(request.json(customer)).await
    }

    /// DELETE /customers/{id}
    pub async fn delete_customer(&self, id: i64) -> ClientResult<()> {
        let request = self.client.delete(self.url(&["customers", &id.to_string()]));
        self.no_content(request).await
    }

    /// GET /customers/{id}/loyalty
    pub async fn get_loyalty_points(&self, id: i64) -> ClientResult<i64> {
        self.get(&["customers", &id.to_string(), "loyalty"]).await
    }

    /// POST /customers/{id}/loyalty/add/{points}
    pub async fn add_loyalty_points(&self, id: i64, points: i32) -> ClientResult<()> {
        let url = self.url(&[
            "customers",
            &id.to_string(),
            "loyalty",
            "add",
            &points.to_string(),
        ]);
        self.no_content(self.client.post(url)).await
    }
}

#[async_trait]
impl MenuApi for NetworkHttpClient {
    async fn get_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        tracing::debug!("Fetching menu items");
        self.get(&["menuItems"]).await
    }

    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.get(&["menuItems", &id.to_string()]).await
    }

    async fn get_menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>> {
        self.get(&["menuItems", "category", category]).await
    }

    async fn get_popular_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get(&["menuItems", "popular"]).await
    }

    async fn create_menu_item(&self, item: &MenuItemCreate) -> ClientResult<MenuItem> {
        let request = self.client.post(self.url(&["menuItems"]));
        self.json(request.json(item)).await
    }

    async fn update_menu_item(&self, item: &MenuItemUpdate) -> ClientResult<MenuItem> {
        let id = item.item_id.to_string();
        let request = self.client.put(self.url(&["menuItems", &id]));
        self.json(request.json(item)).await
    }

    async fn update_menu_item_status(&self, id: i64, is_active: bool) -> ClientResult<MenuItem> {
        let request = self
            .client
            .patch(self.url(&["menuItems", &id.to_string(), "status"]));
        self.json(request.json(&StatusUpdate { is_active }))
            .await
    }

    async fn delete_menu_item(&self, id: i64) -> ClientResult<String> {
        let request = self.client.delete(self.url(&["menuItems", &id.to_string()]));
        self.message(request).await
    }

    async fn get_menu_item_image(&self, id: i64) -> ClientResult<MenuItemImage> {
        let request = self
            .client
            .get(self.url(&["menuItems", &id.to_string(), "image"]));
        let response = self.send(request).await?;
        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| ClientError::InvalidResponse("Image response without content type".into()))?;
        let data = response.bytes().await?.to_vec();
        Ok(MenuItemImage { data, mime_type })
    }

    async fn upload_menu_item_image(
        &self,
        id: i64,
        data: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String> {
        let part = Part::bytes(data)
            .file_name("upload")
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);
        let request = self
            .client
            .post(self.url(&["menuItems", &id.to_string(), "image"]))
            .multipart(form);
        self.message(request).await
    }

    async fn remove_menu_item_image(&self, id: i64) -> ClientResult<String> {
        let request = self
            .client
            .delete(self.url(&["menuItems", &id.to_string(), "image"]));
        self.message(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = NetworkHttpClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.url(&["menuItems", "7", "image"]).as_str(),
            "http://localhost:5000/api/menuItems/7/image"
        );

        let trailing = NetworkHttpClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(
            trailing.url(&["menuItems"]).as_str(),
            "http://localhost:5000/api/menuItems"
        );
    }

    #[test]
    fn test_url_encodes_segments() {
        let client = NetworkHttpClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.url(&["menuItems", "category", "Tacos al/carbon"]).as_str(),
            "http://localhost:5000/api/menuItems/category/Tacos%20al%2Fcarbon"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(NetworkHttpClient::new("not a url").is_err());
        assert!(NetworkHttpClient::new("mailto:someone@example.com").is_err());
    }
}
