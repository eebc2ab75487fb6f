use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use shared::domain::{Customer, CustomerId};
use tracing::debug;

use crate::{config::validate_server_url, error::ClientError};

pub const CUSTOMER_RESOURCE: &str = "customerdetail";

/// REST operations on the customer collection. Each call is issued once;
/// none of them touch caller state.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<(), ClientError>;
    async fn list(&self) -> Result<Vec<Customer>, ClientError>;
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), ClientError>;
    /// Fails with [`ClientError::MissingId`] before any I/O when `customer.id` is null.
    async fn update(&self, customer: &Customer) -> Result<(), ClientError>;

    async fn delete_customer(&self, customer: &Customer) -> Result<(), ClientError> {
        let id = customer.id.ok_or(ClientError::MissingId {
            operation: "delete",
        })?;
        self.delete_by_id(id).await
    }
}

#[derive(Clone)]
pub struct HttpCustomerClient {
    http: Client,
    resource_url: String,
}

impl HttpCustomerClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, ClientError> {
        let server_url = validate_server_url(server_url)?;
        Ok(Self {
            http,
            resource_url: format!("{server_url}/{CUSTOMER_RESOURCE}"),
        })
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: CustomerId) -> String {
        format!("{}/{id}", self.resource_url)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        debug!(%method, %url, "sending customer request");
        let res = request.send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(ClientError::Status {
            method: method.to_string(),
            url,
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerClient {
    async fn create(&self, customer: &Customer) -> Result<(), ClientError> {
        let url = self.resource_url.clone();
        let request = self.http.post(&url).json(customer);
        self.send(Method::POST, url, request).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customer>, ClientError> {
        let url = self.resource_url.clone();
        let request = self.http.get(&url);
        let res = self.send(Method::GET, url, request).await?;
        Ok(res.json().await?)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), ClientError> {
        let url = self.item_url(id);
        let request = self.http.delete(&url);
        self.send(Method::DELETE, url, request).await?;
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), ClientError> {
        let id = customer.id.ok_or(ClientError::MissingId {
            operation: "update",
        })?;
        let url = self.item_url(id);
        let request = self.http.put(&url).json(customer);
        self.send(Method::PUT, url, request).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
