//! HTTP client for the Northwind REST backend
//!
//! One [`ApiClient`] per backend; the base URL comes from [`ApiConfig`], not
//! from a process-wide lookup. No operation retries: every failure surfaces
//! as an [`ApiError`] for the controller to show.

mod rejection;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::core::{ApiError, Customer, CustomerService, Order, OrderService, Paginated};

/// Client for the customer and order endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// `GET /customers?page&size&contact_name`. The filter is always sent;
    /// an empty value matches everything.
    pub async fn list_customers(
        &self,
        page: usize,
        size: usize,
        contact_name: &str,
    ) -> Result<Paginated<Customer>, ApiError> {
        tracing::debug!(page, size, contact_name, "listing customers");
        let response = self
            .http
            .get(self.url("/customers"))
            .query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("contact_name", contact_name.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Rejected {
                status: response.status().as_u16(),
                message: "Error al obtener los clientes".to_string(),
            });
        }
        Ok(response.json().await?)
    }

    /// `GET /orders?page&size&customer_name&employee_name`. Each filter is
    /// sent exactly once; empty values match everything.
    pub async fn list_orders(
        &self,
        page: usize,
        size: usize,
        customer_name: &str,
        employee_name: &str,
    ) -> Result<Paginated<Order>, ApiError> {
        tracing::debug!(page, size, customer_name, employee_name, "listing orders");
        let response = self
            .http
            .get(self.url("/orders"))
            .query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("customer_name", customer_name.to_string()),
                ("employee_name", employee_name.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Rejected {
                status: response.status().as_u16(),
                message: "Error al obtener las órdenes".to_string(),
            });
        }
        Ok(response.json().await?)
    }

    /// `POST /customers` with the full draft as body.
    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer, ApiError> {
        tracing::debug!(customer_id = %customer.customer_id, "creating customer");
        let response = self
            .http
            .post(self.url("/customers"))
            .json(customer)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body: Option<Value> = response.json().await.ok();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection::create_rejection(
                status.as_u16(),
                body.as_ref(),
                &customer.customer_id,
            ),
        })
    }

    /// `PUT /customers/{customerid}` with the full record as body.
    pub async fn update_customer(&self, customer: &Customer) -> Result<Customer, ApiError> {
        tracing::debug!(customer_id = %customer.customer_id, "updating customer");
        let response = self
            .http
            .put(self.url(&format!("/customers/{}", customer.customer_id)))
            .json(customer)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body: Option<Value> = response.json().await.ok();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection::update_rejection(status.as_u16(), body.as_ref()),
        })
    }

    /// `DELETE /customers/{customerid}`. Confirmation with the user is the
    /// caller's responsibility.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError> {
        tracing::debug!(customer_id, "deleting customer");
        let response = self
            .http
            .delete(self.url(&format!("/customers/{}", customer_id)))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body: Option<Value> = response.json().await.ok();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection::delete_rejection(status.as_u16(), body.as_ref()),
        })
    }
}

#[async_trait]
impl CustomerService for ApiClient {
    async fn list(
        &self,
        page: usize,
        size: usize,
        contact_name: &str,
    ) -> Result<Paginated<Customer>, ApiError> {
        self.list_customers(page, size, contact_name).await
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.create_customer(customer).await
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.update_customer(customer).await
    }

    async fn delete(&self, customer_id: &str) -> Result<(), ApiError> {
        self.delete_customer(customer_id).await
    }
}

#[async_trait]
impl OrderService for ApiClient {
    async fn list(
        &self,
        page: usize,
        size: usize,
        customer_name: &str,
        employee_name: &str,
    ) -> Result<Paginated<Order>, ApiError> {
        self.list_orders(page, size, customer_name, employee_name)
            .await
    }
}
