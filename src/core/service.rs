//! Service traits the page controllers depend on
//!
//! [`crate::client::ApiClient`] is the production implementation; tests swap
//! in an in-memory backend so controller logic runs without a network.

use async_trait::async_trait;

use super::customer::Customer;
use super::error::ApiError;
use super::order::Order;
use super::page::Paginated;

/// Customer listing and mutation operations.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Fetch one page of customers, filtered by contact name.
    ///
    /// An empty `contact_name` matches everything.
    async fn list(
        &self,
        page: usize,
        size: usize,
        contact_name: &str,
    ) -> Result<Paginated<Customer>, ApiError>;

    /// Create a new customer. The server enforces `customerid` uniqueness;
    /// a conflict comes back as a rejection message.
    async fn create(&self, customer: &Customer) -> Result<Customer, ApiError>;

    /// Update an existing customer, keyed by `customerid`.
    async fn update(&self, customer: &Customer) -> Result<Customer, ApiError>;

    /// Delete a customer. Callers are responsible for confirming the action
    /// with the user first.
    async fn delete(&self, customer_id: &str) -> Result<(), ApiError>;
}

/// Read-only order listing.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetch one page of orders, filtered by customer and employee name.
    ///
    /// Empty filters match everything.
    async fn list(
        &self,
        page: usize,
        size: usize,
        customer_name: &str,
        employee_name: &str,
    ) -> Result<Paginated<Order>, ApiError>;
}
