//! Core domain types for the Northwind admin client

pub mod customer;
pub mod error;
pub mod order;
pub mod page;
pub mod service;

pub use customer::{Customer, CustomerField};
pub use error::ApiError;
pub use order::Order;
pub use page::Paginated;
pub use service::{CustomerService, OrderService};
