//! # Northwind Admin
//!
//! Headless client library for a Northwind admin UI, talking to an external
//! REST backend.
//!
//! ## Features
//!
//! - **Customer CRUD**: paginated, contact-searchable listing plus
//!   create/update/delete with server-error-message extraction
//! - **Order listing**: read-only, filterable by customer and employee name
//! - **Field validation**: fixed per-field rule table (required flags,
//!   length limits, character sets) with Spanish user-facing messages
//! - **Form draft state**: touched/error tracking, so errors show only after
//!   the user has visited a field
//! - **Page controllers**: own pagination and search state; rendering stays
//!   with the embedder
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use northwind_admin::prelude::*;
//!
//! let config = ApiConfig::from_env()?;
//! let page_size = config.page_size;
//! let client = ApiClient::new(config);
//! let mut customers = CustomersPage::new(client, page_size);
//!
//! customers.load().await;
//! customers.apply_search("Maria").await;
//!
//! customers.open_create();
//! if let Some(form) = customers.form_mut() {
//!     form.set(CustomerField::CustomerId, "ALFKI");
//!     form.blur(CustomerField::CustomerId);
//! }
//! customers.submit().await;
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod form;
pub mod pages;
pub mod validation;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        customer::{Customer, CustomerField},
        error::ApiError,
        order::Order,
        page::Paginated,
        service::{CustomerService, OrderService},
    };

    // === Validation ===
    pub use crate::validation::{validate_draft, validate_field};

    // === Form ===
    pub use crate::form::{CustomerForm, FormMode};

    // === Client ===
    pub use crate::client::ApiClient;

    // === Config ===
    pub use crate::config::ApiConfig;

    // === Pages ===
    pub use crate::pages::{CustomersPage, Notice, NoticeKind, OrdersPage};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
