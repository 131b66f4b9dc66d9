//! Order records (read-only projection)
//!
//! Orders are never mutated from the admin UI; the backend joins customer and
//! employee names into the projection so the table can render without extra
//! lookups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Northwind order as returned by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderdate")]
    pub order_date: NaiveDate,
    #[serde(rename = "customerid")]
    pub customer_id: String,
    #[serde(rename = "companyname")]
    pub company_name: String,
    #[serde(rename = "employeeid")]
    pub employee_id: i64,
    #[serde(rename = "employeename")]
    pub employee_name: String,
    #[serde(rename = "orderamount")]
    pub order_amount: f64,
}
