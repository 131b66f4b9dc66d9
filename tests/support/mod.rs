//! Shared test harness: sample data, an in-memory service for controller
//! tests and a mock REST backend for client tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;

use northwind_admin::prelude::*;

// =============================================================================
// Sample data
// =============================================================================

pub fn customer(id: &str, contact: &str) -> Customer {
    Customer {
        customer_id: id.to_string(),
        company_name: format!("{} S.A.", contact),
        contact_name: contact.to_string(),
        contact_title: "Owner".to_string(),
        address: "Av. Belgrano 100".to_string(),
        city: "Salta".to_string(),
        region: None,
        postal_code: Some("4400".to_string()),
        country: Some("Argentina".to_string()),
        phone: Some("+54 (387) 123-4567".to_string()),
        fax: None,
    }
}

pub fn order(id: &str, employee: &str, amount: f64) -> Order {
    Order {
        order_date: NaiveDate::from_ymd_opt(1997, 8, 25).unwrap(),
        customer_id: id.to_string(),
        company_name: format!("{} S.A.", id),
        employee_id: 1,
        employee_name: employee.to_string(),
        order_amount: amount,
    }
}

fn paginate<T: Clone>(all: &[T], page: usize, size: usize) -> Paginated<T> {
    let total = all.len();
    let total_pages = total.div_ceil(size.max(1));
    let content: Vec<T> = all
        .iter()
        .skip((page.saturating_sub(1)) * size)
        .take(size)
        .cloned()
        .collect();
    let number_of_elements = content.len();
    Paginated {
        content,
        page,
        page_size: size,
        total_elements: total,
        total_pages,
        number_of_elements,
    }
}

// =============================================================================
// In-memory service (controller tests, no network)
// =============================================================================

/// In-memory stand-in for the backend. Records every call so tests can
/// assert how many requests a flow issued and with which arguments.
#[derive(Clone, Default)]
pub struct InMemoryNorthwind {
    customers: Arc<RwLock<Vec<Customer>>>,
    orders: Arc<RwLock<Vec<Order>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemoryNorthwind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        let service = Self::new();
        *service.customers.write().unwrap() = customers;
        service
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let service = Self::new();
        *service.orders.write().unwrap() = orders;
        service
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn customer_ids(&self) -> Vec<String> {
        self.customers
            .read()
            .unwrap()
            .iter()
            .map(|c| c.customer_id.clone())
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CustomerService for InMemoryNorthwind {
    async fn list(
        &self,
        page: usize,
        size: usize,
        contact_name: &str,
    ) -> Result<Paginated<Customer>, ApiError> {
        self.record(format!(
            "list page={} size={} contact_name={}",
            page, size, contact_name
        ));
        let needle = contact_name.to_lowercase();
        let matching: Vec<Customer> = self
            .customers
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.contact_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(paginate(&matching, page, size))
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.record(format!("create id={}", customer.customer_id));
        let mut customers = self.customers.write().unwrap();
        if customers
            .iter()
            .any(|c| c.customer_id == customer.customer_id)
        {
            return Err(ApiError::Rejected {
                status: 409,
                message: format!(
                    "El ID \"{}\" ya existe. Por favor elige otro ID.",
                    customer.customer_id
                ),
            });
        }
        customers.push(customer.clone());
        Ok(customer.clone())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.record(format!("update id={}", customer.customer_id));
        let mut customers = self.customers.write().unwrap();
        match customers
            .iter_mut()
            .find(|c| c.customer_id == customer.customer_id)
        {
            Some(existing) => {
                *existing = customer.clone();
                Ok(customer.clone())
            }
            None => Err(ApiError::Rejected {
                status: 404,
                message: format!("El cliente {} no existe", customer.customer_id),
            }),
        }
    }

    async fn delete(&self, customer_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete id={}", customer_id));
        let mut customers = self.customers.write().unwrap();
        let before = customers.len();
        customers.retain(|c| c.customer_id != customer_id);
        if customers.len() == before {
            return Err(ApiError::Rejected {
                status: 404,
                message: format!("El cliente {} no existe", customer_id),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OrderService for InMemoryNorthwind {
    async fn list(
        &self,
        page: usize,
        size: usize,
        customer_name: &str,
        employee_name: &str,
    ) -> Result<Paginated<Order>, ApiError> {
        self.record(format!(
            "orders page={} size={} customer_name={} employee_name={}",
            page, size, customer_name, employee_name
        ));
        let customer = customer_name.to_lowercase();
        let employee = employee_name.to_lowercase();
        let matching: Vec<Order> = self
            .orders
            .read()
            .unwrap()
            .iter()
            .filter(|o| {
                o.company_name.to_lowercase().contains(&customer)
                    && o.employee_name.to_lowercase().contains(&employee)
            })
            .cloned()
            .collect();
        Ok(paginate(&matching, page, size))
    }
}

// =============================================================================
// Mock REST backend (API client tests, real HTTP)
// =============================================================================

/// State of the mock backend: seeded records plus a log of the raw query
/// strings it received.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub customers: Arc<RwLock<Vec<Customer>>>,
    pub orders: Arc<RwLock<Vec<Order>>>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn seeded(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        let backend = Self::default();
        *backend.customers.write().unwrap() = customers;
        *backend.orders.write().unwrap() = orders;
        backend
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

fn param(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

fn page_params(params: &HashMap<String, String>) -> (usize, usize) {
    let page = param(params, "page").parse().unwrap_or(1);
    let size = param(params, "size").parse().unwrap_or(10);
    (page, size)
}

async fn list_customers(
    State(state): State<MockBackend>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Paginated<Customer>> {
    state
        .queries
        .lock()
        .unwrap()
        .push(format!("GET /customers?{}", raw.unwrap_or_default()));
    let (page, size) = page_params(&params);
    let needle = param(&params, "contact_name").to_lowercase();
    let matching: Vec<Customer> = state
        .customers
        .read()
        .unwrap()
        .iter()
        .filter(|c| c.contact_name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Json(paginate(&matching, page, size))
}

async fn list_orders(
    State(state): State<MockBackend>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Paginated<Order>> {
    state
        .queries
        .lock()
        .unwrap()
        .push(format!("GET /orders?{}", raw.unwrap_or_default()));
    let (page, size) = page_params(&params);
    let customer = param(&params, "customer_name").to_lowercase();
    let employee = param(&params, "employee_name").to_lowercase();
    let matching: Vec<Order> = state
        .orders
        .read()
        .unwrap()
        .iter()
        .filter(|o| {
            o.company_name.to_lowercase().contains(&customer)
                && o.employee_name.to_lowercase().contains(&employee)
        })
        .cloned()
        .collect();
    Json(paginate(&matching, page, size))
}

async fn create_customer(
    State(state): State<MockBackend>,
    Json(customer): Json<Customer>,
) -> Result<Json<Customer>, (StatusCode, Json<serde_json::Value>)> {
    let mut customers = state.customers.write().unwrap();
    if customers
        .iter()
        .any(|c| c.customer_id == customer.customer_id)
    {
        // Shaped like the real backend: a forwarded database error with a
        // CONTEXT tail the client must strip.
        return Err((
            StatusCode::CONFLICT,
            Json(json!({
                "message": format!(
                    "El cliente con ID {} ya existe CONTEXT: PL/pgSQL function insert_customer() line 4",
                    customer.customer_id
                )
            })),
        ));
    }
    customers.push(customer.clone());
    Ok(Json(customer))
}

async fn update_customer(
    State(state): State<MockBackend>,
    Path(id): Path<String>,
    Json(customer): Json<Customer>,
) -> Result<Json<Customer>, (StatusCode, Json<serde_json::Value>)> {
    let mut customers = state.customers.write().unwrap();
    match customers.iter_mut().find(|c| c.customer_id == id) {
        Some(existing) => {
            *existing = customer.clone();
            Ok(Json(customer))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("El cliente {} no existe", id)})),
        )),
    }
}

async fn delete_customer(
    State(state): State<MockBackend>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    let mut customers = state.customers.write().unwrap();
    let before = customers.len();
    customers.retain(|c| c.customer_id != id);
    if customers.len() == before {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("El cliente {} no existe", id)})),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Serve the mock backend on an ephemeral port and return its address.
pub async fn spawn_backend(state: MockBackend) -> SocketAddr {
    let app = Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            axum::routing::put(update_customer).delete(delete_customer),
        )
        .route("/orders", get(list_orders))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    addr
}
