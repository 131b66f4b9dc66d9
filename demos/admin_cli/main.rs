//! Minimal command-line walk through the admin client: lists the first page
//! of customers and the first page of orders.
//!
//! ```sh
//! NORTHWIND_API_URL=http://localhost:8080 cargo run --example admin_cli
//! ```

use northwind_admin::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env()?;
    let page_size = config.page_size;
    let client = ApiClient::new(config);

    let mut customers = CustomersPage::new(client.clone(), page_size);
    customers.load().await;
    if let Some(notice) = customers.take_notice() {
        eprintln!("⚠️  {}", notice.text);
    }
    if let Some(data) = customers.data() {
        println!(
            "👥 Clientes (página {}/{}, {} en total)",
            data.page, data.total_pages, data.total_elements
        );
        for c in &data.content {
            println!("  {:5}  {:30}  {}", c.customer_id, c.contact_name, c.city);
        }
    }

    let mut orders = OrdersPage::new(client, page_size);
    orders.load().await;
    if let Some(notice) = orders.take_notice() {
        eprintln!("⚠️  {}", notice.text);
    }
    if let Some(data) = orders.data() {
        println!(
            "\n📦 Órdenes (página {}/{}, {} en total)",
            data.page, data.total_pages, data.total_elements
        );
        for o in &data.content {
            println!(
                "  {}  {:5}  {:25}  $ {:>10.2}",
                o.order_date, o.customer_id, o.employee_name, o.order_amount
            );
        }
    }

    Ok(())
}
