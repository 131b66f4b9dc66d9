//! Orders page: read-only paginated listing with customer/employee filters.

use crate::core::{Order, OrderService, Paginated};

use super::Notice;

/// Controller for the orders view. No mutation: just pagination and the two
/// name filters.
pub struct OrdersPage<S> {
    service: S,
    page_size: usize,
    page: usize,
    customer_filter: String,
    employee_filter: String,
    data: Option<Paginated<Order>>,
    notice: Option<Notice>,
}

impl<S: OrderService> OrdersPage<S> {
    pub fn new(service: S, page_size: usize) -> Self {
        Self {
            service,
            page_size,
            page: 1,
            customer_filter: String::new(),
            employee_filter: String::new(),
            data: None,
            notice: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn customer_filter(&self) -> &str {
        &self.customer_filter
    }

    pub fn employee_filter(&self) -> &str {
        &self.employee_filter
    }

    pub fn data(&self) -> Option<&Paginated<Order>> {
        self.data.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn can_prev(&self) -> bool {
        self.data.as_ref().is_some_and(Paginated::has_prev)
    }

    pub fn can_next(&self) -> bool {
        self.data.as_ref().is_some_and(Paginated::has_next)
    }

    /// Fetch the current page with the current filters.
    pub async fn load(&mut self) {
        match self
            .service
            .list(
                self.page,
                self.page_size,
                &self.customer_filter,
                &self.employee_filter,
            )
            .await
        {
            Ok(data) => {
                tracing::debug!(page = data.page, total = data.total_elements, "orders loaded");
                self.data = Some(data);
            }
            Err(error) => {
                tracing::warn!(%error, "order list fetch failed");
                self.notice = Some(Notice::error(error.user_message()));
            }
        }
    }

    /// Move to the next page and re-fetch; a no-op on the last page.
    pub async fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        self.load().await;
        true
    }

    /// Move to the previous page and re-fetch; a no-op on the first page.
    pub async fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        self.load().await;
        true
    }

    /// Apply new filters: reset to page 1 and fetch exactly once.
    pub async fn apply_filters(
        &mut self,
        customer: impl Into<String>,
        employee: impl Into<String>,
    ) {
        self.customer_filter = customer.into();
        self.employee_filter = employee.into();
        self.page = 1;
        self.load().await;
    }
}
