//! Customers page: paginated listing, contact search and the create/edit
//! modal flow.

use crate::core::{Customer, CustomerService, Paginated};
use crate::form::{CustomerForm, FormMode};

use super::Notice;

/// Controller for the customers view.
///
/// Holds the 1-indexed page number, the contact-name search text, the last
/// fetched page and the draft form while a modal is open. A failed fetch
/// keeps the previous data on screen and records a [`Notice`] instead.
pub struct CustomersPage<S> {
    service: S,
    page_size: usize,
    page: usize,
    search: String,
    data: Option<Paginated<Customer>>,
    form: Option<CustomerForm>,
    notice: Option<Notice>,
}

impl<S: CustomerService> CustomersPage<S> {
    pub fn new(service: S, page_size: usize) -> Self {
        Self {
            service,
            page_size,
            page: 1,
            search: String::new(),
            data: None,
            form: None,
            notice: None,
        }
    }

    /// Current page number (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Last successfully fetched page, or `None` before the first load.
    pub fn data(&self) -> Option<&Paginated<Customer>> {
        self.data.as_ref()
    }

    /// Draft form while the create/edit modal is open.
    pub fn form(&self) -> Option<&CustomerForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CustomerForm> {
        self.form.as_mut()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Consume the pending notification, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Whether the pagination "previous"/"next" controls are enabled.
    pub fn can_prev(&self) -> bool {
        self.data.as_ref().is_some_and(Paginated::has_prev)
    }

    pub fn can_next(&self) -> bool {
        self.data.as_ref().is_some_and(Paginated::has_next)
    }

    /// Fetch the current page with the current search text.
    pub async fn load(&mut self) {
        match self
            .service
            .list(self.page, self.page_size, &self.search)
            .await
        {
            Ok(data) => {
                tracing::debug!(page = data.page, total = data.total_elements, "customers loaded");
                self.data = Some(data);
            }
            Err(error) => {
                tracing::warn!(%error, "customer list fetch failed");
                self.notice = Some(Notice::error(error.user_message()));
            }
        }
    }

    /// Move to the next page and re-fetch. A no-op on the last page (or
    /// before the first load): no request is issued and `false` is returned.
    pub async fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        self.load().await;
        true
    }

    /// Move to the previous page and re-fetch. A no-op on the first page.
    pub async fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        self.load().await;
        true
    }

    /// Apply a new search text: reset to page 1 and fetch exactly once.
    pub async fn apply_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
        self.load().await;
    }

    /// Open the creation modal with an empty draft.
    pub fn open_create(&mut self) {
        self.form = Some(CustomerForm::new());
    }

    /// Open the edit modal prefilled from an existing row.
    pub fn open_edit(&mut self, customer: &Customer) {
        self.form = Some(CustomerForm::edit(customer));
    }

    /// Close the modal, discarding the draft.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open modal.
    ///
    /// Validation failures keep the modal open with per-field errors and
    /// issue no request. On success the modal closes, the draft is dropped
    /// and the current page reloads. A rejected create keeps the modal open
    /// with the server message so the user does not re-enter everything; a
    /// rejected update closes the modal and raises a notice.
    pub async fn submit(&mut self) -> bool {
        let (mode, customer) = {
            let Some(form) = self.form.as_mut() else {
                return false;
            };
            let mode = form.mode();
            match form.submit() {
                Some(customer) => (mode, customer),
                None => return false,
            }
        };

        let result = match mode {
            FormMode::Create => self.service.create(&customer).await.map(|_| "Cliente creado"),
            FormMode::Edit => self
                .service
                .update(&customer)
                .await
                .map(|_| "Cliente actualizado"),
        };

        match result {
            Ok(text) => {
                self.form = None;
                self.notice = Some(Notice::success(text));
                self.load().await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, customer_id = %customer.customer_id, "save failed");
                match mode {
                    FormMode::Create => {
                        if let Some(form) = self.form.as_mut() {
                            form.set_server_error(error.user_message());
                        }
                    }
                    FormMode::Edit => {
                        self.form = None;
                        self.notice = Some(Notice::error(error.user_message()));
                    }
                }
                false
            }
        }
    }

    /// Delete a customer. `confirmed` is the answer of the confirmation
    /// dialog: when false the action aborts silently, without a request or a
    /// notice.
    pub async fn delete(&mut self, customer_id: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        match self.service.delete(customer_id).await {
            Ok(()) => {
                self.notice = Some(Notice::success("Cliente eliminado"));
                self.load().await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, customer_id, "delete failed");
                self.notice = Some(Notice::error(error.user_message()));
                false
            }
        }
    }
}
