//! Customer form draft state
//!
//! A [`CustomerForm`] lives while the create/edit modal is open: it tracks
//! per-field values, which fields the user has visited, and the current
//! error per field. Errors are computed eagerly but meant to be displayed
//! only once a field is touched, so the user is not shouted at before
//! interacting with a field.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{Customer, CustomerField};
use crate::validation::{validate_draft, validate_field};

/// Whether the form creates a new customer or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Draft state of the customer create/edit modal.
#[derive(Debug, Clone)]
pub struct CustomerForm {
    mode: FormMode,
    values: BTreeMap<CustomerField, String>,
    touched: BTreeSet<CustomerField>,
    errors: BTreeMap<CustomerField, String>,
    server_error: Option<String>,
}

impl CustomerForm {
    /// An empty draft for creating a new customer.
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            values: BTreeMap::new(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            server_error: None,
        }
    }

    /// A draft prefilled from an existing customer. The ID stays fixed in
    /// this mode; it is the key the update is sent under.
    pub fn edit(customer: &Customer) -> Self {
        let mut values = BTreeMap::new();
        for field in CustomerField::ALL {
            let value = customer.field(field);
            if !value.is_empty() {
                values.insert(field, value.to_string());
            }
        }
        Self {
            mode: FormMode::Edit,
            values,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            server_error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether the UI should allow editing this field. The natural key is
    /// frozen once the record exists.
    pub fn is_editable(&self, field: CustomerField) -> bool {
        self.mode == FormMode::Create || field != CustomerField::CustomerId
    }

    /// Current value of a field (empty string when never set).
    pub fn value(&self, field: CustomerField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, field: CustomerField) -> bool {
        self.touched.contains(&field)
    }

    /// Record a keystroke. The value always updates; the error for the field
    /// is refreshed only if the user already visited it, so a field is not
    /// flagged while being typed into for the first time.
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    /// Record the user leaving a field: mark it touched and validate it.
    pub fn blur(&mut self, field: CustomerField) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Current error for a field, whether or not it is touched.
    pub fn error(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Error to actually display: present only when the field is touched.
    pub fn visible_error(&self, field: CustomerField) -> Option<&str> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    /// All current errors, in field display order.
    pub fn errors(&self) -> &BTreeMap<CustomerField, String> {
        &self.errors
    }

    /// Rejection message from the backend, shown at the top of the modal.
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn set_server_error(&mut self, message: impl Into<String>) {
        self.server_error = Some(message.into());
    }

    /// Validate every field, marking all of them touched so previously
    /// hidden errors become visible. Returns true when the draft is clean.
    pub fn validate_all(&mut self) -> bool {
        for field in CustomerField::ALL {
            self.touched.insert(field);
        }
        self.errors = validate_draft(&self.values);
        self.errors.is_empty()
    }

    /// Run the submission check: validate everything and, if clean, assemble
    /// the customer to send. On `None` the per-field errors are populated
    /// and visible, and no network call should be made.
    pub fn submit(&mut self) -> Option<Customer> {
        self.server_error = None;
        if self.validate_all() {
            Some(self.to_customer())
        } else {
            None
        }
    }

    fn revalidate(&mut self, field: CustomerField) {
        match validate_field(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Assemble a [`Customer`] from the draft. Empty optional fields become
    /// `None`. Call only on a validated draft.
    fn to_customer(&self) -> Customer {
        let required = |field: CustomerField| self.value(field).to_string();
        let optional = |field: CustomerField| {
            let value = self.value(field);
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        Customer {
            customer_id: required(CustomerField::CustomerId),
            company_name: required(CustomerField::CompanyName),
            contact_name: required(CustomerField::ContactName),
            contact_title: required(CustomerField::ContactTitle),
            address: required(CustomerField::Address),
            city: required(CustomerField::City),
            region: optional(CustomerField::Region),
            postal_code: optional(CustomerField::PostalCode),
            country: optional(CustomerField::Country),
            phone: optional(CustomerField::Phone),
            fax: optional(CustomerField::Fax),
        }
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}
