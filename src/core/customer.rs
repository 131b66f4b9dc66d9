//! Customer record and its field table
//!
//! The backend keys customers by `customerid` (a natural key, max 5
//! alphanumeric characters); uniqueness is enforced server-side. Wire field
//! names are the lower-case concatenated forms the backend expects.

use serde::{Deserialize, Serialize};

/// A Northwind customer as exchanged with the REST backend.
///
/// Optional fields serialize to `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customerid")]
    pub customer_id: String,
    #[serde(rename = "companyname")]
    pub company_name: String,
    #[serde(rename = "contactname")]
    pub contact_name: String,
    #[serde(rename = "contacttitle")]
    pub contact_title: String,
    pub address: String,
    pub city: String,
    pub region: Option<String>,
    #[serde(rename = "postalcode")]
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl Customer {
    /// Read a field as the string the form layer works with.
    ///
    /// Optional fields that are unset read as the empty string.
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::CustomerId => &self.customer_id,
            CustomerField::CompanyName => &self.company_name,
            CustomerField::ContactName => &self.contact_name,
            CustomerField::ContactTitle => &self.contact_title,
            CustomerField::Address => &self.address,
            CustomerField::City => &self.city,
            CustomerField::Region => self.region.as_deref().unwrap_or(""),
            CustomerField::PostalCode => self.postal_code.as_deref().unwrap_or(""),
            CustomerField::Country => self.country.as_deref().unwrap_or(""),
            CustomerField::Phone => self.phone.as_deref().unwrap_or(""),
            CustomerField::Fax => self.fax.as_deref().unwrap_or(""),
        }
    }
}

/// Field keys of [`Customer`], in display order.
///
/// This replaces the dynamic `Record<keyof Customer, …>` maps of a schemaless
/// client with a fixed table: every per-field rule (required flag, maximum
/// length, wire name, label) lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerField {
    CustomerId,
    CompanyName,
    ContactName,
    ContactTitle,
    Address,
    City,
    Region,
    PostalCode,
    Country,
    Phone,
    Fax,
}

impl CustomerField {
    /// All fields, in the order the form displays them.
    pub const ALL: [CustomerField; 11] = [
        CustomerField::CustomerId,
        CustomerField::CompanyName,
        CustomerField::ContactName,
        CustomerField::ContactTitle,
        CustomerField::Address,
        CustomerField::City,
        CustomerField::Region,
        CustomerField::PostalCode,
        CustomerField::Country,
        CustomerField::Phone,
        CustomerField::Fax,
    ];

    /// Wire name of the field (also its JSON key).
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerField::CustomerId => "customerid",
            CustomerField::CompanyName => "companyname",
            CustomerField::ContactName => "contactname",
            CustomerField::ContactTitle => "contacttitle",
            CustomerField::Address => "address",
            CustomerField::City => "city",
            CustomerField::Region => "region",
            CustomerField::PostalCode => "postalcode",
            CustomerField::Country => "country",
            CustomerField::Phone => "phone",
            CustomerField::Fax => "fax",
        }
    }

    /// Label shown next to the input in the admin UI.
    pub fn label(self) -> &'static str {
        match self {
            CustomerField::CustomerId => "ID",
            CustomerField::CompanyName => "Compañía",
            CustomerField::ContactName => "Contacto",
            CustomerField::ContactTitle => "Cargo",
            CustomerField::Address => "Dirección",
            CustomerField::City => "Ciudad",
            CustomerField::Region => "Región",
            CustomerField::PostalCode => "Código Postal",
            CustomerField::Country => "País",
            CustomerField::Phone => "Teléfono",
            CustomerField::Fax => "Fax",
        }
    }

    /// Maximum length accepted by the database schema.
    pub fn max_len(self) -> usize {
        match self {
            CustomerField::CustomerId => 5,
            CustomerField::CompanyName => 40,
            CustomerField::ContactName => 30,
            CustomerField::ContactTitle => 30,
            CustomerField::Address => 60,
            CustomerField::City => 15,
            CustomerField::Region => 15,
            CustomerField::PostalCode => 10,
            CustomerField::Country => 15,
            CustomerField::Phone => 24,
            CustomerField::Fax => 24,
        }
    }

    /// Whether the field must be non-empty at submission time.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            CustomerField::CustomerId
                | CustomerField::CompanyName
                | CustomerField::ContactName
                | CustomerField::ContactTitle
                | CustomerField::Address
                | CustomerField::City
        )
    }
}
