//! Page controllers
//!
//! A page controller owns the pagination and filter state of one admin view
//! and talks to the backend through the service traits. Everything here is
//! pull-based: the embedder awaits the controller methods from its event
//! handlers and re-renders from the accessors afterwards.

pub mod customers;
pub mod orders;

pub use customers::CustomersPage;
pub use orders::OrdersPage;

/// Severity of a page-level notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot notification shown outside the modal (update/delete results,
/// failed list fetches).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}
