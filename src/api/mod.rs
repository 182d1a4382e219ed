//! Iconfinder API client and models.
//!
//! The client is blocking; requests run synchronously on the calling thread.

mod client;
mod error;
pub mod fields;
pub mod http_date;
mod models;

pub use client::{
    error_for_status, Client, ClientConfig, TlsVerification, DEFAULT_API_URL, DEFAULT_SITE_URL,
};
pub use error::{ApiError, Result};
pub use http_date::{force_naive_utc, http_datetime, http_datetime_naive, parse_http_datetime};
pub use models::{
    Author, Category, CategoryList, License, LicenseScope, PageRequest, Style, StyleList, User,
    UserOrAuthor,
};
