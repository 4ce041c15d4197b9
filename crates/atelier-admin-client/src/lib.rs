//! Owner API client library for the Atelier dashboard.
//!
//! Provides the [`OwnerApi`] contract and an HTTP implementation of it.

pub mod api;
pub mod error;
pub mod http;

pub use api::OwnerApi;
pub use error::ClientError;
pub use http::{HttpClient, HttpClientOptions};
