//! Customer records client: REST transport adapter, view-model controller
//! and settings shared by the front-ends.

pub mod api;
pub mod config;
pub mod error;
pub mod view_model;

pub use api::{CustomerApi, HttpCustomerClient, CUSTOMER_RESOURCE};
pub use config::{load_settings, validate_server_url, Settings};
pub use error::ClientError;
pub use view_model::{ActionOutcome, CustomerViewModel, UserPrompt};

#[cfg(test)]
#[path = "tests/mock_backend.rs"]
mod mock_backend;
