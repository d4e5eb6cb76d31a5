//! Decoding and validation of credential-management requests.
//!
//! Payloads are decoded into the shapes in [`models`] and then checked by a
//! [`validation::RequestValidator`] before any authentication, persistence or
//! email delivery takes place.

pub mod check;
pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod validation;

pub use config::Config;
pub use error::{ErrAuthParam, RequestError};
pub use validation::{RequestValidator, Validatable};
