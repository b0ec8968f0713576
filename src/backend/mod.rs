//! Backend client module for HTTP communication

mod client;
mod traits;

pub use client::{BackendClient, NoopBackend, SubmitError};
pub use traits::BackendClientTrait;

#[cfg(test)]
pub use traits::MockBackendClientTrait;
