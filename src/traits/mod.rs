//! Core traits binding implementations to the services they provide.

mod inject;
mod service;

pub use inject::Inject;
pub use service::Implements;
