//! Domain models and services for fuel dispensing

pub mod model;
pub mod service;

pub use model::*;
pub use service::session_report;
