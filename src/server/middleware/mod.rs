//! HTTP middleware

pub mod admission;

pub use admission::AdmissionMiddleware;
