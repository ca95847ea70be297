//! HTTP route modules
//!
//! Route handlers organized by functionality.

pub mod component;
pub mod health;
