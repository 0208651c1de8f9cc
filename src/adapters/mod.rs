//! Adapters - Implementations of the ports.

pub mod auth;
pub mod http;
pub mod memory;
pub mod notify;
pub mod postgres;
