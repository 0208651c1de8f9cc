//! Nutriplan - Nutrition coaching backend.
//!
//! This crate implements the entitlement subsystem of the Nutriplan
//! application: a Kiwify payment-webhook receiver that synchronizes each
//! user's subscription flag, and the gate that protected pages consult
//! before rendering.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
