//! Domain layer - pure types with no I/O.

pub mod entitlement;
pub mod foundation;
