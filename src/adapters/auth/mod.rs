//! Authentication adapters.

mod jwt;
mod mock;

pub use jwt::JwtIdentityProvider;
pub use mock::MockIdentityProvider;
