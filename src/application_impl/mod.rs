mod auth_service_fake;
mod auth_service_impl;

pub use auth_service_fake::*;
pub use auth_service_impl::*;

#[cfg(test)]
pub(crate) mod test_fixtures;
