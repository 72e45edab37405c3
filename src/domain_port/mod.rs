mod credential_verifier;
mod user_directory;

pub use credential_verifier::*;
pub use user_directory::*;
