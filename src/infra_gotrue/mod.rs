mod credential_verifier_gotrue;
mod user_directory_gotrue;

pub use credential_verifier_gotrue::*;
pub use user_directory_gotrue::*;
