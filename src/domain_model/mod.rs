mod session;
mod user;
mod username;

pub use session::*;
pub use user::*;
pub use username::*;
