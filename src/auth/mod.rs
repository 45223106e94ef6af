pub mod jwt;

mod session;
pub use session::*;
