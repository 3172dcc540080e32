//! Admin credential boundary: password verification, session tokens, and
//! the request principal.

pub mod jwt;
pub mod password;
pub mod principal;

pub use principal::AdminUser;
