//! HTTP surface: the server-rendered landing page, the public registration
//! endpoint, and the bearer-token admin API.

pub mod landing;
pub mod leads;
pub mod photos;
pub mod router;
pub mod session;
pub mod settings;
pub mod stats;
pub mod template;

pub use router::{build_router, AppDeps};
