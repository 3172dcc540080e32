//! Cross-layer error types shared by repositories and handlers.

pub mod entity;

pub use entity::NotFoundError;
